use crate::grid::CellRect;

/// Boolean opacity grid with the same dimensions as its source image.
///
/// Stored row-major in a flat buffer. Reads outside the bounds return `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpacityMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl OpacityMask {
    /// Build a mask by evaluating `is_opaque` for every pixel in row-major order
    pub fn from_fn(width: u32, height: u32, mut is_opaque: impl FnMut(u32, u32) -> bool) -> Self {
        let mut bits = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                bits.push(is_opaque(x, y));
            }
        }
        Self {
            width,
            height,
            bits,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[self.index(x, y)]
    }

    /// Number of opaque pixels inside `rect`, clipped to the mask bounds
    pub fn count_in(&self, rect: &CellRect) -> usize {
        let x1 = rect.x1.min(self.width);
        let y1 = rect.y1.min(self.height);
        (rect.y0..y1)
            .map(|y| (rect.x0..x1).filter(|&x| self.bits[self.index(x, y)]).count())
            .sum()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
