/// A half-open pixel rectangle `[x0, x1) x [y0, y1)` in image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl CellRect {
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    pub fn height(&self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Shrink by `margin` pixels on every side.
    ///
    /// The near edge is clamped to the far edge and the far edge to the new
    /// near edge, so the result never inverts; a cell narrower than twice the
    /// margin collapses to an empty rectangle.
    pub fn inset(&self, margin: u32) -> CellRect {
        let x0 = self.x0.saturating_add(margin).min(self.x1);
        let x1 = self.x1.saturating_sub(margin).max(x0);
        let y0 = self.y0.saturating_add(margin).min(self.y1);
        let y1 = self.y1.saturating_sub(margin).max(y0);
        CellRect { x0, y0, x1, y1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset() {
        let rect = CellRect::new(0, 192, 256, 384);
        let inner = rect.inset(8);

        assert_eq!(inner, CellRect::new(8, 200, 248, 376));
        assert_eq!((inner.width(), inner.height()), (240, 176));
    }

    #[test]
    fn test_inset_never_inverts() {
        let rect = CellRect::new(10, 10, 20, 30);
        let inner = rect.inset(8);

        // x collapses: x0 = min(18, 20) = 18, x1 = max(12, 18) = 18
        assert_eq!(inner.x0, 18);
        assert_eq!(inner.x1, 18);
        assert_eq!(inner.width(), 0);
        assert_eq!(inner.height(), 4);
        assert!(inner.is_empty());
    }

    #[test]
    fn test_inset_larger_than_cell() {
        let inner = CellRect::new(0, 0, 4, 4).inset(100);
        assert_eq!(inner, CellRect::new(4, 4, 4, 4));
    }
}
