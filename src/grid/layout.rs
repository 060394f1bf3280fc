use std::num::NonZeroU32;

use super::CellRect;

/// One logical sprite slot of a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub row: u32,
    pub col: u32,
    pub rect: CellRect,
}

/// Row/column partition of an image into cells.
///
/// Boundary `k` of an axis split into `n` parts of a `len`-pixel extent sits at
/// `round(k * len / n)`. Every boundary is rounded on its own and shared by the
/// two cells on either side of it, so cells tile the image without gaps or
/// overlap while neighbouring cells may differ in size by one pixel.
/// Ties round half to even.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    width: u32,
    height: u32,
    rows: NonZeroU32,
    columns: NonZeroU32,
}

impl GridLayout {
    pub fn new(width: u32, height: u32, rows: NonZeroU32, columns: NonZeroU32) -> Self {
        Self {
            width,
            height,
            rows,
            columns,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows.get()
    }

    pub fn columns(&self) -> u32 {
        self.columns.get()
    }

    /// Vertical extent `(y0, y1)` of a row
    pub fn row_span(&self, row: u32) -> (u32, u32) {
        let cell_h = f64::from(self.height) / f64::from(self.rows.get());
        (boundary(row, cell_h), boundary(row + 1, cell_h))
    }

    /// Horizontal extent `(x0, x1)` of a column
    pub fn column_span(&self, col: u32) -> (u32, u32) {
        let cell_w = f64::from(self.width) / f64::from(self.columns.get());
        (boundary(col, cell_w), boundary(col + 1, cell_w))
    }

    pub fn cell(&self, row: u32, col: u32) -> GridCell {
        let (y0, y1) = self.row_span(row);
        let (x0, x1) = self.column_span(col);
        GridCell {
            row,
            col,
            rect: CellRect::new(x0, y0, x1, y1),
        }
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.columns()).map(move |col| self.cell(row, col)))
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "boundaries are non-negative and never exceed the u32 image extent"
)]
fn boundary(index: u32, cell: f64) -> u32 {
    (f64::from(index) * cell).round_ties_even() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(width: u32, height: u32, rows: u32, columns: u32) -> GridLayout {
        GridLayout::new(
            width,
            height,
            NonZeroU32::new(rows).unwrap(),
            NonZeroU32::new(columns).unwrap(),
        )
    }

    #[test]
    fn test_even_split() {
        let grid = layout(1024, 1536, 8, 4);

        assert_eq!(grid.cell(0, 0).rect, CellRect::new(0, 0, 256, 192));
        assert_eq!(grid.cell(7, 3).rect, CellRect::new(768, 1344, 1024, 1536));
        assert_eq!(grid.cells().count(), 32);
    }

    #[test]
    fn test_uneven_split_rounds_each_boundary() {
        // 1024 / 5 = 204.8
        let grid = layout(1024, 1536, 8, 5);
        let spans: Vec<_> = (0..5).map(|c| grid.column_span(c)).collect();

        assert_eq!(
            spans,
            vec![(0, 205), (205, 410), (410, 614), (614, 819), (819, 1024)]
        );
    }

    #[test]
    fn test_boundaries_are_shared_and_cover_image() {
        for (width, columns) in [(1024, 5), (1000, 3), (7, 4), (1023, 8), (5, 2)] {
            let grid = layout(width, 100, 8, columns);

            assert_eq!(grid.column_span(0).0, 0);
            assert_eq!(grid.column_span(columns - 1).1, width);
            for c in 1..columns {
                assert_eq!(grid.column_span(c - 1).1, grid.column_span(c).0);
            }

            // Sizes never drift by more than one pixel
            let widths: Vec<_> = (0..columns)
                .map(|c| {
                    let (x0, x1) = grid.column_span(c);
                    x1 - x0
                })
                .collect();
            let min = *widths.iter().min().unwrap();
            let max = *widths.iter().max().unwrap();
            assert!(max - min <= 1, "{width}/{columns}: {widths:?}");
        }
    }

    #[test]
    fn test_ties_round_half_to_even() {
        // 5 / 2 = 2.5 -> 2
        let grid = layout(5, 8, 8, 2);
        assert_eq!(grid.column_span(0), (0, 2));
        assert_eq!(grid.column_span(1), (2, 5));
    }

    #[test]
    fn test_cells_row_major() {
        let grid = layout(40, 20, 2, 2);
        let order: Vec<_> = grid.cells().map(|c| (c.row, c.col)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}
