use std::num::NonZeroU32;

use image::DynamicImage;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{ALPHA_THRESHOLD, CELL_MARGIN, DetectConfig, GRID_ROWS, MIN_PIXELS};
use crate::detect::{BoundingBox, extract_cell};
use crate::error::CellboxError;
use crate::grid::GridLayout;
use crate::mask::{OpacityMask, build_mask};

/// Detected sprite boxes for one sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetResult {
    pub image_width: u32,
    pub image_height: u32,
    /// One entry per grid row; each holds the boxes of occupied cells in
    /// column order
    pub grid: Vec<Vec<BoundingBox>>,
}

impl SheetResult {
    /// Total number of detected sprites
    pub fn sprite_count(&self) -> usize {
        self.grid.iter().map(Vec::len).sum()
    }
}

/// Runs per-cell detection over a whole sheet
#[derive(Debug, Clone, Copy)]
pub struct SheetProcessor {
    rows: NonZeroU32,
    margin: u32,
    min_pixels: usize,
    alpha_threshold: u8,
}

impl Default for SheetProcessor {
    fn default() -> Self {
        Self {
            rows: NonZeroU32::new(GRID_ROWS).unwrap_or(NonZeroU32::MIN),
            margin: CELL_MARGIN,
            min_pixels: MIN_PIXELS,
            alpha_threshold: ALPHA_THRESHOLD,
        }
    }
}

impl SheetProcessor {
    pub fn new(rows: NonZeroU32) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn from_config(config: &DetectConfig) -> Result<Self, CellboxError> {
        let rows = NonZeroU32::new(config.rows).ok_or(CellboxError::ZeroRows)?;
        Ok(Self::new(rows)
            .margin(config.margin)
            .min_pixels(config.min_pixels)
            .alpha_threshold(config.alpha_threshold))
    }

    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn min_pixels(mut self, min_pixels: usize) -> Self {
        self.min_pixels = min_pixels;
        self
    }

    pub fn alpha_threshold(mut self, threshold: u8) -> Self {
        self.alpha_threshold = threshold;
        self
    }

    /// Build the opacity mask for `image` and process it
    pub fn process_image(&self, image: &DynamicImage, columns: NonZeroU32) -> SheetResult {
        let mask = build_mask(image, self.alpha_threshold);
        assert_eq!(
            (mask.width(), mask.height()),
            (image.width(), image.height()),
            "opacity mask must match image dimensions"
        );
        self.process(&mask, columns)
    }

    /// Detect the dominant sprite of every cell.
    ///
    /// The result always holds exactly one entry per row, even when a row has
    /// no occupied cells.
    pub fn process(&self, mask: &OpacityMask, columns: NonZeroU32) -> SheetResult {
        let layout = GridLayout::new(mask.width(), mask.height(), self.rows, columns);

        let mut grid: Vec<Vec<BoundingBox>> = vec![Vec::new(); layout.rows() as usize];
        for cell in layout.cells() {
            if let Some(bbox) = extract_cell(mask, &cell.rect, self.margin, self.min_pixels) {
                grid[cell.row as usize].push(bbox);
            }
        }

        for (row, boxes) in grid.iter().enumerate() {
            if boxes.is_empty() {
                debug!("  Row {}: empty", row);
            } else {
                let sizes: Vec<_> = boxes.iter().map(|b| format!("{}x{}", b.w, b.h)).collect();
                debug!(
                    "  Row {}: {} sprites  [{}]",
                    row,
                    boxes.len(),
                    sizes.join(", ")
                );
            }
        }

        SheetResult {
            image_width: mask.width(),
            image_height: mask.height(),
            grid,
        }
    }
}
