use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::grid::CellRect;
use crate::mask::OpacityMask;

/// Tight extent of a detected sprite in absolute image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// A 4-connected set of opaque pixels, summarised by size and extent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    pub pixel_count: usize,
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl Component {
    fn seed(x: u32, y: u32) -> Self {
        Self {
            pixel_count: 0,
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn add(&mut self, x: u32, y: u32) {
        self.pixel_count += 1;
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            x: self.min_x,
            y: self.min_y,
            w: self.max_x - self.min_x + 1,
            h: self.max_y - self.min_y + 1,
        }
    }
}

/// Label the 4-connected opaque components of `mask` inside `region`.
///
/// Components are returned in discovery order: a component is found when the
/// row-major scan first reaches one of its pixels. Only per-component size and
/// extent are kept; no label image is materialised.
pub fn find_components(mask: &OpacityMask, region: &CellRect) -> Vec<Component> {
    let region = CellRect::new(
        region.x0,
        region.y0,
        region.x1.min(mask.width()),
        region.y1.min(mask.height()),
    );
    if region.is_empty() {
        return Vec::new();
    }

    let w = region.width() as usize;
    let mut visited = vec![false; w * region.height() as usize];
    let local = |x: u32, y: u32| (y - region.y0) as usize * w + (x - region.x0) as usize;

    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for y in region.y0..region.y1 {
        for x in region.x0..region.x1 {
            if visited[local(x, y)] || !mask.get(x, y) {
                continue;
            }

            let mut component = Component::seed(x, y);
            visited[local(x, y)] = true;
            queue.push_back((x, y));

            while let Some((cx, cy)) = queue.pop_front() {
                component.add(cx, cy);

                let neighbors = [
                    (cx > region.x0).then(|| (cx - 1, cy)),
                    (cx + 1 < region.x1).then(|| (cx + 1, cy)),
                    (cy > region.y0).then(|| (cx, cy - 1)),
                    (cy + 1 < region.y1).then(|| (cx, cy + 1)),
                ];
                for (nx, ny) in neighbors.into_iter().flatten() {
                    let idx = local(nx, ny);
                    if !visited[idx] && mask.get(nx, ny) {
                        visited[idx] = true;
                        queue.push_back((nx, ny));
                    }
                }
            }

            components.push(component);
        }
    }

    components
}
