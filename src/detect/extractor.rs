use super::{BoundingBox, Component, find_components};
use crate::grid::CellRect;
use crate::mask::OpacityMask;

/// Find the bounding box of the dominant sprite inside one grid cell.
///
/// The cell is inset by `margin` to keep neighbouring sprites out, then the
/// largest 4-connected opaque component of the interior is selected. Returns
/// `None` when the interior holds fewer than `min_pixels` opaque pixels, or
/// when the largest component alone is below `min_pixels`.
pub fn extract_cell(
    mask: &OpacityMask,
    cell: &CellRect,
    margin: u32,
    min_pixels: usize,
) -> Option<BoundingBox> {
    let interior = cell.inset(margin);

    if mask.count_in(&interior) < min_pixels {
        return None;
    }

    let dominant = dominant_component(&find_components(mask, &interior))?;
    if dominant.pixel_count < min_pixels {
        return None;
    }

    Some(dominant.bounding_box())
}

/// Largest component; the earliest discovered one wins ties
fn dominant_component(components: &[Component]) -> Option<Component> {
    let mut best: Option<&Component> = None;
    for component in components {
        if best.is_none_or(|b| component.pixel_count > b.pixel_count) {
            best = Some(component);
        }
    }
    best.copied()
}
