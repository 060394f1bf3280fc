mod alpha;
mod opacity;

pub use alpha::{LUMA_BACKGROUND_CUTOFF, build_mask};
pub use opacity::OpacityMask;
