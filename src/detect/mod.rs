mod component;
mod extractor;

pub use component::{BoundingBox, Component, find_components};
pub use extractor::extract_cell;
