use image::DynamicImage;

use super::OpacityMask;

/// Channel value at or above which an RGB pixel counts as background
pub const LUMA_BACKGROUND_CUTOFF: u8 = 240;

/// Build an opacity mask from a decoded image.
///
/// Images with an alpha channel mark a pixel opaque when `alpha > threshold`.
/// Images without one treat a near-white background as transparent: a pixel is
/// opaque when any of its R/G/B channels is below [`LUMA_BACKGROUND_CUTOFF`].
pub fn build_mask(image: &DynamicImage, threshold: u8) -> OpacityMask {
    if image.color().has_alpha() {
        let rgba = image.to_rgba8();
        OpacityMask::from_fn(rgba.width(), rgba.height(), |x, y| {
            rgba.get_pixel(x, y)[3] > threshold
        })
    } else {
        let rgb = image.to_rgb8();
        OpacityMask::from_fn(rgb.width(), rgb.height(), |x, y| {
            rgb.get_pixel(x, y)
                .0
                .iter()
                .any(|&c| c < LUMA_BACKGROUND_CUTOFF)
        })
    }
}
