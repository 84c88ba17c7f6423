//! Resizing of source photos to the model's input dimensions.

use crate::core::errors::ClassifyError;
use image::{DynamicImage, RgbaImage, imageops};

/// Stretches `img` to exactly `width` × `height`.
///
/// The source fills the whole target without letterboxing or cropping;
/// aspect ratio is not preserved, since classification models are trained
/// against exactly this anisotropic scaling. Resampling uses a fixed
/// bilinear filter so identical inputs always produce identical bytes.
///
/// Alpha is carried through untouched here; compositing happens when the
/// bitmap is rendered into tensor bytes.
///
/// # Errors
///
/// Returns `InvalidInputImage` when either the target or the source has a
/// zero dimension, since there are no pixels to rasterize.
pub fn resize_to_fill(
    img: &DynamicImage,
    width: u32,
    height: u32,
) -> Result<RgbaImage, ClassifyError> {
    if width == 0 || height == 0 {
        return Err(ClassifyError::invalid_input_image(format!(
            "target size {width}x{height} has no pixels"
        )));
    }
    if img.width() == 0 || img.height() == 0 {
        return Err(ClassifyError::invalid_input_image(
            "source bitmap has no pixels",
        ));
    }

    let rgba = img.to_rgba8();
    Ok(imageops::resize(
        &rgba,
        width,
        height,
        imageops::FilterType::Triangle,
    ))
}
