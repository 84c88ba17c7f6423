//! Utility functions for loading photos from disk.
//!
//! Photo acquisition proper (camera, gallery picker) lives outside this
//! crate and hands over decoded bitmaps; these helpers cover the plain
//! file-path case used by tools and tests.

use crate::core::errors::ClassifyError;
use image::DynamicImage;

/// Loads an image from a file path.
///
/// Any format supported by the `image` crate works; the result keeps its
/// alpha channel so downstream encoding can composite it properly.
///
/// # Errors
///
/// Returns `ImageLoad` when the file cannot be opened or decoded.
pub fn load_image(path: &std::path::Path) -> Result<DynamicImage, ClassifyError> {
    Ok(image::open(path)?)
}

/// Loads a batch of images from file paths.
///
/// Uses parallel loading when the number of paths exceeds the default
/// threshold; order of results matches the order of `paths` either way.
pub fn load_images_batch<P: AsRef<std::path::Path> + Send + Sync>(
    paths: &[P],
) -> Result<Vec<DynamicImage>, ClassifyError> {
    load_images_batch_with_threshold(paths, None)
}

/// Loads a batch of images with a custom parallel threshold.
///
/// `parallel_threshold` overrides the default number of paths above which
/// loading switches to parallel mode; `None` uses
/// [`DEFAULT_PARALLEL_THRESHOLD`](crate::core::constants::DEFAULT_PARALLEL_THRESHOLD).
pub fn load_images_batch_with_threshold<P: AsRef<std::path::Path> + Send + Sync>(
    paths: &[P],
    parallel_threshold: Option<usize>,
) -> Result<Vec<DynamicImage>, ClassifyError> {
    use crate::core::constants::DEFAULT_PARALLEL_THRESHOLD;

    let threshold = parallel_threshold.unwrap_or(DEFAULT_PARALLEL_THRESHOLD);

    if paths.len() > threshold {
        use rayon::prelude::*;
        paths.par_iter().map(|p| load_image(p.as_ref())).collect()
    } else {
        paths.iter().map(|p| load_image(p.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn load_image_round_trips_a_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaf.png");
        RgbaImage::from_pixel(6, 4, Rgba([1, 2, 3, 255]))
            .save(&path)
            .unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!((img.width(), img.height()), (6, 4));
    }

    #[test]
    fn load_image_missing_file_is_image_load() {
        let err = load_image(std::path::Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, ClassifyError::ImageLoad(_)));
    }

    #[test]
    fn batch_load_preserves_order_in_parallel_mode() {
        let dir = tempfile::tempdir().unwrap();
        let paths: Vec<_> = (0..4u8)
            .map(|i| {
                let path = dir.path().join(format!("{i}.png"));
                RgbaImage::from_pixel(u32::from(i) + 1, 1, Rgba([i, i, i, 255]))
                    .save(&path)
                    .unwrap();
                path
            })
            .collect();

        // Threshold 0 forces the parallel path even for a small batch.
        let images = load_images_batch_with_threshold(&paths, Some(0)).unwrap();
        let widths: Vec<u32> = images.iter().map(|img| img.width()).collect();
        assert_eq!(widths, vec![1, 2, 3, 4]);

        // The sequential path below the default threshold agrees.
        let sequential = load_images_batch(&paths).unwrap();
        let sequential_widths: Vec<u32> = sequential.iter().map(|img| img.width()).collect();
        assert_eq!(sequential_widths, widths);
    }
}
