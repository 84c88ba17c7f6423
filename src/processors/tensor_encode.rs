//! Rendering a resized bitmap into the model's input byte layout.
//!
//! The layout is a fixed wire format: interleaved R,G,B in row-major order,
//! alpha composited away via standard premultiplication, and (for float
//! models) every channel mapped through `(v - 127.5) / 127.5`. Models are
//! trained against exactly these bytes; any deviation here degrades
//! predictions silently rather than loudly, so the constants below are not
//! free to vary.

use crate::core::errors::ClassifyError;
use crate::core::tensor::ElementType;
use image::RgbaImage;

/// Mean subtracted from every 8-bit channel on the float path.
pub const INPUT_MEAN: f32 = 127.5;
/// Divisor applied after mean subtraction on the float path.
pub const INPUT_STD: f32 = 127.5;

/// Renders `img` into the input buffer for a model expecting `element_type`.
///
/// Pixels are visited row-major; per pixel the R, G and B channels are
/// emitted in that order with alpha premultiplied first and then dropped:
/// - [`ElementType::UInt8`]: one byte per channel, `width * height * 3`
///   bytes total.
/// - [`ElementType::Float32`]: `(v - 127.5) / 127.5` appended as a
///   native-endian `f32`, `width * height * 3 * 4` bytes total.
///
/// # Errors
///
/// Returns `InvalidInputImage` when the bitmap has no pixels.
pub fn to_tensor_bytes(
    img: &RgbaImage,
    element_type: ElementType,
) -> Result<Vec<u8>, ClassifyError> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(ClassifyError::invalid_input_image(
            "cannot encode a bitmap with no pixels",
        ));
    }

    let pixels = width as usize * height as usize;
    match element_type {
        ElementType::UInt8 => {
            let mut data = Vec::with_capacity(pixels * 3);
            for px in img.pixels() {
                let [r, g, b, a] = px.0;
                data.push(premultiply(r, a));
                data.push(premultiply(g, a));
                data.push(premultiply(b, a));
            }
            Ok(data)
        }
        ElementType::Float32 => {
            let mut data = Vec::with_capacity(pixels * 3 * 4);
            for px in img.pixels() {
                let [r, g, b, a] = px.0;
                for channel in [r, g, b] {
                    let normalized =
                        (premultiply(channel, a) as f32 - INPUT_MEAN) / INPUT_STD;
                    data.extend_from_slice(&normalized.to_ne_bytes());
                }
            }
            Ok(data)
        }
    }
}

/// Standard premultiplied-alpha compositing with round-to-nearest.
#[inline]
fn premultiply(channel: u8, alpha: u8) -> u8 {
    if alpha == 255 {
        return channel;
    }
    ((channel as u16 * alpha as u16 + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn checker() -> RgbaImage {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 255, 0, 255]));
        img.put_pixel(0, 1, Rgba([0, 0, 255, 255]));
        img.put_pixel(1, 1, Rgba([9, 18, 27, 255]));
        img
    }

    #[test]
    fn uint8_is_row_major_rgb_with_alpha_dropped() {
        let data = to_tensor_bytes(&checker(), ElementType::UInt8).unwrap();
        assert_eq!(
            data,
            vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 9, 18, 27]
        );
    }

    #[test]
    fn alpha_premultiplies_channels() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([255, 100, 0, 128]));
        let data = to_tensor_bytes(&img, ElementType::UInt8).unwrap();
        // (255 * 128 + 127) / 255 = 128, (100 * 128 + 127) / 255 = 50
        assert_eq!(data, vec![128, 50, 0]);
    }

    #[test]
    fn float32_normalizes_each_channel() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([0, 128, 255, 255]));
        let data = to_tensor_bytes(&img, ElementType::Float32).unwrap();
        assert_eq!(data.len(), 12);

        let floats: Vec<f32> = data
            .chunks_exact(4)
            .map(|b| f32::from_ne_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        assert!((floats[0] - (0.0 - 127.5) / 127.5).abs() < 1e-6);
        assert!((floats[1] - (128.0 - 127.5) / 127.5).abs() < 1e-6);
        assert!((floats[2] - (255.0 - 127.5) / 127.5).abs() < 1e-6);
    }

    #[test]
    fn float32_matches_uint8_iteration_order() {
        let u8_data = to_tensor_bytes(&checker(), ElementType::UInt8).unwrap();
        let f32_data = to_tensor_bytes(&checker(), ElementType::Float32).unwrap();

        let decoded: Vec<f32> = f32_data
            .chunks_exact(4)
            .map(|b| f32::from_ne_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        for (byte, decoded) in u8_data.iter().zip(decoded.iter()) {
            let expected = (*byte as f32 - INPUT_MEAN) / INPUT_STD;
            assert!((decoded - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn empty_bitmap_fails() {
        let img = RgbaImage::new(0, 0);
        let err = to_tensor_bytes(&img, ElementType::UInt8).unwrap_err();
        assert!(matches!(err, ClassifyError::InvalidInputImage { .. }));
    }
}
