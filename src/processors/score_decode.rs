//! Decoding of raw output tensors into confidence scores.

use crate::core::errors::ClassifyError;
use crate::core::tensor::{ElementType, RawOutput};

/// Converts a raw output buffer into one `f32` score per model class.
///
/// Float32 buffers are reinterpreted directly as native-endian floats.
/// UInt8 buffers are dequantized through the affine mapping
/// `(v - zero_point) * scale`; when the engine supplied no quantization
/// parameters the identity mapping (`scale = 1.0`, `zero_point = 0`)
/// applies. Class order is preserved exactly: index `i` is class `i`.
///
/// # Errors
///
/// Returns `UnsupportedElementType` when a Float32 buffer's byte length is
/// not a multiple of 4: the buffer cannot be what it claims to be.
pub fn decode_scores(raw: &RawOutput) -> Result<Vec<f32>, ClassifyError> {
    match raw.element_type {
        ElementType::Float32 => {
            if raw.data.len() % 4 != 0 {
                return Err(ClassifyError::unsupported_element_type(format!(
                    "float32 output buffer of {} bytes is not a whole number of floats",
                    raw.data.len()
                )));
            }
            Ok(raw
                .data
                .chunks_exact(4)
                .map(|b| f32::from_ne_bytes([b[0], b[1], b[2], b[3]]))
                .collect())
        }
        ElementType::UInt8 => {
            let q = raw.quantization.unwrap_or_default();
            let zero_point = q.zero_point as f32;
            Ok(raw
                .data
                .iter()
                .map(|&v| (v as f32 - zero_point) * q.scale)
                .collect())
        }
    }
}
