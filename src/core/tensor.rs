//! Tensor value types shared between the pipeline and the execution engine.
//!
//! These types describe the wire format at the engine boundary: the declared
//! input tensor shape, and the raw output buffer with its optional
//! quantization parameters. They carry no behavior beyond size accounting;
//! the byte layouts themselves are produced and consumed by the processors.

use serde::{Deserialize, Serialize};

/// Element type of a tensor buffer.
///
/// The pipeline feeds and decodes exactly these two layouts. An engine whose
/// model uses a different storage type must reject it at load time; there is
/// no partially supported middle ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementType {
    /// 8-bit unsigned samples, typically affine-quantized.
    UInt8,
    /// 32-bit native-endian floats.
    Float32,
}

impl ElementType {
    /// Width of one element in bytes.
    pub fn byte_width(self) -> usize {
        match self {
            ElementType::UInt8 => 1,
            ElementType::Float32 => 4,
        }
    }
}

/// Shape and storage type of the model's input tensor, as declared by the
/// engine for tensor index 0. Immutable once read at pipeline construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TensorSpec {
    /// Input width in pixels.
    pub width: u32,
    /// Input height in pixels.
    pub height: u32,
    /// Channel count; this pipeline requires 3 (RGB, alpha always dropped).
    pub channels: u32,
    /// Storage type of the input buffer.
    pub element_type: ElementType,
}

impl TensorSpec {
    /// Total input buffer length in bytes for this spec.
    pub fn input_len(&self) -> usize {
        self.width as usize
            * self.height as usize
            * self.channels as usize
            * self.element_type.byte_width()
    }
}

/// Affine dequantization parameters: `real = (sample - zero_point) * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantizationParams {
    pub scale: f32,
    pub zero_point: i32,
}

impl Default for QuantizationParams {
    /// Identity mapping, used when the engine supplies no parameters.
    fn default() -> Self {
        Self {
            scale: 1.0,
            zero_point: 0,
        }
    }
}

/// Raw output tensor read back from one engine invocation.
///
/// Transient: produced by `invoke`, consumed once by the score decoder.
#[derive(Debug, Clone)]
pub struct RawOutput {
    /// The output buffer, one element per model class in declared class order.
    pub data: Vec<u8>,
    /// Storage type of `data`.
    pub element_type: ElementType,
    /// Quantization parameters for `UInt8` outputs; `None` means identity.
    pub quantization: Option<QuantizationParams>,
}
