//! The execution engine contract consumed by the pipeline.
//!
//! The neural network runtime itself (weight loading, graph execution,
//! tensor allocation) is not part of this crate. The pipeline only needs
//! the three operations below; anything satisfying them (an ONNX runtime
//! session, a TFLite interpreter binding, an NPU driver) can sit behind
//! the trait.

use crate::core::errors::EngineError;
use crate::core::tensor::{RawOutput, TensorSpec};

/// A loaded model plus whatever runtime state the engine needs to execute it.
///
/// `invoke` takes `&mut self`: the engine's input/output buffers are
/// exclusively owned by one invocation at a time. The pipeline holds the
/// engine behind a `Mutex` and serializes calls; implementations do not
/// need their own locking.
pub trait InferenceEngine: Send {
    /// Loads a model from its serialized bytes.
    ///
    /// The byte format is opaque to the pipeline. A model the engine cannot
    /// execute, including one whose tensors use storage types outside
    /// [`ElementType`](crate::core::ElementType), must be rejected here so
    /// that a pipeline is never constructed around it.
    fn load(model_bytes: &[u8]) -> Result<Self, EngineError>
    where
        Self: Sized;

    /// Shape and element type of the model's input tensor (index 0).
    fn input_spec(&self) -> TensorSpec;

    /// Runs the model synchronously on one input buffer laid out per
    /// [`input_spec`](Self::input_spec), returning the single output tensor.
    fn invoke(&mut self, input: &[u8]) -> Result<RawOutput, EngineError>;
}
