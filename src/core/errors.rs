//! Error types for the classification pipeline.
//!
//! All fallible operations in the crate return [`ClassifyError`]. Construction
//! errors (`ModelNotFound`, `LabelsNotFound`, `EngineInit`) are terminal for a
//! pipeline instance: a classifier that fails to build is never handed out.
//! Per-call errors (`InvalidInputImage`, `UnsupportedElementType`,
//! `EngineInvoke`) leave the classifier usable for the next image.

use std::path::PathBuf;
use thiserror::Error;

/// Opaque error type produced by an [`InferenceEngine`](crate::core::InferenceEngine)
/// implementation. The pipeline never inspects it beyond chaining it as a source.
pub type EngineError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Convenient result alias for classification operations.
pub type ClassifyResult<T> = Result<T, ClassifyError>;

/// Errors produced while building or running a classification pipeline.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The model file could not be read.
    #[error("model file not found: {}", .path.display())]
    ModelNotFound {
        /// Path that was attempted.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The label file could not be read.
    #[error("labels file not found: {}", .path.display())]
    LabelsNotFound {
        /// Path that was attempted.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The execution engine rejected the model, or declared an input tensor
    /// the pipeline cannot feed.
    #[error("engine initialization failed: {context}")]
    EngineInit {
        context: String,
        #[source]
        source: Option<EngineError>,
    },

    /// The source bitmap could not be rasterized into the model input layout.
    #[error("unable to preprocess image for model input: {message}")]
    InvalidInputImage { message: String },

    /// A tensor element type (or a buffer claiming one) is not supported by
    /// this pipeline.
    #[error("unsupported tensor element type: {message}")]
    UnsupportedElementType { message: String },

    /// The engine failed while executing a single inference call.
    #[error("engine invocation failed: {context}")]
    EngineInvoke {
        context: String,
        #[source]
        source: Option<EngineError>,
    },

    /// Invalid builder or file configuration.
    #[error("invalid configuration: {message}")]
    ConfigError { message: String },

    /// An image could not be loaded from disk.
    #[error("failed to load image")]
    ImageLoad(#[from] image::ImageError),
}

impl ClassifyError {
    /// Creates an `EngineInit` error chaining the engine's own failure.
    pub fn engine_init(context: impl Into<String>, error: impl Into<EngineError>) -> Self {
        Self::EngineInit {
            context: context.into(),
            source: Some(error.into()),
        }
    }

    /// Creates an `EngineInit` error with no underlying engine failure,
    /// used when the declared input contract itself is unusable.
    pub fn engine_contract(context: impl Into<String>) -> Self {
        Self::EngineInit {
            context: context.into(),
            source: None,
        }
    }

    /// Creates an `EngineInvoke` error chaining the engine's own failure.
    pub fn engine_invoke(context: impl Into<String>, error: impl Into<EngineError>) -> Self {
        Self::EngineInvoke {
            context: context.into(),
            source: Some(error.into()),
        }
    }

    /// Creates an `EngineInvoke` error with no underlying engine failure.
    pub fn engine_state(context: impl Into<String>) -> Self {
        Self::EngineInvoke {
            context: context.into(),
            source: None,
        }
    }

    /// Creates an `InvalidInputImage` error.
    pub fn invalid_input_image(message: impl Into<String>) -> Self {
        Self::InvalidInputImage {
            message: message.into(),
        }
    }

    /// Creates an `UnsupportedElementType` error.
    pub fn unsupported_element_type(message: impl Into<String>) -> Self {
        Self::UnsupportedElementType {
            message: message.into(),
        }
    }

    /// Creates a `ConfigError`.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_init_chains_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad graph");
        let err = ClassifyError::engine_init("failed to load model", inner);
        assert!(err.to_string().contains("failed to load model"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn contract_error_has_no_source() {
        let err = ClassifyError::engine_contract("input tensor declares 4 channels");
        assert!(std::error::Error::source(&err).is_none());
    }
}
