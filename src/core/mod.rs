//! The core module of the classification pipeline.
//!
//! This module contains the fundamental pieces the rest of the crate builds
//! on:
//! - Configuration management
//! - Constants used throughout the pipeline
//! - Error handling
//! - The execution engine contract
//! - Prediction result and tensor value types
//!
//! It also re-exports the commonly used types for convenience.

pub mod config;
pub mod constants;
pub mod errors;
pub mod inference;
pub mod predictions;
pub mod tensor;

pub use config::ClassifierConfig;
pub use constants::*;
pub use errors::{ClassifyError, ClassifyResult, EngineError};
pub use inference::InferenceEngine;
pub use predictions::Prediction;
pub use tensor::{ElementType, QuantizationParams, RawOutput, TensorSpec};

/// Initializes the tracing subscriber for logging.
///
/// Sets up the tracing subscriber with an environment filter and formatting
/// layer. Typically called once at the start of an application.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
