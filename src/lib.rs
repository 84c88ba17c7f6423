//! # PlantID
//!
//! On-device plant photo classification. The crate owns everything between
//! a decoded photo and a ranked list of labeled predictions (preparing the
//! model's exact input byte layout, decoding possibly-quantized output
//! tensors, and resolving class indices through a sparse label map), while
//! the neural network runtime itself stays pluggable behind the
//! [`InferenceEngine`](core::InferenceEngine) trait.
//!
//! ## Features
//!
//! - Stretch-resize and RGB tensor encoding (`UInt8` and normalized
//!   `Float32` layouts) matching the reference training preprocessing
//! - Affine dequantization of 8-bit output tensors
//! - Deterministic top-k ranking with stable tie-breaking
//! - Lenient CSV label-map parsing with `"Unknown"` fallback for holes
//! - All-or-nothing pipeline construction; per-call errors never poison
//!   the pipeline
//!
//! ## Modules
//!
//! * [`core`] - Configuration, errors, tensor types, and the engine contract
//! * [`labels`] - Label-map parsing and lookup
//! * [`pipeline`] - The classifier orchestrating one loaded model
//! * [`processors`] - Resize, tensor encode, score decode, top-k stages
//! * [`utils`] - Image loading helpers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use plantid::prelude::*;
//!
//! // Any runtime satisfying the engine contract can sit here: an ONNX
//! // session, a TFLite interpreter binding, an NPU driver.
//! struct MyEngine;
//!
//! impl InferenceEngine for MyEngine {
//!     fn load(_model_bytes: &[u8]) -> Result<Self, EngineError> {
//!         unimplemented!("hand the bytes to your runtime")
//!     }
//!     fn input_spec(&self) -> TensorSpec {
//!         unimplemented!()
//!     }
//!     fn invoke(&mut self, _input: &[u8]) -> Result<RawOutput, EngineError> {
//!         unimplemented!()
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let classifier: ImageClassifier<MyEngine> = ImageClassifierBuilder::new()
//!         .model_path("models/plants.bin")
//!         .labels_path("models/plants_labelmap.csv")
//!         .topk(5)
//!         .build()?;
//!
//!     let photo = load_image(std::path::Path::new("photo.jpg"))?;
//!     for prediction in classifier.classify_default(&photo)? {
//!         println!("{}: {:.2}", prediction.label, prediction.confidence);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration from JSON
//!
//! ```rust
//! use plantid::core::ClassifierConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClassifierConfig::from_json_str(r#"
//! {
//!   "model_path": "models/plants.bin",
//!   "labels_path": "models/plants_labelmap.csv",
//!   "topk": 5
//! }
//! "#)?;
//! assert!(config.validate().is_ok());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod labels;
pub mod pipeline;
pub mod processors;
pub mod utils;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use plantid::prelude::*;
/// ```
pub mod prelude {
    // Pipeline (essential)
    pub use crate::pipeline::{ImageClassifier, ImageClassifierBuilder};

    // Engine contract
    pub use crate::core::{
        ElementType, EngineError, InferenceEngine, QuantizationParams, RawOutput, TensorSpec,
    };

    // Results and errors
    pub use crate::core::{ClassifierConfig, ClassifyError, ClassifyResult, Prediction};

    // Labels
    pub use crate::labels::LabelMap;

    // Image loading (minimal)
    pub use crate::utils::load_image;
}
