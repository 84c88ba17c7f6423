//! The classification pipeline: orchestration of preprocessing, engine
//! invocation and postprocessing around one loaded model.

use crate::core::config::ClassifierConfig;
use crate::core::errors::{ClassifyError, ClassifyResult};
use crate::core::inference::InferenceEngine;
use crate::core::predictions::Prediction;
use crate::core::tensor::TensorSpec;
use crate::labels::LabelMap;
use crate::processors::{decode_scores, resize_to_fill, select_top_k, to_tensor_bytes};
use image::DynamicImage;
use std::sync::Mutex;
use std::time::Instant;
use tracing::{debug, info};


/// A classifier built around one loaded model.
///
/// Construction is all-or-nothing: the model bytes, the engine, the input
/// spec and the label map must all load, or no classifier exists at all.
/// After that the instance is immutable: [`classify`](Self::classify) can
/// be called from any thread, with concurrent calls serializing on the
/// engine lock.
#[derive(Debug)]
pub struct ImageClassifier<E: InferenceEngine> {
    /// The engine, exclusively held by one invocation at a time.
    engine: Mutex<E>,
    /// Declared input tensor shape, read once at construction.
    input_spec: TensorSpec,
    /// Class-index → display-text lookup.
    labels: LabelMap,
    /// Default number of predictions per call.
    topk: usize,
}

impl<E: InferenceEngine> ImageClassifier<E> {
    /// Builds a classifier from a validated configuration.
    ///
    /// Reads the model bytes, hands them to the engine, checks the declared
    /// input tensor against the pipeline's fixed RGB wire format, and loads
    /// the label map. Any failure aborts construction entirely.
    pub fn new(config: ClassifierConfig) -> ClassifyResult<Self> {
        config.validate()?;
        let model_path = config
            .model_path
            .as_ref()
            .ok_or_else(|| ClassifyError::config_error("model_path is required"))?;
        let labels_path = config
            .labels_path
            .as_ref()
            .ok_or_else(|| ClassifyError::config_error("labels_path is required"))?;

        let model_bytes =
            std::fs::read(model_path).map_err(|e| ClassifyError::ModelNotFound {
                path: model_path.clone(),
                source: e,
            })?;

        let engine = E::load(&model_bytes)
            .map_err(|e| ClassifyError::engine_init("engine rejected the model", e))?;

        let input_spec = engine.input_spec();
        if input_spec.channels != 3 {
            return Err(ClassifyError::engine_contract(format!(
                "input tensor declares {} channels; this pipeline feeds RGB (3)",
                input_spec.channels
            )));
        }
        if input_spec.width == 0 || input_spec.height == 0 {
            return Err(ClassifyError::engine_contract(format!(
                "input tensor declares empty dimensions {}x{}",
                input_spec.width, input_spec.height
            )));
        }

        let labels = LabelMap::from_file(labels_path)?;

        info!(
            model = %model_path.display(),
            input_width = input_spec.width,
            input_height = input_spec.height,
            element_type = ?input_spec.element_type,
            labels = labels.len(),
            "classifier ready"
        );

        Ok(Self {
            engine: Mutex::new(engine),
            input_spec,
            labels,
            topk: config.effective_topk(),
        })
    }

    /// Classifies one photo, returning at most `topk` predictions ordered
    /// by descending confidence.
    ///
    /// Synchronous and CPU-bound; callers wanting responsiveness run it on
    /// a worker thread. The call leaves no state behind on the classifier:
    /// a failed call (bad image, engine fault) does not poison later calls.
    pub fn classify(
        &self,
        img: &DynamicImage,
        topk: usize,
    ) -> ClassifyResult<Vec<Prediction>> {
        let resized = resize_to_fill(img, self.input_spec.width, self.input_spec.height)?;
        let input = to_tensor_bytes(&resized, self.input_spec.element_type)?;

        let started = Instant::now();
        let raw = {
            let mut engine = self
                .engine
                .lock()
                .map_err(|_| ClassifyError::engine_state("engine lock poisoned"))?;
            engine
                .invoke(&input)
                .map_err(|e| ClassifyError::engine_invoke("model invocation failed", e))?
        };
        debug!(elapsed = ?started.elapsed(), "inference complete");

        let scores = decode_scores(&raw)?;
        Ok(select_top_k(&scores, &self.labels, topk))
    }

    /// Classifies one photo with the configured default top-k.
    pub fn classify_default(&self, img: &DynamicImage) -> ClassifyResult<Vec<Prediction>> {
        self.classify(img, self.topk)
    }

    /// The input tensor spec the engine declared at construction.
    pub fn input_spec(&self) -> TensorSpec {
        self.input_spec
    }

    /// The loaded label map.
    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }
}

/// Builder for [`ImageClassifier`].
///
/// A thin, chainable layer over [`ClassifierConfig`]; `build` validates and
/// constructs in one step.
#[derive(Debug, Default)]
pub struct ImageClassifierBuilder {
    config: ClassifierConfig,
}

impl ImageClassifierBuilder {
    /// Creates a builder with an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration (for example one parsed from
    /// JSON), letting later calls override individual fields.
    pub fn from_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Sets the path of the serialized model.
    pub fn model_path(mut self, model_path: impl Into<std::path::PathBuf>) -> Self {
        self.config = self.config.model_path(model_path);
        self
    }

    /// Sets the path of the CSV label map.
    pub fn labels_path(mut self, labels_path: impl Into<std::path::PathBuf>) -> Self {
        self.config = self.config.labels_path(labels_path);
        self
    }

    /// Sets the default number of predictions per call.
    pub fn topk(mut self, topk: usize) -> Self {
        self.config = self.config.topk(topk);
        self
    }

    /// Validates the configuration and constructs the classifier for the
    /// chosen engine.
    pub fn build<E: InferenceEngine>(self) -> ClassifyResult<ImageClassifier<E>> {
        ImageClassifier::new(self.config)
    }
}
