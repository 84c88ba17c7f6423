//! Configuration for building a classifier.

use crate::core::constants::DEFAULT_TOP_K;
use crate::core::errors::ClassifyError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for an [`ImageClassifier`](crate::pipeline::ImageClassifier).
///
/// All fields are optional so configurations can be assembled from JSON,
/// a builder, or both; [`validate`](Self::validate) enforces what must be
/// present before a pipeline is constructed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Path to the serialized model understood by the execution engine.
    pub model_path: Option<PathBuf>,
    /// Path to the UTF-8 CSV label map (header line, then `id,label` rows).
    pub labels_path: Option<PathBuf>,
    /// Number of predictions returned by default; falls back to
    /// [`DEFAULT_TOP_K`] when unset.
    #[serde(default)]
    pub topk: Option<usize>,
}

impl ClassifierConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the model path.
    pub fn model_path(mut self, model_path: impl Into<PathBuf>) -> Self {
        self.model_path = Some(model_path.into());
        self
    }

    /// Sets the label-map path.
    pub fn labels_path(mut self, labels_path: impl Into<PathBuf>) -> Self {
        self.labels_path = Some(labels_path.into());
        self
    }

    /// Sets the default number of predictions to return.
    pub fn topk(mut self, topk: usize) -> Self {
        self.topk = Some(topk);
        self
    }

    /// Default top-k, applying the crate default when unset.
    pub fn effective_topk(&self) -> usize {
        self.topk.unwrap_or(DEFAULT_TOP_K)
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ClassifyError> {
        serde_json::from_str(json)
            .map_err(|e| ClassifyError::config_error(format!("invalid JSON configuration: {e}")))
    }

    /// Reads and parses a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ClassifyError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ClassifyError::config_error(format!(
                "failed to read configuration {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json_str(&text)
    }

    /// Checks that the configuration can produce a working pipeline.
    ///
    /// Both resource paths must be set, and an explicit top-k must be
    /// positive (zero would make every call return nothing).
    pub fn validate(&self) -> Result<(), ClassifyError> {
        if self.model_path.is_none() {
            return Err(ClassifyError::config_error("model_path is required"));
        }
        if self.labels_path.is_none() {
            return Err(ClassifyError::config_error("labels_path is required"));
        }
        if self.topk == Some(0) {
            return Err(ClassifyError::config_error(
                "topk must be greater than 0 when set",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_requires_both_paths() {
        let config = ClassifierConfig::new().model_path("model.bin");
        assert!(config.validate().is_err());

        let config = config.labels_path("labels.csv");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_topk() {
        let config = ClassifierConfig::new()
            .model_path("model.bin")
            .labels_path("labels.csv")
            .topk(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn effective_topk_defaults() {
        assert_eq!(ClassifierConfig::new().effective_topk(), DEFAULT_TOP_K);
        assert_eq!(ClassifierConfig::new().topk(3).effective_topk(), 3);
    }

    #[test]
    fn config_from_json() {
        let config = ClassifierConfig::from_json_str(
            r#"{ "model_path": "models/plants.bin", "labels_path": "models/labels.csv", "topk": 3 }"#,
        )
        .unwrap();
        assert_eq!(config.topk, Some(3));
        assert!(config.validate().is_ok());

        assert!(ClassifierConfig::from_json_str("not json").is_err());
    }
}
