//! Prediction result types.

/// One ranked classification result.
///
/// A successful `classify` call yields at most `k` of these, ordered by
/// descending confidence. Confidence is whatever the model's (dequantized)
/// output produces; it is expected to lie in `[0, 1]` for calibrated
/// classifiers but is not clamped here.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Human-readable label, or `"Unknown"` when the class index has no
    /// label-map entry.
    pub label: String,
    /// Decoded confidence score for this class.
    pub confidence: f32,
}
