//! Top-k selection over decoded confidence scores.

use crate::core::predictions::Prediction;
use crate::labels::LabelMap;

/// Ranks `scores` and resolves the best `k` through the label map.
///
/// Scores are sorted descending; equal scores keep their original
/// ascending-index order (the sort is stable), so results are fully
/// deterministic. `k` larger than the score count is clamped, and
/// `k == 0` yields an empty vector rather than an error. Indices without
/// a label-map entry come back labeled `"Unknown"`.
pub fn select_top_k(scores: &[f32], labels: &LabelMap, k: usize) -> Vec<Prediction> {
    if k == 0 || scores.is_empty() {
        return Vec::new();
    }

    let mut indexed: Vec<(usize, f32)> = scores.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    indexed.truncate(k);

    indexed
        .into_iter()
        .map(|(idx, score)| Prediction {
            label: labels.label_for(idx).to_string(),
            confidence: score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant_labels() -> LabelMap {
        LabelMap::parse("id,name\n0,Rose\n1,Tulip\n2,Fern\n3,Moss\n")
    }

    #[test]
    fn returns_min_of_k_and_score_count() {
        let labels = plant_labels();
        let scores = [0.1, 0.4, 0.3];
        assert_eq!(select_top_k(&scores, &labels, 2).len(), 2);
        assert_eq!(select_top_k(&scores, &labels, 10).len(), 3);
        assert!(select_top_k(&scores, &labels, 0).is_empty());
        assert!(select_top_k(&[], &labels, 3).is_empty());
    }

    #[test]
    fn sorts_by_descending_confidence() {
        let labels = plant_labels();
        let predictions = select_top_k(&[0.2, 0.9, 0.5], &labels, 3);
        assert_eq!(predictions[0].label, "Tulip");
        assert_eq!(predictions[0].confidence, 0.9);
        assert_eq!(predictions[1].label, "Fern");
        assert_eq!(predictions[2].label, "Rose");
    }

    #[test]
    fn ties_keep_ascending_index_order() {
        let labels = plant_labels();
        let predictions = select_top_k(&[0.5, 0.9, 0.5, 0.5], &labels, 4);
        assert_eq!(predictions[0].label, "Tulip");
        // All three 0.5 scores, in original index order: 0, 2, 3.
        assert_eq!(predictions[1].label, "Rose");
        assert_eq!(predictions[2].label, "Fern");
        assert_eq!(predictions[3].label, "Moss");
    }

    #[test]
    fn unlabeled_index_degrades_to_unknown() {
        let labels = LabelMap::parse("id,name\n0,Rose\n2,Tulip\n");
        let predictions = select_top_k(&[0.2, 0.9, 0.5], &labels, 2);
        assert_eq!(predictions[0].label, "Unknown");
        assert_eq!(predictions[0].confidence, 0.9);
        assert_eq!(predictions[1].label, "Tulip");
        assert_eq!(predictions[1].confidence, 0.5);
    }

    #[test]
    fn nan_scores_do_not_panic() {
        let labels = plant_labels();
        let predictions = select_top_k(&[0.2, f32::NAN, 0.5], &labels, 3);
        assert_eq!(predictions.len(), 3);
    }
}
