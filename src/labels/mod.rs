//! Label map parsing and lookup.
//!
//! Classification models identify classes by index; the label map turns an
//! index into display text. The source format is a CSV-like UTF-8 file with
//! a header line followed by `id,label` rows, where ids may be sparse (real
//! label files skip ranges of ids). Parsing is deliberately lenient: blank
//! and malformed rows are dropped silently so that hand-maintained files
//! with stray lines keep working. Lookup never fails either: indices
//! without an entry resolve to [`UNKNOWN_LABEL`].

use crate::core::errors::ClassifyError;
use std::path::Path;

/// Placeholder returned for class indices with no label-map entry.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Dense class-index → display-text lookup built from a sparse CSV table.
///
/// Built once at pipeline construction; immutable afterwards. Length is
/// `max(id) + 1` over the valid rows, with unfilled slots acting as holes
/// that resolve to [`UNKNOWN_LABEL`].
#[derive(Debug, Clone, Default)]
pub struct LabelMap {
    entries: Vec<String>,
}

impl LabelMap {
    /// Parses label text into a dense map.
    ///
    /// The first line is a header and is skipped regardless of its content.
    /// Every later line is trimmed, then split on its first comma into an
    /// id field and the label text; the text may itself contain commas and
    /// is kept verbatim. Rows whose id field is not a non-negative integer,
    /// or that have no comma at all, are dropped. When the same id appears
    /// more than once, the last row wins.
    pub fn parse(text: &str) -> Self {
        let mut rows: Vec<(usize, &str)> = Vec::new();
        let mut max_id: Option<usize> = None;
        let mut dropped = 0usize;

        for (line_idx, line) in text.lines().enumerate() {
            if line_idx == 0 {
                // Header row, e.g. "id,name".
                continue;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let Some((id_field, name)) = trimmed.split_once(',') else {
                dropped += 1;
                continue;
            };
            let Ok(id) = id_field.parse::<usize>() else {
                dropped += 1;
                continue;
            };
            max_id = Some(max_id.map_or(id, |m| m.max(id)));
            rows.push((id, name));
        }

        if dropped > 0 {
            tracing::debug!(dropped, "dropped malformed label rows");
        }

        let mut entries = vec![String::new(); max_id.map_or(0, |m| m + 1)];
        for (id, name) in rows {
            // Parse order: a later duplicate overwrites an earlier one.
            entries[id] = name.to_string();
        }
        Self { entries }
    }

    /// Reads and parses a label file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClassifyError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ClassifyError::LabelsNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::parse(&text))
    }

    /// Display text for a class index.
    ///
    /// Returns [`UNKNOWN_LABEL`] for out-of-range indices and for holes
    /// left by sparse ids. Never fails: an unexpected model output index
    /// degrades to the placeholder instead of an error.
    pub fn label_for(&self, id: usize) -> &str {
        match self.entries.get(id) {
            Some(name) if !name.is_empty() => name,
            _ => UNKNOWN_LABEL,
        }
    }

    /// Number of slots in the dense map (`max(id) + 1`, or 0 when empty).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
