//! Processed rows, ratings, and the readiness preview

use crate::models::field::MetricField;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Qualitative rating of a metric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Favorable,
    Caution,
    Unfavorable,
}

impl Rating {
    /// Opaque color token the popup renders the rating with
    pub fn hex(&self) -> &'static str {
        match self {
            Rating::Favorable => "#31a438",
            Rating::Caution => "#e7c133",
            Rating::Unfavorable => "#ef1c1c",
        }
    }
}

/// Typed value underlying a processed row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Num(f64),
    Text(String),
}

/// The normalized, typed, rated representation of one field
///
/// `display_text` is what a human sees; `underlying` is what downstream
/// comparisons use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRow {
    pub field: MetricField,
    pub raw_text: String,
    pub display_text: String,
    pub underlying: Option<MetricValue>,
    pub rating: Option<Rating>,
}

/// One readiness entry per required field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewRow {
    pub abbreviation: String,
    pub done: bool,
    pub tooltip: String,
}

/// Ordered sequence of readiness entries for the popup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolPreview {
    rows: Vec<PreviewRow>,
}

impl SymbolPreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a preview row. A row with an abbreviation already present
    /// updates the existing entry in place (with a warning) rather than
    /// producing a duplicate.
    pub fn push(&mut self, row: PreviewRow) {
        if let Some(existing) = self
            .rows
            .iter_mut()
            .find(|p| p.abbreviation == row.abbreviation)
        {
            warn!(
                "Already have preview with abbreviation {}. Overwriting!",
                row.abbreviation
            );
            existing.done = row.done;
            existing.tooltip = row.tooltip;
            return;
        }

        self.rows.push(row);
    }

    pub fn rows(&self) -> &[PreviewRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
