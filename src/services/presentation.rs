//! Presentation assembly
//!
//! Runs the processor registry over a raw data snapshot and maintains the
//! map of processed rows the popup renders, plus the required-field
//! readiness preview. Recomputation is idempotent: re-running on the same
//! snapshot changes nothing, and a previously good row is never replaced by
//! an empty result.

use crate::models::field::{MetricField, ALL_FIELDS, REQUIRED_FIELDS};
use crate::models::raw_data::RawSymbolData;
use crate::models::row::{PreviewRow, ProcessedRow, SymbolPreview};
use crate::services::processors::process;
use std::collections::HashMap;
use tracing::debug;

/// Processed rows keyed by field
pub type ProcessedRowMap = HashMap<MetricField, ProcessedRow>;

/// Holds the derived presentation state for one symbol
#[derive(Debug, Default)]
pub struct PresentationSymbol {
    processed: ProcessedRowMap,
}

impl PresentationSymbol {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-run every field processor against `data`, upserting results.
    ///
    /// Rows with empty display text are dropped rather than stored, so a
    /// field that previously produced a good row keeps it even if a later
    /// pass fails to parse.
    pub fn recompute_all(&mut self, data: &RawSymbolData) {
        for field in ALL_FIELDS {
            let row = match process(field, data) {
                Some(row) => row,
                None => continue,
            };

            if row.display_text.is_empty() {
                debug!("Empty display value for {:?}; keeping prior row", field);
                continue;
            }

            self.processed.insert(field, row);
        }
    }

    pub fn rows(&self) -> &ProcessedRowMap {
        &self.processed
    }

    pub fn clear(&mut self) {
        self.processed.clear();
    }
}

/// Build the readiness preview: one row per required field, in required-field
/// order. "Done" means a raw record exists, not that processing succeeded.
pub fn generate_preview(data: &RawSymbolData) -> SymbolPreview {
    let mut preview = SymbolPreview::new();

    for field in REQUIRED_FIELDS {
        preview.push(PreviewRow {
            abbreviation: field.abbreviation().to_string(),
            done: data.find(field).is_some(),
            tooltip: field.label().to_string(),
        });
    }

    preview
}
