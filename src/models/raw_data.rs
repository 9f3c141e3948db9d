//! Raw scraped symbol data
//!
//! The per-session store of scraped `(field, text)` pairs for one symbol.
//! Owned by the session controller and replaced wholesale on reset; the
//! presentation layer only ever borrows it.

use crate::models::field::{MetricField, REQUIRED_FIELDS};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One scraped field value, prior to normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFieldRecord {
    pub field: MetricField,
    pub raw_text: String,
}

/// All raw records scraped for one symbol during one session
///
/// Invariant: at most one record per field identity. A second write for the
/// same field overwrites the existing record's text in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSymbolData {
    records: Vec<RawFieldRecord>,
}

impl RawSymbolData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record for `field`, or overwrite the existing record's text.
    ///
    /// Empty or absent text is refused with a warning so that a bad scrape
    /// can never clobber a previously captured value.
    pub fn add_or_update(&mut self, field: MetricField, text: Option<&str>) {
        let value = match text {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                warn!("No value when attempting to add data for {:?}", field);
                return;
            }
        };

        match self.records.iter_mut().find(|r| r.field == field) {
            Some(existing) => existing.raw_text = value.to_string(),
            None => self.records.push(RawFieldRecord {
                field,
                raw_text: value.to_string(),
            }),
        }
    }

    /// Look up the record for a field. Absent fields are not an error.
    pub fn find(&self, field: MetricField) -> Option<&RawFieldRecord> {
        self.records.iter().find(|r| r.field == field)
    }

    /// True once every required field has been captured
    pub fn has_all_required(&self) -> bool {
        REQUIRED_FIELDS.iter().all(|&f| self.find(f).is_some())
    }

    pub fn records(&self) -> &[RawFieldRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_find() {
        let mut data = RawSymbolData::new();
        data.add_or_update(MetricField::Symbol, Some("ACME"));

        let record = data.find(MetricField::Symbol).unwrap();
        assert_eq!(record.raw_text, "ACME");
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_second_write_overwrites_instead_of_duplicating() {
        let mut data = RawSymbolData::new();
        data.add_or_update(MetricField::PeRatio, Some("a"));
        data.add_or_update(MetricField::PeRatio, Some("b"));

        assert_eq!(data.find(MetricField::PeRatio).unwrap().raw_text, "b");
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_repeated_identical_writes_are_idempotent() {
        let mut data = RawSymbolData::new();
        data.add_or_update(MetricField::Beta, Some("1.1"));
        data.add_or_update(MetricField::Beta, Some("1.1"));

        assert_eq!(data.find(MetricField::Beta).unwrap().raw_text, "1.1");
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_empty_text_is_refused() {
        let mut data = RawSymbolData::new();
        data.add_or_update(MetricField::Symbol, Some("ACME"));
        data.add_or_update(MetricField::Symbol, None);
        data.add_or_update(MetricField::Symbol, Some(""));
        data.add_or_update(MetricField::Symbol, Some("   "));

        assert_eq!(data.find(MetricField::Symbol).unwrap().raw_text, "ACME");
    }

    #[test]
    fn test_missing_field_lookup_is_none() {
        let data = RawSymbolData::new();
        assert!(data.find(MetricField::Revenue).is_none());
    }

    #[test]
    fn test_has_all_required() {
        let mut data = RawSymbolData::new();
        assert!(!data.has_all_required());

        for field in REQUIRED_FIELDS {
            data.add_or_update(field, Some("1"));
        }
        assert!(data.has_all_required());
    }
}
