//! Core data model
//!
//! Field identities, the raw per-session store, and the processed/preview
//! row types exchanged with the extension frontend.

pub mod field;
pub mod raw_data;
pub mod row;

pub use field::{MetricField, ALL_FIELDS, REQUIRED_FIELDS};
pub use raw_data::{RawFieldRecord, RawSymbolData};
pub use row::{MetricValue, PreviewRow, ProcessedRow, Rating, SymbolPreview};
