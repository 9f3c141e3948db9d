//! Services Layer
//!
//! The derived-data side of the pipeline: field processors that turn raw
//! scrape records into typed, rated rows, the presentation assembler that
//! maintains the popup's row map and readiness preview, and the spreadsheet
//! export.
//!
//! # Architecture
//!
//! ```text
//! Content script --> ScrapeSession ──> processors --> presentation ──> popup
//!                                                 └─> export row ────> clipboard
//! ```

pub mod export;
pub mod presentation;
pub mod processors;

pub use export::{export_row, EXPORT_COLUMNS};
pub use presentation::{generate_preview, PresentationSymbol, ProcessedRowMap};
pub use processors::process;
