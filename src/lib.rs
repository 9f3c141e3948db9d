//! QuoteLens - stock quote capture core
//!
//! The Rust core behind a quote-page capture tool: normalizes scraped
//! quote-page text into typed metric values, rates each metric against
//! threshold rules, and assembles presentation rows, a required-field
//! readiness preview, and a spreadsheet export row. DOM scraping, message
//! transport, and UI rendering live in external collaborators; this crate
//! only consumes and produces their typed payloads.

pub mod classify;
pub mod convert;
pub mod error;
pub mod models;
pub mod pages;
pub mod services;
pub mod session;

pub use error::{AppError, Result};
pub use models::{
    MetricField, MetricValue, PreviewRow, ProcessedRow, Rating, RawFieldRecord, RawSymbolData,
    SymbolPreview, ALL_FIELDS, REQUIRED_FIELDS,
};
pub use pages::{identify_page_type, page_type_for_url, PageType, ALL_PAGE_TYPES};
pub use session::{ScrapeOutcome, ScrapeSession, SessionRequest, SessionResponse, SessionStatus};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging for the host application
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quotelens=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
