//! Scrape session orchestration
//!
//! One `ScrapeSession` per symbol capture. The session is the sole owner and
//! writer of the raw data store; the content-script collaborator only hands
//! records in, and the popup only reads derived payloads out. One page is
//! scraped at a time, so access is serialized by construction; the locks here
//! exist to make the shared handle safe, not to coordinate writers.

use crate::error::{AppError, Result};
use crate::models::field::MetricField;
use crate::models::raw_data::{RawFieldRecord, RawSymbolData};
use crate::models::row::SymbolPreview;
use crate::pages::{PageType, ALL_PAGE_TYPES};
use crate::services::export::export_row;
use crate::services::presentation::{generate_preview, PresentationSymbol, ProcessedRowMap};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

/// Request envelope carried by the extension message transport
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionRequest {
    /// A content script finished harvesting one page
    ScrapingComplete {
        page_type: PageType,
        records: Vec<RawFieldRecord>,
    },
    GetStatus,
    SendPreview,
    Reset,
}

/// Response envelope returned to the transport
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<SymbolPreview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SessionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_row: Option<String>,
}

impl SessionResponse {
    fn ok() -> Self {
        Self {
            success: true,
            preview: None,
            status: None,
            export_row: None,
        }
    }
}

/// Snapshot of session progress for the popup
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub captured_pages: Vec<PageType>,
    pub field_count: usize,
    pub is_complete: bool,
    pub has_all_required: bool,
}

/// Result of recording one scraped page
#[derive(Debug, Clone)]
pub struct ScrapeOutcome {
    pub complete: bool,
    pub preview: SymbolPreview,
    /// Present only once all pages are captured
    pub export_row: Option<String>,
}

/// Session state for one symbol capture
pub struct ScrapeSession {
    raw_data: RwLock<RawSymbolData>,
    presentation: RwLock<PresentationSymbol>,
    captured_pages: RwLock<HashSet<PageType>>,
}

impl ScrapeSession {
    pub fn new() -> Self {
        info!("Scrape session initialized");
        Self {
            raw_data: RwLock::new(RawSymbolData::new()),
            presentation: RwLock::new(PresentationSymbol::new()),
            captured_pages: RwLock::new(HashSet::new()),
        }
    }

    /// Record a single scraped value
    pub fn add_field(&self, field: MetricField, text: Option<&str>) {
        self.raw_data.write().add_or_update(field, text);
    }

    /// True once every page type has been captured
    pub fn is_complete(&self) -> bool {
        self.captured_pages.read().len() == ALL_PAGE_TYPES.len()
    }

    /// Record a finished page scrape and recompute derived data.
    ///
    /// Scraping a page twice, or scraping after the session is complete, is
    /// a failed result the caller can report; it never corrupts the store.
    pub fn complete_scrape(
        &self,
        page_type: PageType,
        records: Vec<RawFieldRecord>,
    ) -> Result<ScrapeOutcome> {
        if self.is_complete() {
            return Err(AppError::SessionComplete);
        }
        if self.captured_pages.read().contains(&page_type) {
            return Err(AppError::PageAlreadyCaptured(page_type));
        }

        {
            let mut data = self.raw_data.write();
            for record in &records {
                data.add_or_update(record.field, Some(&record.raw_text));
            }
        }
        self.captured_pages.write().insert(page_type);

        let data = self.raw_data.read();
        let mut presentation = self.presentation.write();
        presentation.recompute_all(&data);
        let preview = generate_preview(&data);

        let complete = self.is_complete();
        let export = complete.then(|| export_row(presentation.rows()));

        info!(
            "Captured {} page ({} fields total, complete: {})",
            page_type,
            data.len(),
            complete
        );

        Ok(ScrapeOutcome {
            complete,
            preview,
            export_row: export,
        })
    }

    /// Current readiness preview
    pub fn preview(&self) -> SymbolPreview {
        generate_preview(&self.raw_data.read())
    }

    /// Copy of the processed rows for the popup
    pub fn rows(&self) -> ProcessedRowMap {
        self.presentation.read().rows().clone()
    }

    pub fn status(&self) -> SessionStatus {
        let data = self.raw_data.read();
        let mut captured: Vec<PageType> = self.captured_pages.read().iter().copied().collect();
        captured.sort_by_key(|p| ALL_PAGE_TYPES.iter().position(|q| q == p));

        SessionStatus {
            captured_pages: captured,
            field_count: data.len(),
            is_complete: self.is_complete(),
            has_all_required: data.has_all_required(),
        }
    }

    /// Discard everything and install a fresh empty store
    pub fn reset(&self) {
        *self.raw_data.write() = RawSymbolData::new();
        self.presentation.write().clear();
        self.captured_pages.write().clear();
        info!("Scrape session reset");
    }

    /// Dispatch one transport request
    pub fn handle(&self, request: SessionRequest) -> Result<SessionResponse> {
        match request {
            SessionRequest::ScrapingComplete { page_type, records } => {
                let outcome = self.complete_scrape(page_type, records)?;
                Ok(SessionResponse {
                    preview: Some(outcome.preview),
                    export_row: outcome.export_row,
                    ..SessionResponse::ok()
                })
            }
            SessionRequest::GetStatus => Ok(SessionResponse {
                status: Some(self.status()),
                ..SessionResponse::ok()
            }),
            SessionRequest::SendPreview => Ok(SessionResponse {
                preview: Some(self.preview()),
                ..SessionResponse::ok()
            }),
            SessionRequest::Reset => {
                self.reset();
                Ok(SessionResponse::ok())
            }
        }
    }
}

impl Default for ScrapeSession {
    fn default() -> Self {
        Self::new()
    }
}
