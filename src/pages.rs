//! Quote page identification
//!
//! Maps browser tab URLs to the page types the capture flow walks through.
//! The session controller gates scrape requests on these; everything else
//! about the page (selectors, DOM shape) lives in the content-script
//! collaborator.

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// A scrapable quote page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    /// Quote summary page (symbol, name, price, market cap, ...)
    Summary,
    /// Key statistics page (valuation ratios, ownership, ...)
    Statistics,
    /// Financials page (revenue, income lines, ...)
    Financials,
}

/// Every page type, in the order the capture flow visits them
pub const ALL_PAGE_TYPES: [PageType; 3] =
    [PageType::Summary, PageType::Statistics, PageType::Financials];

impl PageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Summary => "summary",
            PageType::Statistics => "statistics",
            PageType::Financials => "financials",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identify which scrapable page a URL points at, if any
pub fn identify_page_type(raw_url: &str) -> Option<PageType> {
    let url = Url::parse(raw_url).ok()?;

    if url.host_str() != Some("finance.yahoo.com") {
        return None;
    }

    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        ["quote", _symbol] => Some(PageType::Summary),
        ["quote", _symbol, "key-statistics"] => Some(PageType::Statistics),
        ["quote", _symbol, "financials"] => Some(PageType::Financials),
        _ => None,
    }
}

/// Like [`identify_page_type`], but an unrecognized URL is a failed result.
///
/// Used where the caller asked for a scrape explicitly and needs to report
/// the failure back, rather than silently doing nothing.
pub fn page_type_for_url(raw_url: &str) -> Result<PageType> {
    identify_page_type(raw_url).ok_or_else(|| AppError::UnknownPageType(raw_url.to_string()))
}
