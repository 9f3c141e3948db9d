//! Application error types

use crate::pages::PageType;
use serde::Serialize;
use thiserror::Error;

/// Application-wide error type
///
/// The normalization and rating pipeline itself never fails: missing or
/// unparseable scrape text degrades to "no value, no rating" with a logged
/// warning. Errors exist only at the session/message surface.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown page type: {0}")]
    UnknownPageType(String),

    #[error("Page already captured: {0}")]
    PageAlreadyCaptured(PageType),

    #[error("Scrape session already complete")]
    SessionComplete,

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Serializable error response for the extension frontend
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let code = match err {
            AppError::UnknownPageType(_) => "UNKNOWN_PAGE_TYPE",
            AppError::PageAlreadyCaptured(_) => "PAGE_ALREADY_CAPTURED",
            AppError::SessionComplete => "SESSION_COMPLETE",
            AppError::Validation(_) => "VALIDATION_ERROR",
        };

        ErrorResponse {
            code: code.to_string(),
            message: err.to_string(),
        }
    }
}

// Allow AppError to cross the message boundary as a failed-response payload
impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        ErrorResponse::from(self).serialize(serializer)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
