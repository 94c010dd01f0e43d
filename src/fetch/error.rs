use thiserror::Error;

use crate::pager::PageNumber;

/// Errors that can occur while fetching a page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The configured endpoint is not a valid URL
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Transport failure or timeout
    #[error("Request for page {page_number} failed: {source}")]
    Request {
        page_number: PageNumber,
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-success status
    #[error("Backend returned HTTP {status} for page {page_number}")]
    Status { page_number: PageNumber, status: u16 },

    /// Body was not a page
    #[error("Invalid response for page {page_number}: {source}")]
    Decode {
        page_number: PageNumber,
        #[source]
        source: serde_json::Error,
    },

    /// Source-specific failure without an underlying error value
    #[error("Page {page_number} unavailable: {reason}")]
    Unavailable {
        page_number: PageNumber,
        reason: String,
    },
}
