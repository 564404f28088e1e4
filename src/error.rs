//! Error taxonomy for the scrape pipeline.

use thiserror::Error;

/// Failures a scrape request can produce.
///
/// Field-level extraction misses are not errors - they degrade to absent
/// values in the output record. Every variant here aborts the whole request.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The supplied URL does not reference noon.com. Caught before any I/O.
    #[error("A valid noon.com product link is required")]
    InvalidUrl,

    /// Transport-level failure reaching the target (DNS, timeout, reset).
    #[error("Network error while fetching the page: {0}")]
    Network(#[from] wreq::Error),

    /// The target answered with a non-success HTTP status.
    #[error("Failed to fetch the page, status: {status}")]
    FetchFailed { status: wreq::StatusCode },

    /// The response body could not be parsed into an HTML tree.
    #[error("Failed to parse the HTML document")]
    ParseFailed,

    /// The target served a bot-challenge page instead of product content.
    #[error("Scrape blocked by the bot detection system")]
    BotDetected,

    /// Unexpected failure during field extraction. Absent fields are not
    /// extraction failures; they never produce this variant.
    #[error("Error while extracting data: {0}")]
    Extraction(String),
}

impl ScrapeError {
    /// HTTP status for the boundary response: client-error for bad input,
    /// 502 for upstream-caused failures, 500 for local ones.
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;

        match self {
            ScrapeError::InvalidUrl => StatusCode::BAD_REQUEST,
            ScrapeError::Network(_)
            | ScrapeError::FetchFailed { .. }
            | ScrapeError::BotDetected => StatusCode::BAD_GATEWAY,
            ScrapeError::ParseFailed | ScrapeError::Extraction(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
