use thiserror::Error;

/// Error type for market page fetching and extraction failures.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Request failure or non-2xx response
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    /// The page did not contain the expected table layout, usually because
    /// the data is rendered client-side or the page structure changed
    #[error("no price table found in the page")]
    TableMissing,
}
