use std::io;

use thiserror::Error;

/// Error type for catalog loading, rendering, and output failures.
///
/// Every variant is fatal: the exporter is a single-shot batch tool and
/// never skips a record or retries.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The input document is not well-formed JSON
    #[error("malformed catalog document: {0}")]
    Parse(serde_json::Error),

    /// The document parsed but a required field is absent or the shape is wrong
    #[error("catalog record rejected: {0}")]
    Schema(serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
