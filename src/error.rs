use thiserror::Error;

/// Convenience result type used across the crate.
pub type SchoolsResult<T> = Result<T, SchoolsError>;

/// Error type returned by source access, workbook decoding, and registry loading.
///
/// Malformed cells and rows never surface here: they degrade to `None` fields or skipped rows.
/// Only whole-source failures (and bad configuration) are reported.
#[derive(Debug, Error)]
pub enum SchoolsError {
    /// No workbook is currently available from the source store.
    #[error("source not found: {location}")]
    SourceNotFound { location: String },

    /// The bytes could not be decoded as a workbook (corrupt file, wrong format, no sheets).
    #[error("source unreadable: {message}")]
    SourceUnreadable { message: String },

    /// Underlying I/O error other than a missing source (permission denied, failed rename, ...).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The district registry configuration is invalid.
    #[error("invalid registry: {message}")]
    Registry { message: String },

    /// Registry JSON could not be decoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<calamine::Error> for SchoolsError {
    fn from(err: calamine::Error) -> Self {
        SchoolsError::SourceUnreadable {
            message: err.to_string(),
        }
    }
}
