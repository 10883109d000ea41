//! Error types for objects API operations.

use thiserror::Error;

/// Errors that can occur during objects API operations.
#[derive(Debug, Error)]
pub enum ObjectsError {
    /// Configuration is missing or incomplete.
    #[error("objects API configuration required: {0}")]
    ConfigMissing(String),

    /// An attribute given on the command line was not `key=value`.
    #[error("Invalid attribute '{0}': expected format like 'year=2019'")]
    InvalidAttribute(String),

    /// An object id that cannot be addressed as a single path segment.
    #[error("Invalid object id '{0}'")]
    InvalidId(String),

    /// API request returned a non-success status.
    #[error("objects API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Writing walkthrough output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl ObjectsError {
    /// Whether a walkthrough step should report this error with its fixed
    /// message and carry on, rather than abort the run.
    ///
    /// Non-success statuses, transport failures and unaddressable ids are
    /// step failures. Undecodable bodies and output errors are not.
    pub fn is_step_failure(&self) -> bool {
        matches!(
            self,
            Self::ApiError { .. } | Self::HttpError(_) | Self::InvalidId(_)
        )
    }

    /// HTTP status code, when the server answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status_code, .. } => *status_code,
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for objects API operations.
pub type Result<T> = core::result::Result<T, ObjectsError>;
