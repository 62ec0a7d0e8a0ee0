//! Error Types
//!
//! Unified error type for every endpoint wrapper. Errors always propagate to
//! the caller; the library never terminates the process on failure.

/// Client error
#[derive(Debug, Clone)]
pub enum Error {
    /// Missing or invalid API key, raised before any network call
    Configuration { message: String },
    /// Non-200 HTTP status; message is the verbatim response body
    Api { status: u16, message: String },
    /// Network-level failure reaching the server
    Transport { message: String },
    /// Failed to decode a successful response body as JSON
    Parse { message: String },
    /// File-system failure while writing a downloaded archive
    Io { message: String },
}

impl Error {
    /// HTTP status code for API errors, `None` otherwise
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Configuration { message } => write!(f, "Configuration error: {}", message),
            Error::Api { status, message } => write!(f, "API error ({}): {}", status, message),
            Error::Transport { message } => write!(f, "Transport error: {}", message),
            Error::Parse { message } => write!(f, "Parse error: {}", message),
            Error::Io { message } => write!(f, "I/O error: {}", message),
        }
    }
}

impl std::error::Error for Error {}

// ============================================================================
// TESTS
// ============================================================================
