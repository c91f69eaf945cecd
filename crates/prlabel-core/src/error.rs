//! Error types for prlabel-core

use std::fmt;

/// Result type alias for prlabel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for prlabel operations
#[derive(Debug)]
pub enum Error {
    /// URL does not name a pull request on a known host
    NotTrackable(String),

    /// No usable credential for the resolved host
    Unauthenticated(String),

    /// Non-200 response on the label read path
    RequestFailed(String),

    /// Invalid configuration
    Config(String),

    /// HTTP transport error
    Http(String),

    /// Runtime error (Tokio, threading, etc.)
    Runtime(String),

    /// YAML parsing error
    Yaml(String),

    /// Other errors
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotTrackable(msg) => write!(f, "Not a trackable pull request: {}", msg),
            Error::Unauthenticated(msg) => write!(f, "No credential available: {}", msg),
            Error::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Http(msg) => write!(f, "HTTP error: {}", msg),
            Error::Runtime(msg) => write!(f, "Runtime error: {}", msg),
            Error::Yaml(msg) => write!(f, "YAML error: {}", msg),
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Other(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Yaml(err.to_string())
    }
}

/// Fieldless error category for zero-cost pattern matching.
///
/// Single byte representation (`#[repr(u8)]`), `Copy`, no allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorKind {
    /// URL does not name a pull request on a known host
    NotTrackable,
    /// No usable credential for the resolved host
    Unauthenticated,
    /// Non-200 response on the label read path
    RequestFailed,
    /// Configuration error
    Config,
    /// HTTP transport error
    Http,
    /// Runtime error
    Runtime,
    /// YAML parsing error
    Yaml,
    /// Other errors
    Other,
}

impl Error {
    /// Get the error kind — zero allocation, returns a Copy enum.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::NotTrackable(_) => ErrorKind::NotTrackable,
            Error::Unauthenticated(_) => ErrorKind::Unauthenticated,
            Error::RequestFailed(_) => ErrorKind::RequestFailed,
            Error::Config(_) => ErrorKind::Config,
            Error::Http(_) => ErrorKind::Http,
            Error::Runtime(_) => ErrorKind::Runtime,
            Error::Yaml(_) => ErrorKind::Yaml,
            Error::Other(_) => ErrorKind::Other,
        }
    }

    /// Borrow the error message — zero allocation.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Error::NotTrackable(msg)
            | Error::Unauthenticated(msg)
            | Error::RequestFailed(msg)
            | Error::Config(msg)
            | Error::Http(msg)
            | Error::Runtime(msg)
            | Error::Yaml(msg)
            | Error::Other(msg) => msg,
        }
    }

    /// True for the two fail-fast preconditions that the passive sync path
    /// collapses into a neutral "no label" display.
    #[inline]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::NotTrackable(_) | Error::Unauthenticated(_)
        )
    }
}
