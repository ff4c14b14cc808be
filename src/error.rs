//! Error types for the docparse client.

use std::io;
use thiserror::Error;

/// Result type alias for docparse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while validating or fetching job results.
#[derive(Error, Debug)]
pub enum Error {
    /// The job result payload does not satisfy the schema.
    #[error("invalid job result payload: {0}")]
    Schema(#[from] serde_json::Error),

    /// A remote endpoint answered with a non-success HTTP status.
    #[error("remote fetch failed with status {status}: {body}")]
    RemoteFetch {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// Connection, DNS, or timeout failure below the HTTP-status layer.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A blocking wrapper was called from inside an async runtime.
    #[error("blocking call inside an async context; use the async variant instead")]
    Reentrancy,

    /// I/O error when writing fetched artifacts to disk.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// HTTP status of a failed remote fetch, if this is a fetch error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RemoteFetch { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::RemoteFetch {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "remote fetch failed with status 404: not found"
        );

        let err = Error::Reentrancy;
        assert!(err.to_string().contains("async context"));
    }

    #[test]
    fn test_status_accessor() {
        let err = Error::RemoteFetch {
            status: 503,
            body: String::new(),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(Error::Reentrancy.status(), None);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
