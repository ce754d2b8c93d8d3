//! Transport error types

use bytes::Bytes;
use soapwire_core::EnvelopeError;
use thiserror::Error;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors that can occur in transport operations
#[derive(Debug, Error)]
pub enum TransportError {
    /// A fetched document came back with a 4xx or 5xx status.
    ///
    /// The body is the complete response body, kept for diagnostics.
    #[error("HTTP status {status} while loading {url}")]
    Status {
        /// Location that was fetched
        url: String,
        /// HTTP status code
        status: u16,
        /// Full response body
        body: Bytes,
    },

    /// Error raised by the HTTP client itself (connect, timeout, body read).
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// I/O error while reading a local document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Location could not be interpreted
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending location
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// Header cannot be sent on the wire
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader {
        /// Header name as given by the caller
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// Envelope serialization failed
    #[error("Envelope serialization failed: {0}")]
    Envelope(EnvelopeError),

    /// Invalid transport configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The transport's client has been released
    #[error("Transport is closed")]
    Closed,
}

impl TransportError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Response body carried by a [`TransportError::Status`] error.
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether the underlying HTTP client gave up waiting.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(err) if err.is_timeout())
    }
}
