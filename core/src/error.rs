//! Error types for the request client.
//!
//! # Design
//! Every failure mode gets its own variant so callers can match on the
//! cause. `Status` carries only the transport's status text — not the code
//! or body — and `Network` carries nothing at all, because the transport
//! exposes no further detail at those points.

use std::fmt;

/// Errors returned by `RequestClient` calls.
#[derive(Debug)]
pub enum RequestError {
    /// An unrecognized logical content type was supplied in the options.
    /// Raised before any transport activity.
    ContentTypeNotAllowed(String),

    /// The transport completed with an HTTP status other than 200.
    Status { status_text: String },

    /// The transport reported a connection-level failure.
    Network,

    /// A `json`-typed response body could not be parsed as JSON.
    Parse,

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::ContentTypeNotAllowed(name) => {
                write!(f, "content type not allowed: {name}")
            }
            RequestError::Status { status_text } => write!(f, "{status_text}"),
            RequestError::Network => write!(f, "Network Error"),
            RequestError::Parse => write!(f, "cannot parse JSON response"),
            RequestError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for RequestError {}
