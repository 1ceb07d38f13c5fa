//! Request options, the content-type table, and the response envelope.
//!
//! # Design
//! `RequestOptions` is an explicit struct with documented defaults. Callers
//! override fields with struct-update syntax (`RequestOptions { response_type:
//! "text".into(), ..Default::default() }`), which replaces free-form option
//! merging: unknown keys cannot exist, and unspecified fields keep their
//! defaults. The serde derives apply the same defaulting when options are
//! read from JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RequestError;
use crate::transport::Method;

/// Logical content type names and the MIME strings they resolve to.
/// Process-wide constant; the two names are the only accepted values for
/// `request_type` and `response_type`.
pub const CONTENT_TYPES: &[(&str, &str)] = &[
    ("json", "application/json"),
    ("text", "text/plain"),
];

/// Resolve a logical content type name to its MIME string.
///
/// Called for both logical types before any transport work, so an unknown
/// name never produces a half-issued request.
pub fn content_type(logical: &str) -> Result<&'static str, RequestError> {
    CONTENT_TYPES
        .iter()
        .find(|(name, _)| *name == logical)
        .map(|(_, mime)| *mime)
        .ok_or_else(|| RequestError::ContentTypeNotAllowed(logical.to_string()))
}

/// Per-call request options.
///
/// Defaults: `method = Get`, `request_type = "json"`, `response_type =
/// "json"`. `get` and `post` override `method` regardless of what the caller
/// supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestOptions {
    pub method: Method,
    pub request_type: String,
    pub response_type: String,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::Get,
            request_type: "json".to_string(),
            response_type: "json".to_string(),
        }
    }
}

/// Response payload: parsed JSON for `json`-typed responses, the raw body
/// otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Json(Value),
    Text(String),
}

/// The uniform result of every successful call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope {
    pub status: u16,
    pub data: ResponseData,
    pub status_text: String,
}
