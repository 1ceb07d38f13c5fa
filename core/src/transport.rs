//! Transport types for the pluggable-transport pattern.
//!
//! # Design
//! These types describe a single HTTP round-trip as plain data. The client
//! builds `TransportRequest` values and interprets `TransportOutcome` values;
//! the [`Transport`] implementation supplied by the host is responsible for
//! executing the actual I/O. This separation keeps the client deterministic
//! and lets tests substitute a recording stub for the network.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved across
//! task boundaries without lifetime concerns.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by [`RequestClient::send`](crate::client::RequestClient::send). The
/// body is always present: the client submits a JSON document regardless of
/// method. A transport whose backing library cannot attach a body to a GET
/// may drop it at its own layer.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// The populated result of a completed transport call.
///
/// Carries two body slots: `response` when the transport distinguishes a
/// decoded body from the raw text, and `response_text` as the fallback. The
/// client prefers `response` when it is present.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
    pub response: Option<String>,
    pub response_text: String,
}

/// Terminal signal of a transport call. Exactly one is delivered per call.
#[derive(Debug, Clone)]
pub enum TransportOutcome {
    /// The call completed and a response was received, whatever its status.
    Loaded(TransportResponse),
    /// The call failed at the connection level; no further detail is
    /// available to the client.
    NetworkError,
}

/// A single-shot request executor.
///
/// Implementations perform one network round-trip per call and report exactly
/// one terminal outcome. No timeout is imposed by the client: a transport
/// that never completes leaves the caller's future pending indefinitely.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn perform(&self, request: TransportRequest) -> TransportOutcome;
}
