//! Minimal request client over a pluggable transport.
//!
//! # Overview
//! Wraps a caller-supplied [`Transport`] with default request options, two
//! fixed headers, JSON serialization of the outgoing payload, and
//! normalization of every completed call into a uniform [`ResponseEnvelope`].
//! The transport executes the actual network round-trip; the client never
//! touches a socket itself, which keeps it deterministic and easy to test
//! against stubs.
//!
//! # Design
//! - `RequestClient` owns its transport and nothing else — every call is
//!   independent and no state is shared between calls.
//! - The transport boundary is plain data: a [`TransportRequest`] goes in,
//!   exactly one [`TransportOutcome`] comes back.
//! - Success means HTTP 200 exactly; every other completed status is an
//!   error carrying the transport's status text.
//! - Unknown logical content types fail before the transport is touched.
//! - No timeout or cancellation: a transport that never signals leaves the
//!   returned future pending.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::RequestClient;
pub use error::RequestError;
pub use transport::{Method, Transport, TransportOutcome, TransportRequest, TransportResponse};
pub use types::{content_type, RequestOptions, ResponseData, ResponseEnvelope};
