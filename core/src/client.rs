//! Stateless request client: option defaults, fixed headers, response
//! normalization.
//!
//! # Design
//! `RequestClient` owns a [`Transport`] and carries no other state. Each call
//! resolves both logical content types before the transport is touched,
//! serializes the payload to JSON, issues exactly one transport call, and
//! maps its terminal outcome into a [`ResponseEnvelope`] or a
//! [`RequestError`]. Success is HTTP 200 exactly; every other completed
//! status is an error carrying the transport's status text.

use serde::Serialize;
use serde_json::Value;

use crate::error::RequestError;
use crate::transport::{Method, Transport, TransportOutcome, TransportRequest, TransportResponse};
use crate::types::{content_type, RequestOptions, ResponseData, ResponseEnvelope};

/// Identification header attached to every outgoing request.
pub const REQUESTED_WITH_HEADER: &str = "x-requested-with";

/// Value of the identification header.
pub const REQUESTED_WITH_VALUE: &str = "request-core";

/// Stateless request client over a pluggable [`Transport`].
#[derive(Debug, Clone)]
pub struct RequestClient<T> {
    transport: T,
}

impl<T: Transport> RequestClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Perform a GET request.
    ///
    /// `method` in `params` is overridden to `Get`. The body on the wire is
    /// the serialized JSON `null`.
    pub async fn get(
        &self,
        url: &str,
        params: RequestOptions,
    ) -> Result<ResponseEnvelope, RequestError> {
        let params = RequestOptions {
            method: Method::Get,
            ..params
        };
        self.send(url, &Value::Null, params).await
    }

    /// Perform a POST request with a JSON-serialized `data` payload.
    ///
    /// `method` in `params` is overridden to `Post`.
    pub async fn post<B: Serialize>(
        &self,
        url: &str,
        data: &B,
        params: RequestOptions,
    ) -> Result<ResponseEnvelope, RequestError> {
        let params = RequestOptions {
            method: Method::Post,
            ..params
        };
        self.send(url, data, params).await
    }

    /// Issue a single request and normalize its terminal outcome.
    ///
    /// The body is always the JSON serialization of `data`, whatever the
    /// method. Exactly one transport call is made per invocation; there are
    /// no retries and no timeout.
    pub async fn send<B: Serialize>(
        &self,
        url: &str,
        data: &B,
        params: RequestOptions,
    ) -> Result<ResponseEnvelope, RequestError> {
        let RequestOptions {
            method,
            request_type,
            response_type,
        } = params;

        // Unknown logical types must fail before the request goes out.
        let request_mime = content_type(&request_type)?;
        content_type(&response_type)?;

        let body = serde_json::to_string(data)
            .map_err(|e| RequestError::Serialization(e.to_string()))?;

        let request = TransportRequest {
            method,
            url: url.to_string(),
            headers: vec![
                (
                    REQUESTED_WITH_HEADER.to_string(),
                    REQUESTED_WITH_VALUE.to_string(),
                ),
                ("content-type".to_string(), request_mime.to_string()),
            ],
            body,
        };

        tracing::debug!(method = ?request.method, url = %request.url, "issuing request");

        match self.transport.perform(request).await {
            TransportOutcome::Loaded(response) if response.status == 200 => {
                format_response(response, &response_type)
            }
            TransportOutcome::Loaded(response) => {
                tracing::debug!(status = response.status, "non-success status");
                Err(RequestError::Status {
                    status_text: response.status_text,
                })
            }
            TransportOutcome::NetworkError => Err(RequestError::Network),
        }
    }
}

/// Normalize a completed transport response into an envelope.
///
/// The body comes from `response` when present, `response_text` otherwise.
/// For `json`-typed responses a parse failure turns the whole call into an
/// error — never an envelope with partial data.
fn format_response(
    response: TransportResponse,
    response_type: &str,
) -> Result<ResponseEnvelope, RequestError> {
    let TransportResponse {
        status,
        status_text,
        response,
        response_text,
    } = response;

    let body = response.unwrap_or(response_text);

    let data = if response_type == "json" {
        let value = serde_json::from_str(&body).map_err(|_| RequestError::Parse)?;
        ResponseData::Json(value)
    } else {
        ResponseData::Text(body)
    };

    Ok(ResponseEnvelope {
        status,
        data,
        status_text,
    })
}
