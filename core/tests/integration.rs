//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `RequestClient`
//! through a ureq-backed transport over real HTTP. Validates that option
//! handling, header placement, and response normalization work end-to-end
//! with an actual server.

use async_trait::async_trait;
use request_core::{
    Method, RequestClient, RequestError, RequestOptions, ResponseData, Transport,
    TransportOutcome, TransportRequest, TransportResponse,
};

/// Execute a `TransportRequest` using ureq.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses come back as data rather than `Err`, letting the client handle
/// status interpretation. ureq does not support GET request bodies, so the
/// body is dropped at this layer for GET; the client still submits one.
struct UreqTransport;

#[async_trait]
impl Transport for UreqTransport {
    async fn perform(&self, request: TransportRequest) -> TransportOutcome {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();

        let result = match request.method {
            Method::Get => {
                let mut builder = agent.get(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name, value);
                }
                builder.call()
            }
            Method::Post => {
                let mut builder = agent.post(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name, value);
                }
                builder.send(request.body.as_bytes())
            }
        };

        match result {
            Ok(mut response) => {
                let status = response.status();
                let body = response.body_mut().read_to_string().unwrap_or_default();
                TransportOutcome::Loaded(TransportResponse {
                    status: status.as_u16(),
                    status_text: status.canonical_reason().unwrap_or("").to_string(),
                    response: None,
                    response_text: body,
                })
            }
            Err(_) => TransportOutcome::NetworkError,
        }
    }
}

#[test]
fn request_lifecycle() {
    // Step 1: start mock server on a random port.
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    let base = format!("http://{addr}");
    let client = RequestClient::new(UreqTransport);
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    rt.block_on(async {
        // Step 2: GET with the default json response type.
        let envelope = client
            .get(&format!("{base}/ping"), RequestOptions::default())
            .await
            .unwrap();
        assert_eq!(envelope.status, 200);
        assert_eq!(envelope.data, ResponseData::Json(serde_json::json!({"ok": true})));
        assert_eq!(envelope.status_text, "OK");

        // Step 3: GET with a text response type passes the body through.
        let params = RequestOptions {
            response_type: "text".to_string(),
            ..Default::default()
        };
        let envelope = client.get(&format!("{base}/motd"), params).await.unwrap();
        assert_eq!(envelope.data, ResponseData::Text("hello".to_string()));

        // Step 4: the identification header reaches the server.
        let envelope = client
            .get(&format!("{base}/requested-with"), RequestOptions::default())
            .await
            .unwrap();
        assert_eq!(
            envelope.data,
            ResponseData::Json(serde_json::json!({"requested_with": "request-core"}))
        );

        // Step 5: POST round-trips the serialized payload.
        let envelope = client
            .post(
                &format!("{base}/echo"),
                &serde_json::json!({"x": 1, "y": "two"}),
                RequestOptions::default(),
            )
            .await
            .unwrap();
        assert_eq!(
            envelope.data,
            ResponseData::Json(serde_json::json!({"x": 1, "y": "two"}))
        );

        // Step 6: 404 rejects with the status text.
        let err = client
            .get(&format!("{base}/missing"), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::Status { .. }));
        assert_eq!(err.to_string(), "Not Found");

        // Step 7: 201 is not success either.
        let err = client
            .post(
                &format!("{base}/items"),
                &serde_json::json!({"name": "Buy milk"}),
                RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Created");

        // Step 8: a 200 with a non-JSON body fails to parse.
        let err = client
            .get(&format!("{base}/broken"), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::Parse));

        // Step 9: connection refused surfaces as a network error.
        let closed = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let dead_addr = closed.local_addr().unwrap();
        drop(closed);
        let err = client
            .get(&format!("http://{dead_addr}/ping"), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::Network));
        assert_eq!(err.to_string(), "Network Error");
    });
}
