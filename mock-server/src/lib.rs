use axum::{
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub done: bool,
}

#[derive(Deserialize)]
pub struct CreateItem {
    pub name: String,
    #[serde(default)]
    pub done: bool,
}

pub fn app() -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/motd", get(motd))
        .route("/broken", get(broken))
        .route("/missing", get(missing))
        .route("/requested-with", get(requested_with))
        .route("/echo", post(echo))
        .route("/items", post(create_item))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn ping() -> Json<Value> {
    Json(json!({"ok": true}))
}

async fn motd() -> &'static str {
    "hello"
}

// 200 with a body that is not JSON, for exercising parse failures.
async fn broken() -> &'static str {
    "not json"
}

async fn missing() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn requested_with(headers: HeaderMap) -> Json<Value> {
    let value = headers
        .get("x-requested-with")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    Json(json!({"requested_with": value}))
}

async fn echo(Json(body): Json<Value>) -> Json<Value> {
    Json(body)
}

async fn create_item(Json(input): Json<CreateItem>) -> (StatusCode, Json<Item>) {
    let item = Item {
        name: input.name,
        done: input.done,
    };
    (StatusCode::CREATED, Json(item))
}
