//! Shared helpers for black-box HTTP integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! each suite pulls this module in with `mod support;` and uses the subset
//! it needs. Set `APP_URL` to aim the suites at an already-running server;
//! otherwise an in-process server with empty in-memory storage is started on
//! an ephemeral port.
#![allow(dead_code, reason = "each suite uses a different subset of helpers")]

use std::net::{SocketAddr, TcpListener};

use actix_web::http::{Method, StatusCode};
use actix_web::web;
use awc::Client;
use serde_json::{Value, json};
use users_api::domain::TRACE_ID_HEADER;
use users_api::inbound::http::health::HealthState;
use users_api::server::{ServerConfig, create_server};
use uuid::Uuid;

/// Variable naming an external server to test instead of an in-process one.
pub const APP_URL_ENV: &str = "APP_URL";

/// Status, trace header, and decoded body of one exchange.
#[derive(Debug)]
pub struct JsonResponse {
    pub status: StatusCode,
    pub trace_id: Option<String>,
    pub body: Value,
}

/// Handle on the server under test.
pub struct TestApp {
    base_url: String,
    client: Client,
}

impl TestApp {
    /// Target `APP_URL` when set, otherwise start an in-process server.
    pub async fn spawn() -> Self {
        let base_url = match std::env::var(APP_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url.trim_end_matches('/').to_owned(),
            _ => spawn_in_process().await,
        };
        Self {
            base_url,
            client: Client::default(),
        }
    }

    /// Whether the suite is driving a server it started itself.
    pub fn is_in_process() -> bool {
        std::env::var(APP_URL_ENV).map_or(true, |url| url.trim().is_empty())
    }

    /// Absolute URL for `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a bodiless request.
    pub async fn request(&self, method: Method, path: &str) -> JsonResponse {
        let response = self
            .client
            .request(method, self.url(path))
            .send()
            .await
            .expect("request reaches server");
        decode(response).await
    }

    /// Send `body` as JSON.
    pub async fn send_json(&self, method: Method, path: &str, body: &Value) -> JsonResponse {
        let response = self
            .client
            .request(method, self.url(path))
            .send_json(body)
            .await
            .expect("request reaches server");
        decode(response).await
    }

    pub async fn get(&self, path: &str) -> JsonResponse {
        self.request(Method::GET, path).await
    }

    /// Create a user, asserting success, and return the stored record.
    pub async fn create_user(&self, body: &Value) -> Value {
        let response = self.send_json(Method::POST, "/api/users", body).await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body
    }
}

async fn decode<S>(mut response: awc::ClientResponse<S>) -> JsonResponse
where
    S: futures_util::Stream<Item = Result<web::Bytes, awc::error::PayloadError>> + Unpin,
{
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = response.body().await.expect("response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON response body")
    };
    JsonResponse {
        status,
        trace_id,
        body,
    }
}

async fn spawn_in_process() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr: SocketAddr = listener.local_addr().expect("listener address");
    let config = ServerConfig::new(addr).with_listener(listener);
    let server = create_server(web::Data::new(HealthState::new()), config).expect("server starts");
    actix_web::rt::spawn(server);
    format!("http://{addr}")
}

/// A valid user body with an email no other test will use.
pub fn unique_user(first_name: &str) -> Value {
    json!({
        "email": format!("{}@example.com", Uuid::new_v4().simple()),
        "first_name": first_name,
        "last_name": "Tester",
        "avatar": "https://example.com/avatar.png"
    })
}

/// Ids listed in a page body.
pub fn item_ids(page: &Value) -> Vec<i64> {
    page["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["id"].as_i64().expect("numeric id"))
        .collect()
}
