//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use storeit_api::{AppState, build_app};
use storeit_backend::{BackendFactory, MemoryBackend};
use storeit_core::config::{AppConfig, BackendProvider};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The in-memory backend behind the router, for direct inspection
    pub backend: MemoryBackend,
    /// Application config
    pub config: AppConfig,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body text
    pub text: String,
    /// Parsed JSON body (`Null` when not JSON)
    pub body: Value,
}

impl TestResponse {
    /// All `Set-Cookie` headers for `name`.
    pub fn set_cookies(&self, name: &str) -> Vec<String> {
        let prefix = format!("{name}=");
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter(|v| v.starts_with(&prefix))
            .map(String::from)
            .collect()
    }
}

impl TestApp {
    /// Create a new test application on an empty in-memory backend
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.backend.provider = BackendProvider::Memory;
        Self::with_config(config)
    }

    /// Create a test application from a loaded config; the backend is always in-memory
    pub fn with_config(mut config: AppConfig) -> Self {
        config.backend.provider = BackendProvider::Memory;

        let backend = MemoryBackend::new(&config.backend);
        let factory: Arc<dyn BackendFactory> = Arc::new(backend.clone());
        let router = build_app(AppState::new(config.clone(), factory));

        Self {
            router,
            backend,
            config,
        }
    }

    /// Send a request with an optional JSON body and session cookie
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Upload `data` as multipart field `file`
    pub async fn upload(&self, file_name: &str, data: &[u8], cookie: Option<&str>) -> TestResponse {
        let boundary = "storeit-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        let mut req = Request::builder()
            .method("POST")
            .uri("/api/files/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            );
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }
        let req = req.body(Body::from(body)).expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            text,
            body,
        }
    }

    /// Sign up and return the account id
    pub async fn sign_up(&self, full_name: &str, email: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/sign-up",
                Some(serde_json::json!({ "fullName": full_name, "email": email })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "sign-up failed: {}", response.text);
        response.body["data"]["accountId"]
            .as_str()
            .expect("accountId missing")
            .to_string()
    }

    /// Sign up, verify the emailed passcode, and return a `Cookie` header value
    pub async fn sign_in_as(&self, full_name: &str, email: &str) -> String {
        let account_id = self.sign_up(full_name, email).await;
        let passcode = self
            .backend
            .last_passcode(email)
            .expect("No passcode was sent");

        let response = self
            .request(
                "POST",
                "/api/auth/verify",
                Some(serde_json::json!({ "accountId": account_id, "password": passcode })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "verify failed: {}", response.text);

        let set_cookie = response
            .set_cookies(&self.config.session.cookie_name)
            .pop()
            .expect("No session cookie set");
        set_cookie
            .split(';')
            .next()
            .expect("Empty Set-Cookie header")
            .to_string()
    }

    /// Id of the user document registered under `email`
    pub fn user_id(&self, email: &str) -> String {
        self.backend
            .documents(&self.config.backend.users_collection_id)
            .iter()
            .find(|d| d["email"] == email)
            .and_then(|d| d["$id"].as_str())
            .expect("User document missing")
            .to_string()
    }
}
