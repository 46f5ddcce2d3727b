//! REST client for the hosted backend.

mod account;
mod databases;
mod storage;

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use storeit_core::config::BackendConfig;
use storeit_core::error::{AppError, ErrorKind};
use storeit_core::result::AppResult;

use crate::factory::{BackendFactory, BackendHandle, Credential};

const PROJECT_HEADER: &str = "X-Appwrite-Project";
const KEY_HEADER: &str = "X-Appwrite-Key";
const SESSION_HEADER: &str = "X-Appwrite-Session";

/// Connection settings shared by every handle.
#[derive(Debug)]
struct RestSettings {
    endpoint: String,
    project_id: String,
    api_key: String,
    database_id: String,
}

/// Factory for REST handles. One connection pool is shared by all handles.
#[derive(Debug, Clone)]
pub struct RestBackend {
    http: reqwest::Client,
    settings: Arc<RestSettings>,
}

impl RestBackend {
    /// Create the factory from configuration.
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        Url::parse(&config.endpoint).map_err(|e| {
            AppError::configuration(format!("Invalid backend endpoint '{}': {e}", config.endpoint))
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            http,
            settings: Arc::new(RestSettings {
                endpoint: config.endpoint.trim_end_matches('/').to_string(),
                project_id: config.project_id.clone(),
                api_key: config.api_key.clone(),
                database_id: config.database_id.clone(),
            }),
        })
    }

    fn client(&self, credential: Credential) -> RestClient {
        RestClient {
            http: self.http.clone(),
            settings: Arc::clone(&self.settings),
            credential,
        }
    }
}

impl BackendFactory for RestBackend {
    fn admin(&self) -> BackendHandle {
        BackendHandle::from_client(self.client(Credential::ApiKey(self.settings.api_key.clone())))
    }

    fn session(&self, secret: &str) -> BackendHandle {
        BackendHandle::from_client(self.client(Credential::Session(secret.to_string())))
    }
}

/// One authenticated REST client.
#[derive(Debug, Clone)]
pub(crate) struct RestClient {
    http: reqwest::Client,
    settings: Arc<RestSettings>,
    credential: Credential,
}

/// Error body returned by the backend.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default, rename = "type")]
    error_type: String,
}

impl RestClient {
    fn url(&self, path: &str) -> AppResult<Url> {
        Url::parse(&format!("{}{path}", self.settings.endpoint))
            .map_err(|e| AppError::internal(format!("Invalid backend URL for '{path}': {e}")))
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(project) = HeaderValue::from_str(&self.settings.project_id) {
            headers.insert(PROJECT_HEADER, project);
        }
        let (name, value) = match &self.credential {
            Credential::ApiKey(key) => (KEY_HEADER, key),
            Credential::Session(secret) => (SESSION_HEADER, secret),
        };
        if let Ok(mut value) = HeaderValue::from_str(value) {
            value.set_sensitive(true);
            headers.insert(name, value);
        }
        headers
    }

    fn get_request(&self, url: Url) -> RequestBuilder {
        self.http.get(url).headers(self.headers())
    }

    fn post_request(&self, url: Url) -> RequestBuilder {
        self.http.post(url).headers(self.headers())
    }

    fn delete_request(&self, url: Url) -> RequestBuilder {
        self.http.delete(url).headers(self.headers())
    }

    /// Send a request and decode a JSON body.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        action: &str,
    ) -> AppResult<T> {
        let response = self.execute(request, action).await?;
        response.json::<T>().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("{action}: unreadable backend response"),
                e,
            )
        })
    }

    /// Send a request whose body is ignored.
    async fn send_empty(&self, request: RequestBuilder, action: &str) -> AppResult<()> {
        self.execute(request, action).await.map(|_| ())
    }

    async fn execute(&self, request: RequestBuilder, action: &str) -> AppResult<Response> {
        let response = request.send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("{action}: backend unreachable"),
                e,
            )
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.json::<ErrorBody>().await.ok();
        let detail = body
            .as_ref()
            .map(|b| b.message.as_str())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error"));

        tracing::debug!(
            action,
            status = status.as_u16(),
            error_type = body.as_ref().map(|b| b.error_type.as_str()).unwrap_or(""),
            "Backend request failed"
        );

        Err(AppError::new(
            kind_for_status(status),
            format!("{action}: {detail}"),
        ))
    }
}

/// Map a backend status code onto the application's error taxonomy.
fn kind_for_status(status: StatusCode) -> ErrorKind {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ErrorKind::Authentication,
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        StatusCode::CONFLICT => ErrorKind::Conflict,
        StatusCode::BAD_REQUEST => ErrorKind::Validation,
        _ => ErrorKind::ExternalService,
    }
}
