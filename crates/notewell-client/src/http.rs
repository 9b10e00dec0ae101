//! Reqwest-backed request executor.
//!
//! Attaches the configured bearer token, encodes bodies and query strings,
//! and maps responses onto the core error taxonomy. The server reports
//! failures as `{ "error": "<message>" }`; that message is surfaced verbatim
//! so the stores can hand it to the UI.

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};

use notewell_core::{defaults, Error, Result};

use crate::executor::{ApiRequest, Method, RequestExecutor};

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = defaults::API_BASE;

/// Timeout for API requests (seconds).
pub const HTTP_TIMEOUT_SECS: u64 = defaults::HTTP_TIMEOUT_SECS;

/// HTTP executor for the notes API.
pub struct HttpExecutor {
    client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl HttpExecutor {
    /// Create an executor against the default local API.
    pub fn new() -> Self {
        Self::with_config(DEFAULT_API_BASE.to_string(), None)
    }

    /// Create an executor with an explicit base URL and optional token.
    pub fn with_config(base_url: String, token: Option<String>) -> Self {
        let timeout = std::env::var("NOTEWELL_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(HTTP_TIMEOUT_SECS);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()
            .expect("Failed to create HTTP client");

        info!("Initializing HTTP executor: base_url={}", base_url);

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(token),
        }
    }

    /// Create from environment variables.
    ///
    /// Reads `NOTEWELL_API_BASE` and `NOTEWELL_API_TOKEN`; a `.env` file is
    /// honored when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url =
            std::env::var("NOTEWELL_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let token = std::env::var("NOTEWELL_API_TOKEN").ok();
        Self::with_config(base_url, token)
    }

    /// Install the bearer token attached to subsequent requests.
    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.into());
        }
    }

    /// Drop the bearer token; subsequent requests go out unauthenticated.
    pub fn clear_token(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }

    fn current_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|slot| slot.clone())
    }
}

impl Default for HttpExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(&self, req: ApiRequest) -> Result<JsonValue> {
        let url = format!("{}{}", self.base_url, req.path);
        debug!(method = %req.method, path = %req.path, "api request");

        let method = match req.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, url);
        if !req.query.is_empty() {
            builder = builder.query(&req.query);
        }
        if let Some(token) = self.current_token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &req.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            warn!(path = %req.path, "request rejected: unauthorized");
            return Err(Error::Unauthorized);
        }

        let text = response.text().await?;

        if status.is_success() {
            if text.trim().is_empty() {
                return Ok(JsonValue::Null);
            }
            return Ok(serde_json::from_str(&text)?);
        }

        // Non-2xx: best-effort extraction of the server's message payload.
        let message = serde_json::from_str::<JsonValue>(&text)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_default();
        warn!(path = %req.path, status = status.as_u16(), "api request failed");
        Err(Error::Server {
            status: status.as_u16(),
            message,
        })
    }
}
