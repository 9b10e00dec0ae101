//! Mock request executor for deterministic testing.
//!
//! Responses are scripted per (method, path) and consumed in FIFO order, so
//! repeated calls to the same route can see different payloads. Each script
//! entry can carry a latency, which combined with
//! `#[tokio::test(start_paused = true)]` makes response-interleaving tests
//! deterministic.
//!
//! ## Usage
//!
//! ```rust
//! use notewell_client::executor::Method;
//! use notewell_client::mock::MockExecutor;
//! use serde_json::json;
//!
//! let executor = MockExecutor::new()
//!     .with_response(Method::Get, "/labels", json!({"data": []}))
//!     .with_error(Method::Post, "/notes", 422, "Title is too long");
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use notewell_core::{Error, Result};

use crate::executor::{ApiRequest, Method, RequestExecutor};

#[derive(Debug, Clone)]
enum ScriptedOutcome {
    Ok(JsonValue),
    Server { status: u16, message: String },
    Transport(String),
}

#[derive(Debug, Clone)]
struct ScriptedResponse {
    method: Method,
    path: String,
    latency_ms: u64,
    outcome: ScriptedOutcome,
}

/// Mock executor with scripted responses and a call log.
#[derive(Clone, Default)]
pub struct MockExecutor {
    script: Arc<Mutex<VecDeque<ScriptedResponse>>>,
    call_log: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful response for the next call to `method path`.
    pub fn with_response(self, method: Method, path: impl Into<String>, body: JsonValue) -> Self {
        self.push(ScriptedResponse {
            method,
            path: path.into(),
            latency_ms: 0,
            outcome: ScriptedOutcome::Ok(body),
        })
    }

    /// Script a successful response that arrives after `latency_ms`.
    pub fn with_delayed_response(
        self,
        method: Method,
        path: impl Into<String>,
        body: JsonValue,
        latency_ms: u64,
    ) -> Self {
        self.push(ScriptedResponse {
            method,
            path: path.into(),
            latency_ms,
            outcome: ScriptedOutcome::Ok(body),
        })
    }

    /// Script a server failure with a message payload.
    pub fn with_error(
        self,
        method: Method,
        path: impl Into<String>,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        self.push(ScriptedResponse {
            method,
            path: path.into(),
            latency_ms: 0,
            outcome: ScriptedOutcome::Server {
                status,
                message: message.into(),
            },
        })
    }

    /// Script a transport failure (request never completed).
    pub fn with_transport_error(
        self,
        method: Method,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.push(ScriptedResponse {
            method,
            path: path.into(),
            latency_ms: 0,
            outcome: ScriptedOutcome::Transport(message.into()),
        })
    }

    /// Script a transport failure that surfaces after `latency_ms`.
    pub fn with_delayed_transport_error(
        self,
        method: Method,
        path: impl Into<String>,
        message: impl Into<String>,
        latency_ms: u64,
    ) -> Self {
        self.push(ScriptedResponse {
            method,
            path: path.into(),
            latency_ms,
            outcome: ScriptedOutcome::Transport(message.into()),
        })
    }

    fn push(self, response: ScriptedResponse) -> Self {
        self.script
            .lock()
            .expect("mock script lock poisoned")
            .push_back(response);
        self
    }

    /// Every request the executor has seen, in call order.
    pub fn calls(&self) -> Vec<ApiRequest> {
        self.call_log
            .lock()
            .expect("mock call log lock poisoned")
            .clone()
    }

    /// Number of calls made to `method path`.
    pub fn calls_to(&self, method: Method, path: &str) -> usize {
        self.calls()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

#[async_trait]
impl RequestExecutor for MockExecutor {
    async fn execute(&self, req: ApiRequest) -> Result<JsonValue> {
        self.call_log
            .lock()
            .expect("mock call log lock poisoned")
            .push(req.clone());

        let scripted = {
            let mut script = self.script.lock().expect("mock script lock poisoned");
            let position = script
                .iter()
                .position(|r| r.method == req.method && r.path == req.path);
            match position {
                Some(idx) => script.remove(idx),
                None => None,
            }
        };

        let Some(scripted) = scripted else {
            return Err(Error::Transport(format!(
                "no scripted response for {} {}",
                req.method, req.path
            )));
        };

        if scripted.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(scripted.latency_ms)).await;
        }

        match scripted.outcome {
            ScriptedOutcome::Ok(body) => Ok(body),
            ScriptedOutcome::Server { status, message } => Err(Error::Server { status, message }),
            ScriptedOutcome::Transport(message) => Err(Error::Transport(message)),
        }
    }
}
