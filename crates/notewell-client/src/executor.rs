//! Transport abstraction the stores talk through.
//!
//! The stores never touch HTTP directly; they build an [`ApiRequest`] and
//! hand it to a [`RequestExecutor`]. Production uses the reqwest-backed
//! [`crate::http::HttpExecutor`]; tests inject [`crate::mock::MockExecutor`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use notewell_core::Result;

/// HTTP method subset the notes API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single request against the notes API, relative to the base URL.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<JsonValue>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>, body: JsonValue) -> Self {
        Self::new(Method::Post, path).with_body(body)
    }

    /// A PUT with no body; chain [`ApiRequest::with_body`] when one is needed.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}

/// Executes requests against the notes API.
///
/// Success resolves to the parsed response body. Failures map onto the
/// [`notewell_core::Error`] taxonomy; a 401 surfaces as
/// `Error::Unauthorized` and is treated by the stores as any other failure
/// (global logout is the embedding application's concern).
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self, req: ApiRequest) -> Result<JsonValue>;
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Unwrap the API's `{ "data": ... }` response envelope.
pub fn decode_data<T: DeserializeOwned>(body: JsonValue) -> Result<T> {
    let envelope: Envelope<T> = serde_json::from_value(body)?;
    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_data_unwraps_envelope() {
        let body = json!({"data": {"_id": "l1", "name": "work", "color": "#ff0000"}});
        let label: notewell_core::Label = decode_data(body).unwrap();
        assert_eq!(label.name, "work");
    }

    #[test]
    fn test_decode_data_rejects_missing_envelope() {
        let err = decode_data::<Vec<notewell_core::Label>>(json!([])).unwrap_err();
        assert!(matches!(err, notewell_core::Error::Serialization(_)));
    }

    #[test]
    fn test_request_builders() {
        let req = ApiRequest::get("/notes")
            .with_query(vec![("isArchived".to_string(), "false".to_string())]);
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.path, "/notes");
        assert!(req.body.is_none());

        let req = ApiRequest::put("/notes/n1/pin");
        assert_eq!(req.method, Method::Put);
        assert!(req.body.is_none());

        let req = ApiRequest::post("/labels", json!({"name": "work"}));
        assert!(req.body.is_some());
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }
}
