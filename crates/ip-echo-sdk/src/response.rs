//! Invocation response returned to the platform

use crate::error::HandlerError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Represents an outgoing HTTP response in API Gateway proxy form.
///
/// Serializes as `{"statusCode": .., "headers": {..}, "body": ".."}`.
/// Headers are kept sorted, so the same response always serializes to the
/// same bytes.
///
/// # Example
/// ```ignore
/// InvocationResponse::ok_json(&json!({"ip": "203.0.113.7"}))?
///     .with_cors(&CorsPolicy::default())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    /// HTTP status code
    pub status_code: u16,

    /// Response headers
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Response body
    #[serde(default)]
    pub body: String,
}

impl InvocationResponse {
    /// Create a response with the given status code, no headers and an empty body.
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: BTreeMap::new(),
            body: String::new(),
        }
    }

    /// Create a 200 OK response whose body is `body` as compact JSON.
    ///
    /// No Content-Type header is added; callers set the headers they want.
    pub fn ok_json<T: Serialize>(body: &T) -> Result<Self, HandlerError> {
        Self::new(200).with_json_body(body)
    }

    /// Add a header to the response (builder pattern).
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the body (builder pattern).
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the body to `body` serialized as compact JSON.
    pub fn with_json_body<T: Serialize>(self, body: &T) -> Result<Self, HandlerError> {
        Ok(self.with_body(serde_json::to_string(body)?))
    }

    /// Add the CORS headers of `policy`.
    pub fn with_cors(self, policy: &CorsPolicy) -> Self {
        self.with_header("Access-Control-Allow-Origin", policy.allow_origin.clone())
            .with_header("Access-Control-Allow-Methods", policy.allow_methods.clone())
            .with_header("Access-Control-Allow-Headers", policy.allow_headers.clone())
    }
}

impl Default for InvocationResponse {
    fn default() -> Self {
        Self::new(200)
    }
}

/// Values for the three `Access-Control-Allow-*` response headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    pub allow_origin: String,
    pub allow_methods: String,
    pub allow_headers: String,
}

impl CorsPolicy {
    pub const ALLOW_ORIGIN: &'static str = "*";
    pub const ALLOW_METHODS: &'static str = "GET,POST,PUT,DELETE,OPTIONS";
    pub const ALLOW_HEADERS: &'static str =
        "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
}

impl Default for CorsPolicy {
    /// Any origin, the common REST methods, and the headers API Gateway
    /// clients sign requests with.
    fn default() -> Self {
        Self {
            allow_origin: Self::ALLOW_ORIGIN.to_string(),
            allow_methods: Self::ALLOW_METHODS.to_string(),
            allow_headers: Self::ALLOW_HEADERS.to_string(),
        }
    }
}
