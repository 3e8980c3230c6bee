//! Invocation record handed to the handler by the platform

use crate::error::HandlerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An inbound HTTP request in API Gateway proxy form.
///
/// Only `requestContext.identity.sourceIp` is needed by the echo handler.
/// Everything else is optional and defaulted so that sparse events from test
/// harnesses or other proxies still decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationRequest {
    /// Resource template the route matched (e.g., "/ip")
    #[serde(default)]
    pub resource: Option<String>,

    /// Request path
    #[serde(default)]
    pub path: Option<String>,

    /// HTTP method (GET, POST, ...)
    #[serde(default)]
    pub http_method: Option<String>,

    /// HTTP headers
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: HashMap<String, String>,

    /// Query parameters
    #[serde(default, deserialize_with = "null_as_default")]
    pub query_string_parameters: HashMap<String, String>,

    /// Path parameters extracted from the route
    #[serde(default, deserialize_with = "null_as_default")]
    pub path_parameters: HashMap<String, String>,

    /// Raw body, base64 when `is_base64_encoded` is set
    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub is_base64_encoded: bool,

    /// Metadata the routing layer attaches to the request
    #[serde(default)]
    pub request_context: Option<RequestContext>,
}

/// Routing-layer metadata for one request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(default)]
    pub request_id: Option<String>,

    #[serde(default)]
    pub stage: Option<String>,

    #[serde(default)]
    pub identity: Option<Identity>,
}

/// What the routing layer knows about the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Network-layer address of the client, as observed by the router
    #[serde(default)]
    pub source_ip: Option<String>,

    #[serde(default)]
    pub user_agent: Option<String>,
}

impl InvocationRequest {
    /// Build a request carrying only a source IP.
    pub fn from_source_ip(source_ip: impl Into<String>) -> Self {
        Self {
            request_context: Some(RequestContext {
                identity: Some(Identity {
                    source_ip: Some(source_ip.into()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// The caller's source IP, exactly as the platform reported it.
    ///
    /// No format check is made: whatever string sits in
    /// `requestContext.identity.sourceIp` is returned.
    pub fn source_ip(&self) -> Result<&str, HandlerError> {
        self.request_context
            .as_ref()
            .and_then(|ctx| ctx.identity.as_ref())
            .and_then(|identity| identity.source_ip.as_deref())
            .ok_or(HandlerError::MissingSourceIp)
    }

    /// Platform request ID, if one was attached.
    pub fn request_id(&self) -> Option<&str> {
        self.request_context
            .as_ref()
            .and_then(|ctx| ctx.request_id.as_deref())
    }

    /// Get a header value (case-insensitive lookup).
    pub fn header(&self, key: &str) -> Option<&String> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }
}

/// API Gateway sends `null` instead of `{}` for empty maps.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
