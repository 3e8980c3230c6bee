//! AWS Lambda adapter
//!
//! The Lambda payload is the API Gateway proxy event itself. A handler error
//! is returned as the invocation error, so API Gateway answers the caller
//! with its own 5xx.

use crate::handler;
use ip_echo_sdk::{InvocationRequest, InvocationResponse};
use lambda_runtime::{Error, LambdaEvent};

pub async fn function_handler(event: LambdaEvent<InvocationRequest>) -> Result<InvocationResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "invocation");
    Ok(handler::handle(&event.payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;

    fn event(payload: serde_json::Value) -> LambdaEvent<InvocationRequest> {
        LambdaEvent::new(serde_json::from_value(payload).unwrap(), Context::default())
    }

    #[tokio::test]
    async fn test_proxy_event() {
        let resp = function_handler(event(json!({
            "resource": "/",
            "path": "/",
            "httpMethod": "GET",
            "headers": null,
            "requestContext": {
                "requestId": "41b45ea3-70b5-11e6-b7bd-69b5aaebc7d9",
                "identity": {"sourceIp": "203.0.113.7", "userAgent": "curl/8.5.0"}
            }
        })))
        .await
        .unwrap();

        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.body, r#"{"ip":"203.0.113.7"}"#);
        assert_eq!(resp.headers["Access-Control-Allow-Origin"], "*");
    }

    #[tokio::test]
    async fn test_missing_identity_is_invocation_error() {
        let err = function_handler(event(json!({"path": "/"}))).await.unwrap_err();
        assert_eq!(err.to_string(), "request has no requestContext.identity.sourceIp");
    }
}
