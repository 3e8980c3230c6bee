use ip_echo_sdk::prelude::*;

#[derive(Serialize)]
struct SourceIpBody<'a> {
    ip: &'a str,
}

/// Echo the caller's source IP as `{"ip": "..."}` with permissive CORS headers.
///
/// The address is copied verbatim. A request without
/// `requestContext.identity.sourceIp` fails the invocation instead of
/// producing a response.
pub fn handle(req: &InvocationRequest) -> Result<InvocationResponse, HandlerError> {
    let ip = req.source_ip()?;
    tracing::debug!(source_ip = ip, "echoing source ip");

    Ok(InvocationResponse::ok_json(&SourceIpBody { ip })?.with_cors(&CorsPolicy::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_json(resp: &InvocationResponse) -> JsonValue {
        serde_json::from_str(&resp.body).unwrap()
    }

    #[test]
    fn test_echoes_ipv4() {
        let resp = handle(&InvocationRequest::from_source_ip("203.0.113.7")).unwrap();
        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.body, r#"{"ip":"203.0.113.7"}"#);
    }

    #[test]
    fn test_echoes_ipv6_loopback() {
        let resp = handle(&InvocationRequest::from_source_ip("::1")).unwrap();
        assert_eq!(resp.body, r#"{"ip":"::1"}"#);
    }

    #[test]
    fn test_no_format_validation() {
        for ip in ["", "not-an-ip", "999.999.999.999", "fe80::1%eth0", "ünïcode \"quoted\""] {
            let resp = handle(&InvocationRequest::from_source_ip(ip)).unwrap();
            let body = body_json(&resp);
            assert_eq!(body, json!({"ip": ip}));
            assert_eq!(body.as_object().map(|o| o.len()), Some(1));
        }
    }

    #[test]
    fn test_cors_headers_exact() {
        let resp = handle(&InvocationRequest::from_source_ip("198.51.100.20")).unwrap();
        let expected: Vec<(&str, &str)> = vec![
            (
                "Access-Control-Allow-Headers",
                "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token",
            ),
            ("Access-Control-Allow-Methods", "GET,POST,PUT,DELETE,OPTIONS"),
            ("Access-Control-Allow-Origin", "*"),
        ];
        let actual: Vec<(&str, &str)> = resp
            .headers
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_missing_identity_fails() {
        let req: InvocationRequest =
            serde_json::from_value(json!({"httpMethod": "GET", "requestContext": {}})).unwrap();
        assert!(matches!(handle(&req), Err(HandlerError::MissingSourceIp)));
        assert!(matches!(handle(&InvocationRequest::default()), Err(HandlerError::MissingSourceIp)));
    }

    #[test]
    fn test_output_is_idempotent() {
        let req = InvocationRequest::from_source_ip("203.0.113.7");
        let first = serde_json::to_string(&handle(&req).unwrap()).unwrap();
        let second = serde_json::to_string(&handle(&req).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_full_response_shape() {
        let resp = handle(&InvocationRequest::from_source_ip("203.0.113.7")).unwrap();
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "statusCode": 200,
                "headers": {
                    "Access-Control-Allow-Origin": "*",
                    "Access-Control-Allow-Methods": "GET,POST,PUT,DELETE,OPTIONS",
                    "Access-Control-Allow-Headers": "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token"
                },
                "body": "{\"ip\":\"203.0.113.7\"}"
            })
        );
    }
}
