//! HTTP client for submitting the form to the signup endpoint
//!
//! The endpoint accepts a flat JSON map of field names to values and
//! answers with a `{success, errors}`-shaped JSON body. Anything else
//! (transport failure, non-JSON body) is normalized into a synthetic
//! failure result by the caller.

use crate::config::TuiConfig;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::traits::SubmitClient;

/// Response body of the signup endpoint.
///
/// Defaults tolerate any other JSON shape: an empty object deserializes
/// to `{success: false, errors: None}`, which the display path treats as
/// success (matching the original's destructure-with-fallback behavior).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SubmitResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub errors: Option<Vec<SubmitError>>,
}

/// One error entry in a failure response
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SubmitError {
    #[serde(default)]
    pub msg: String,
}

/// Terminal outcome of a submission attempt, as shown in the modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    Success,
    Failure(Vec<String>),
}

impl SubmitResult {
    /// Classify a well-formed response: failure only when `success` is
    /// false AND an error list is present; everything else is the
    /// success path.
    pub fn from_response(response: SubmitResponse) -> Self {
        match response {
            SubmitResponse {
                success: false,
                errors: Some(errors),
            } => SubmitResult::Failure(errors.into_iter().map(|e| e.msg).collect()),
            _ => SubmitResult::Success,
        }
    }

    /// Synthesize a failure from a transport or parse error
    pub fn from_error(err: &anyhow::Error) -> Self {
        SubmitResult::Failure(vec![err.to_string()])
    }
}

/// Submit client talking JSON over HTTP
pub struct HttpSubmitClient {
    client: reqwest::Client,
    endpoint: String,
    method: Method,
}

impl HttpSubmitClient {
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let method = config
            .method()
            .parse::<Method>()
            .map_err(|_| anyhow!("Invalid HTTP method in config: {}", config.method()))?;
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint(),
            method,
        })
    }
}

#[async_trait]
impl SubmitClient for HttpSubmitClient {
    async fn submit(&self, payload: Map<String, Value>) -> Result<SubmitResponse> {
        tracing::info!(endpoint = %self.endpoint, "submitting form");

        let response = self
            .client
            .request(self.method.clone(), &self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| anyhow!("Request failed: {e}"))?;

        response
            .json::<SubmitResponse>()
            .await
            .map_err(|e| anyhow!("Invalid response body: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HttpSubmitClient {
        let config = TuiConfig {
            endpoint: Some(format!("{}/signup", server.uri())),
            method: Some("POST".to_string()),
        };
        HttpSubmitClient::new(&config).unwrap()
    }

    fn payload() -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("name".to_string(), Value::String("alice".to_string()));
        map.insert("email".to_string(), Value::String("a@b.c".to_string()));
        map
    }

    mod response_model {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_success_response_parses() {
            let response: SubmitResponse =
                serde_json::from_str(r#"{"success": true}"#).unwrap();
            assert!(response.success);
            assert!(response.errors.is_none());
        }

        #[test]
        fn test_failure_response_parses_error_list() {
            let response: SubmitResponse =
                serde_json::from_str(r#"{"success": false, "errors": [{"msg": "X"}]}"#).unwrap();
            assert!(!response.success);
            assert_eq!(response.errors.unwrap()[0].msg, "X");
        }

        #[test]
        fn test_empty_object_is_tolerated() {
            let response: SubmitResponse = serde_json::from_str("{}").unwrap();
            assert!(!response.success);
            assert!(response.errors.is_none());
        }

        #[test]
        fn test_array_body_is_tolerated_as_success_path() {
            let response: SubmitResponse = serde_json::from_str("[]").unwrap();
            assert_eq!(SubmitResult::from_response(response), SubmitResult::Success);
        }

        #[test]
        fn test_unknown_shape_maps_to_success_result() {
            let response: SubmitResponse =
                serde_json::from_str(r#"{"status": "weird"}"#).unwrap();
            assert_eq!(SubmitResult::from_response(response), SubmitResult::Success);
        }

        #[test]
        fn test_failure_with_errors_maps_to_failure_result() {
            let response = SubmitResponse {
                success: false,
                errors: Some(vec![SubmitError { msg: "X".into() }]),
            };
            assert_eq!(
                SubmitResult::from_response(response),
                SubmitResult::Failure(vec!["X".to_string()])
            );
        }

        #[test]
        fn test_failure_without_errors_is_success_path() {
            let response = SubmitResponse {
                success: false,
                errors: None,
            };
            assert_eq!(SubmitResult::from_response(response), SubmitResult::Success);
        }

        #[test]
        fn test_from_error_carries_message() {
            let err = anyhow!("connection refused");
            assert_eq!(
                SubmitResult::from_error(&err),
                SubmitResult::Failure(vec!["connection refused".to_string()])
            );
        }
    }

    mod http {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_submit_posts_json_and_parses_response() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/signup"))
                .and(header("content-type", "application/json"))
                .and(header("accept", "application/json"))
                .and(body_json(json!({"name": "alice", "email": "a@b.c"})))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
                .expect(1)
                .mount(&server)
                .await;

            let client = client_for(&server);
            let response = client.submit(payload()).await.unwrap();
            assert!(response.success);
        }

        #[tokio::test]
        async fn test_submit_parses_failure_body() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(200).set_body_json(
                    json!({"success": false, "errors": [{"msg": "email taken"}]}),
                ))
                .mount(&server)
                .await;

            let client = client_for(&server);
            let response = client.submit(payload()).await.unwrap();
            assert_eq!(
                SubmitResult::from_response(response),
                SubmitResult::Failure(vec!["email taken".to_string()])
            );
        }

        #[tokio::test]
        async fn test_non_json_body_is_an_error() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
                .mount(&server)
                .await;

            let client = client_for(&server);
            let result = client.submit(payload()).await;
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("Invalid response body"));
        }

        #[tokio::test]
        async fn test_connection_failure_is_an_error() {
            // Nothing listening on this port
            let config = TuiConfig {
                endpoint: Some("http://127.0.0.1:9/signup".to_string()),
                method: Some("POST".to_string()),
            };
            let client = HttpSubmitClient::new(&config).unwrap();
            let result = client.submit(payload()).await;
            assert!(result.is_err());
        }

        #[test]
        fn test_invalid_method_is_rejected_at_construction() {
            let config = TuiConfig {
                endpoint: Some("http://localhost/signup".to_string()),
                method: Some("not a method".to_string()),
            };
            assert!(HttpSubmitClient::new(&config).is_err());
        }
    }
}
