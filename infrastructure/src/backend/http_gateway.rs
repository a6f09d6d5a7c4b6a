//! HTTP adapter for the backend ask endpoint
//!
//! Issues `GET {base_url}/ask?question=<urlencoded>` and decodes the
//! `answer`/`follow_up_required` payload. A sentinel-prefixed ticket
//! dispatch goes through the same call; the backend handles the prefix.

use async_trait::async_trait;
use pilot_application::ports::answer_gateway::{AnswerGateway, AskReply, GatewayError};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Answer gateway implementation over HTTP
pub struct HttpAnswerGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnswerGateway {
    /// Create a new gateway for the given backend base URL.
    ///
    /// The timeout applies per request.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create a gateway with an existing client (for custom setups)
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn ask_url(&self) -> String {
        format!("{}/ask", self.base_url.trim_end_matches('/'))
    }
}

/// Wire payload of a successful ask response.
///
/// `follow_up_required` is optional on the wire; absent means false.
#[derive(Debug, Deserialize)]
struct AskPayload {
    answer: String,
    #[serde(default)]
    follow_up_required: bool,
}

#[async_trait]
impl AnswerGateway for HttpAnswerGateway {
    async fn ask(&self, question: &str) -> Result<AskReply, GatewayError> {
        let url = self.ask_url();
        debug!(%url, question_bytes = question.len(), "Dispatching ask request");

        // reqwest URL-encodes the query parameter
        let response = self
            .client
            .get(&url)
            .query(&[("question", question)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let payload: AskPayload = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Ok(AskReply::new(payload.answer, payload.follow_up_required))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_decodes_full_response() {
        let payload: AskPayload = serde_json::from_str(
            r#"{"answer": "Click 'Forgot password'.", "follow_up_required": true}"#,
        )
        .unwrap();
        assert_eq!(payload.answer, "Click 'Forgot password'.");
        assert!(payload.follow_up_required);
    }

    #[test]
    fn test_missing_follow_up_flag_defaults_to_false() {
        let payload: AskPayload = serde_json::from_str(r#"{"answer": "Done."}"#).unwrap();
        assert!(!payload.follow_up_required);
    }

    #[test]
    fn test_payload_without_answer_is_rejected() {
        let result = serde_json::from_str::<AskPayload>(r#"{"follow_up_required": false}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_ask_url_normalizes_trailing_slash() {
        let gateway =
            HttpAnswerGateway::new("http://localhost:8000/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(gateway.ask_url(), "http://localhost:8000/api/ask");

        let gateway =
            HttpAnswerGateway::new("http://localhost:8000/api", Duration::from_secs(5)).unwrap();
        assert_eq!(gateway.ask_url(), "http://localhost:8000/api/ask");
    }
}
