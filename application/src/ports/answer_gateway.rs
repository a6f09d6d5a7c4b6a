//! Answer gateway port
//!
//! Defines the interface for the backend ask endpoint.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while asking the backend
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Backend returned HTTP {status}")]
    RequestFailed { status: u16 },

    #[error("Invalid response payload: {0}")]
    InvalidResponse(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// A successful reply from the ask endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskReply {
    /// Answer text to show as a bot message.
    pub answer: String,
    /// Whether the backend wants the solved/not-solved follow-up.
    pub follow_up_required: bool,
}

impl AskReply {
    pub fn new(answer: impl Into<String>, follow_up_required: bool) -> Self {
        Self {
            answer: answer.into(),
            follow_up_required,
        }
    }
}

/// Gateway to the question/answer backend
///
/// This port defines how the controller reaches the single ask endpoint.
/// A ticket-creation dispatch (sentinel-prefixed question) goes through the
/// same call and returns the same payload shape. Implementations (adapters)
/// live in the infrastructure layer.
#[async_trait]
pub trait AnswerGateway: Send + Sync {
    /// Send a question and get the answer plus the follow-up flag
    async fn ask(&self, question: &str) -> Result<AskReply, GatewayError>;
}
