//! LLM Gateway port
//!
//! Defines the interface for the one outbound call the parse pipeline makes:
//! a single synchronous chat-completion request. Implementations (adapters)
//! live in the infrastructure layer.

use async_trait::async_trait;
use surveyforge_domain::Model;
use thiserror::Error;

/// Errors that can occur while querying the inference service.
///
/// All variants collapse to the same user-facing rejection
/// ([`ParseSurveyError::UpstreamUnavailable`]); the detail here is for
/// operator logs only.
///
/// [`ParseSurveyError::UpstreamUnavailable`]: crate::use_cases::parse_survey::ParseSurveyError::UpstreamUnavailable
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("API returned status {0}")]
    BadStatus(u16),

    #[error("Timeout")]
    Timeout,

    #[error("Response contained no choices")]
    EmptyReply,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for the inference service.
///
/// One request, one reply, no retained session and no retry — retry policy
/// belongs to whatever embeds the pipeline.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send a system instruction plus user text and return the first
    /// generated message's content, unmodified.
    async fn complete(
        &self,
        model: &Model,
        system_prompt: &str,
        user_text: &str,
    ) -> Result<String, GatewayError>;
}
