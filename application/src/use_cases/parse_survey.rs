//! Parse Survey use case.
//!
//! The strict linear pipeline that turns free survey text into a validated
//! [`ParsedSurvey`]:
//!
//! 1. precheck (empty / oversized input)
//! 2. gateway call (single attempt, no retry)
//! 3. fence stripping + strict JSON parse + structural validation
//!    ([`parse_reply`])
//!
//! Any stage's failure terminates the pipeline with that stage's failure
//! kind. Every failure is a client-facing rejection: the `Display` strings
//! on [`ParseSurveyError`] are the exact messages shown to end users, while
//! raw model output and transport causes go to operator logs only.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use std::sync::Arc;
use surveyforge_domain::util::truncate_str;
use surveyforge_domain::{
    MAX_SURVEY_TEXT_BYTES, Model, ParsedSurvey, ReplyError, SURVEY_PARSER_PROMPT, ValidationError,
    parse_reply,
};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Why a parse request was rejected.
///
/// All variants are the caller's to fix (resubmit smaller or valid text, or
/// retry later when the model produced unusable output) — none indicate a
/// fault in this service.
#[derive(Error, Debug)]
pub enum ParseSurveyError {
    #[error("Survey text cannot be empty")]
    EmptyInput,

    #[error("Survey text is too large. Maximum size is 1MB.")]
    TooLarge,

    /// The inference call failed, timed out, or returned no usable content.
    /// The source is logged, never shown to the caller.
    #[error("Failed to parse survey text. Please check the format and try again.")]
    UpstreamUnavailable(#[source] GatewayError),

    #[error("Failed to parse survey: AI returned invalid JSON format")]
    MalformedJson,

    /// The reply parsed as JSON but violated the survey schema. Carries the
    /// specific human-readable reason.
    #[error("{0}")]
    SchemaViolation(#[from] ValidationError),
}

impl ParseSurveyError {
    /// Every rejection in this pipeline is a client-input-style error, not a
    /// server fault.
    pub fn is_client_error(&self) -> bool {
        true
    }
}

/// Reject input that should never reach the gateway.
///
/// Empty (or whitespace-only) text and text over
/// [`MAX_SURVEY_TEXT_BYTES`] bytes fail here, before any network call.
pub fn precheck(text: &str) -> Result<(), ParseSurveyError> {
    if text.trim().is_empty() {
        return Err(ParseSurveyError::EmptyInput);
    }
    if text.len() > MAX_SURVEY_TEXT_BYTES {
        return Err(ParseSurveyError::TooLarge);
    }
    Ok(())
}

/// Use case for parsing survey text through the inference gateway.
pub struct ParseSurveyUseCase {
    gateway: Arc<dyn LlmGateway>,
    model: Model,
}

impl ParseSurveyUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            model: Model::default(),
        }
    }

    /// Use a specific model instead of the default.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Run the pipeline: precheck → gateway → strip/parse/validate.
    pub async fn execute(&self, text: &str) -> Result<ParsedSurvey, ParseSurveyError> {
        precheck(text)?;

        debug!(
            model = %self.model,
            bytes = text.len(),
            "requesting survey parse"
        );

        let raw = self
            .gateway
            .complete(&self.model, SURVEY_PARSER_PROMPT, text)
            .await
            .map_err(|e| {
                warn!("inference request failed: {e}");
                ParseSurveyError::UpstreamUnavailable(e)
            })?;

        match parse_reply(&raw) {
            Ok(survey) => {
                info!(
                    questions = survey.questions.len(),
                    ranges = survey.scoring_guide.ranges.len(),
                    "survey parsed"
                );
                Ok(survey)
            }
            Err(ReplyError::MalformedJson) => {
                error!(
                    "model reply was not valid JSON: {}",
                    truncate_str(&raw, 2048)
                );
                Err(ParseSurveyError::MalformedJson)
            }
            Err(ReplyError::Invalid(violation)) => {
                debug!("model reply failed validation: {violation}");
                Err(ParseSurveyError::SchemaViolation(violation))
            }
        }
    }
}
