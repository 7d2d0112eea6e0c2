//! Domain layer for surveyforge
//!
//! This crate contains the survey schema entities and the pure parsing and
//! validation logic. It has no dependencies on infrastructure or delivery
//! concerns — no I/O, no HTTP, no async.
//!
//! # Core Concepts
//!
//! ## Parse pipeline
//!
//! Free survey text is sent to an inference model with a fixed instruction
//! ([`prompt::SURVEY_PARSER_PROMPT`]); the untrusted reply then passes
//! through [`strip_code_fences`] → strict JSON parse →
//! [`validate_survey_value`], producing a [`ParsedSurvey`] or exactly one
//! categorized rejection.
//!
//! ## Slugs
//!
//! Shared surveys are addressed by a short random slug; [`slug`] owns the
//! alphabet and length rules.

pub mod model;
pub mod prompt;
pub mod slug;
pub mod survey;
pub mod util;

// Re-export commonly used types
pub use model::Model;
pub use prompt::SURVEY_PARSER_PROMPT;
pub use slug::{SLUG_ALPHABET, SLUG_LEN, is_valid_slug};
pub use survey::{
    AnswerOption, MAX_SURVEY_TEXT_BYTES, OPTION_IDS, ParsedQuestion, ParsedSurvey, ReplyError,
    ScoreRange, ScoringGuide, ValidationError, parse_reply, strip_code_fences, validate_survey,
    validate_survey_value,
};
