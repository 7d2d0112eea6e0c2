//! Structural validation of parsed survey JSON.
//!
//! The checks run in a fixed order and short-circuit on the first violation —
//! callers get exactly one reason, never an aggregate. The reason strings are
//! part of the contract: they are surfaced verbatim to end users as the
//! explanation of why a submission was rejected.
//!
//! Validation operates on raw [`serde_json::Value`] rather than typed
//! entities so that a *missing* required field reports its documented reason
//! instead of a deserialization error.

use crate::survey::entities::ParsedSurvey;
use serde_json::Value;
use thiserror::Error;

/// Expected option ids, in positional order.
pub const OPTION_IDS: [&str; 4] = ["a", "b", "c", "d"];

/// Number of options every question must have.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A structural violation found in a parsed survey.
///
/// `Display` output is the user-facing rejection reason. Question indices
/// are 1-based; option positions are 1-based in [`WrongOptionId`] messages.
///
/// [`WrongOptionId`]: ValidationError::WrongOptionId
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Survey title is required")]
    MissingTitle,

    #[error("Survey description is required")]
    MissingDescription,

    #[error("Survey must have at least one question")]
    NoQuestions,

    #[error("Question {question} text is required")]
    MissingQuestionText { question: usize },

    #[error("Question {question} must have exactly 4 options")]
    WrongOptionCount { question: usize },

    #[error("Question {question} option {position} must have id '{expected}'")]
    WrongOptionId {
        question: usize,
        position: usize,
        expected: &'static str,
    },

    #[error("Question {question} option {id} must have score {expected}")]
    WrongOptionScore {
        question: usize,
        id: String,
        expected: i64,
    },

    #[error("Question {question} option {id} text is required")]
    MissingOptionText { question: usize, id: String },

    #[error("Survey must have scoring guide with ranges")]
    MissingScoringRanges,
}

/// Validate raw survey JSON against the structural invariants.
///
/// Non-mutating: on success the value is accepted exactly as given, with no
/// coercion or defaulting. Checks run in order and the first violation wins.
pub fn validate_survey_value(value: &Value) -> Result<(), ValidationError> {
    if blank(value.get("title")) {
        return Err(ValidationError::MissingTitle);
    }

    if blank(value.get("description")) {
        return Err(ValidationError::MissingDescription);
    }

    let questions = match value.get("questions").and_then(Value::as_array) {
        Some(qs) if !qs.is_empty() => qs,
        _ => return Err(ValidationError::NoQuestions),
    };

    for (index, question) in questions.iter().enumerate() {
        let number = index + 1;

        if blank(question.get("text")) {
            return Err(ValidationError::MissingQuestionText { question: number });
        }

        let options = match question.get("options").and_then(Value::as_array) {
            Some(opts) if opts.len() == OPTIONS_PER_QUESTION => opts,
            _ => return Err(ValidationError::WrongOptionCount { question: number }),
        };

        for (position, option) in options.iter().enumerate() {
            let expected = OPTION_IDS[position];

            let id = option.get("id").and_then(Value::as_str).unwrap_or_default();
            if id != expected {
                return Err(ValidationError::WrongOptionId {
                    question: number,
                    position: position + 1,
                    expected,
                });
            }

            if option.get("score").and_then(Value::as_i64) != Some(position as i64) {
                return Err(ValidationError::WrongOptionScore {
                    question: number,
                    id: id.to_string(),
                    expected: position as i64,
                });
            }

            if blank(option.get("text")) {
                return Err(ValidationError::MissingOptionText {
                    question: number,
                    id: id.to_string(),
                });
            }
        }
    }

    let ranges = value
        .get("scoringGuide")
        .and_then(|guide| guide.get("ranges"))
        .and_then(Value::as_array);
    match ranges {
        Some(rs) if !rs.is_empty() => {}
        _ => return Err(ValidationError::MissingScoringRanges),
    }

    Ok(())
}

/// Validate an already-typed survey through the same rules.
///
/// Exposed so externally sourced survey data — not only model output — can
/// be checked against the identical contract.
pub fn validate_survey(survey: &ParsedSurvey) -> Result<(), ValidationError> {
    // Serialization of a ParsedSurvey is infallible; the JSON round-trip
    // keeps one set of rules for both entry points.
    let value = serde_json::to_value(survey).unwrap_or(Value::Null);
    validate_survey_value(&value)
}

/// True when a field is absent, not a string, or whitespace-only.
fn blank(field: Option<&Value>) -> bool {
    match field.and_then(Value::as_str) {
        Some(s) => s.trim().is_empty(),
        None => true,
    }
}
