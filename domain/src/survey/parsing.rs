//! Survey extraction from LLM reply text.
//!
//! Turns an untrusted model reply into a validated [`ParsedSurvey`]:
//! strip markdown code fences, parse strict JSON, then run the ordered
//! structural checks from [`validation`](crate::survey::validation).
//!
//! The fence stripping is a narrow, best-effort cleanup: it only handles a
//! reply that *begins* with a fence. It deliberately does not hunt for JSON
//! embedded in surrounding prose — a reply with decorative JSON-like text
//! must fail rather than be silently accepted.

use crate::survey::entities::ParsedSurvey;
use crate::survey::validation::{ValidationError, validate_survey_value};
use thiserror::Error;

/// Why a model reply could not be turned into a survey.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplyError {
    /// The reply (after fence stripping) was not valid JSON. The offending
    /// text is for operator logs only and must never reach end users.
    #[error("reply is not valid JSON")]
    MalformedJson,

    /// The JSON parsed but violated a structural invariant.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Remove a leading/trailing markdown code fence, if present.
///
/// Handles replies that start with ```` ```json ```` or a bare ```` ``` ````.
/// Anything else passes through unchanged. Idempotent: a stripped reply has
/// no leading fence left to strip.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();

    let body = if let Some(rest) = trimmed.strip_prefix("```json") {
        rest
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        rest
    } else {
        return trimmed;
    };

    let body = body.trim();
    body.strip_suffix("```").unwrap_or(body).trim_end()
}

/// Parse and validate a raw model reply into a [`ParsedSurvey`].
///
/// The returned survey is the parsed value unchanged — validation neither
/// coerces nor synthesizes fields, and no partial acceptance exists.
pub fn parse_reply(raw: &str) -> Result<ParsedSurvey, ReplyError> {
    let candidate = strip_code_fences(raw);

    let value: serde_json::Value =
        serde_json::from_str(candidate).map_err(|_| ReplyError::MalformedJson)?;

    validate_survey_value(&value)?;

    // A validated value always satisfies the typed shape: required strings
    // were checked above and the remaining fields carry serde defaults.
    serde_json::from_value(value).map_err(|_| ReplyError::MalformedJson)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_REPLY: &str = r#"{
        "title": "Sleep Quality Survey",
        "description": "Assess how well you sleep.",
        "questions": [
            {
                "id": 1,
                "text": "How many hours do you sleep?",
                "options": [
                    { "id": "a", "text": "Under 5", "score": 0 },
                    { "id": "b", "text": "5-6", "score": 1 },
                    { "id": "c", "text": "7-8", "score": 2 },
                    { "id": "d", "text": "Over 8", "score": 3 }
                ]
            }
        ],
        "scoringGuide": {
            "pointValues": "a=0, b=1, c=2, d=3",
            "totalPossible": 3,
            "ranges": [
                { "min": 0, "max": 3, "title": "All", "description": "Everyone" }
            ]
        }
    }"#;

    #[test]
    fn parses_bare_json_reply() {
        let survey = parse_reply(VALID_REPLY).unwrap();
        assert_eq!(survey.title, "Sleep Quality Survey");
        assert_eq!(survey.questions.len(), 1);
        assert_eq!(survey.questions[0].options[0].score, 0);
        assert!(!survey.scoring_guide.ranges.is_empty());
    }

    #[test]
    fn parses_json_fenced_reply() {
        let fenced = format!("```json\n{}\n```", VALID_REPLY);
        let survey = parse_reply(&fenced).unwrap();
        assert_eq!(survey.questions[0].options[0].score, 0);
        assert!(survey.scoring_guide.ranges.len() >= 1);
    }

    #[test]
    fn parses_untagged_fenced_reply() {
        let fenced = format!("```\n{}\n```", VALID_REPLY);
        assert!(parse_reply(&fenced).is_ok());
    }

    #[test]
    fn prose_reply_is_malformed_json() {
        let err = parse_reply("Sure! Here is a survey about sleep quality.").unwrap_err();
        assert_eq!(err, ReplyError::MalformedJson);
        // The user-visible message carries nothing from the reply itself
        assert!(!err.to_string().contains("sleep"));
    }

    #[test]
    fn truncated_json_is_malformed() {
        let truncated = &VALID_REPLY[..VALID_REPLY.len() / 2];
        assert_eq!(parse_reply(truncated).unwrap_err(), ReplyError::MalformedJson);
    }

    #[test]
    fn schema_violation_passes_through() {
        let reply = r#"{"title": "T", "description": "D", "questions": []}"#;
        assert_eq!(
            parse_reply(reply).unwrap_err().to_string(),
            "Survey must have at least one question"
        );
    }

    #[test]
    fn strip_removes_json_fence() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn strip_removes_bare_fence() {
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn strip_passes_plain_text_through() {
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
        assert_eq!(strip_code_fences("no fences here"), "no fences here");
    }

    #[test]
    fn strip_is_idempotent() {
        for input in [
            "```json\n{\"a\":1}\n```",
            "```\n{\"a\":1}\n```",
            "{\"a\":1}",
            "plain prose",
            "",
        ] {
            let once = strip_code_fences(input).to_string();
            let twice = strip_code_fences(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn strip_handles_missing_closing_fence() {
        // Best effort: opening fence gone, body kept as-is
        assert_eq!(strip_code_fences("```json\n{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn strip_does_not_extract_embedded_json() {
        // JSON buried in prose is not rescued; the parse stage rejects it
        let reply = "Here you go:\n```json\n{\"a\":1}\n```";
        assert_eq!(strip_code_fences(reply), reply.trim());
    }
}
