//! Survey schema entities.
//!
//! These types mirror the JSON contract the model is instructed to emit:
//! field names on the wire are camelCase (`scoringGuide`, `pointValues`,
//! `totalPossible`), kept via serde renames.
//!
//! A value of these types is only constructed from model output *after*
//! [`validate_survey_value`](crate::survey::validation::validate_survey_value)
//! has accepted the raw JSON. Fields the validator does not check (question
//! ids, point values, range bounds) are descriptive and carry serde defaults
//! so their absence never causes a rejection beyond the documented reasons.

use serde::{Deserialize, Serialize};

/// A fully parsed survey, ready to hand to the caller.
///
/// Transient value — persistence is an external collaborator's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedSurvey {
    pub title: String,
    pub description: String,
    /// Order is significant: it defines the question sequence shown to
    /// respondents.
    pub questions: Vec<ParsedQuestion>,
    #[serde(rename = "scoringGuide")]
    pub scoring_guide: ScoringGuide,
    /// Free text, no validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A single question with its four lettered options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuestion {
    /// Caller-assigned; not validated for uniqueness or sequencing.
    #[serde(default)]
    pub id: i64,
    pub text: String,
    /// Exactly 4 entries, enforced by validation rather than the type.
    pub options: Vec<AnswerOption>,
}

/// One answer option. Ids run `a, b, c, d` positionally and scores equal the
/// zero-based position (a=0, b=1, c=2, d=3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
    pub score: i64,
}

/// How the survey is scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringGuide {
    /// Descriptive, unchecked content (e.g. "a=0, b=1, c=2, d=3").
    #[serde(rename = "pointValues", default)]
    pub point_values: String,
    /// Descriptive only — never cross-checked against the achievable score.
    #[serde(rename = "totalPossible", default)]
    pub total_possible: i64,
    /// Must be non-empty. No contiguity or overlap invariant is enforced.
    pub ranges: Vec<ScoreRange>,
}

/// A titled score band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    #[serde(default)]
    pub min: i64,
    #[serde(default)]
    pub max: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}
