//! Survey schema: entities, reply parsing, and structural validation.

pub mod entities;
pub mod parsing;
pub mod validation;

/// Upper bound on submitted survey text, in bytes (1 MiB).
pub const MAX_SURVEY_TEXT_BYTES: usize = 1_048_576;

pub use entities::{AnswerOption, ParsedQuestion, ParsedSurvey, ScoreRange, ScoringGuide};
pub use parsing::{ReplyError, parse_reply, strip_code_fences};
pub use validation::{OPTION_IDS, ValidationError, validate_survey, validate_survey_value};
