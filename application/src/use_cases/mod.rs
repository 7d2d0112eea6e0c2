//! Use cases orchestrating the domain logic through the ports.

pub mod assign_slug;
pub mod parse_survey;

pub use assign_slug::{AssignSlugUseCase, MAX_SLUG_ATTEMPTS, SlugError, generate_slug};
pub use parse_survey::{ParseSurveyError, ParseSurveyUseCase, precheck};
