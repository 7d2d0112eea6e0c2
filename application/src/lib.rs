//! Application layer for surveyforge
//!
//! Use cases and the ports they depend on. The parse pipeline is a strict
//! linear sequence — precheck → gateway call → strip → parse → validate —
//! with no branching back; any stage's failure terminates the pipeline with
//! that stage's failure kind.
//!
//! The layer is stateless: each request is independent, may run concurrently
//! with others without coordination, and holds no shared mutable state.

pub mod ports;
pub mod use_cases;

pub use ports::{GatewayError, LlmGateway, StoreError, SurveyStore};
pub use use_cases::{
    AssignSlugUseCase, MAX_SLUG_ATTEMPTS, ParseSurveyError, ParseSurveyUseCase, SlugError,
    generate_slug, precheck,
};
