//! Ports (interfaces) for external collaborators.
//!
//! The application layer depends on these traits; infrastructure provides
//! the adapters.

pub mod llm_gateway;
pub mod survey_store;

pub use llm_gateway::{GatewayError, LlmGateway};
pub use survey_store::{StoreError, SurveyStore};
