//! Infrastructure layer for surveyforge
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod deepseek;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, ProviderConfig};
pub use deepseek::DeepSeekGateway;
pub use store::InMemorySurveyStore;
