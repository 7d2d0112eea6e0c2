//! Survey store adapters.

pub mod memory;

pub use memory::InMemorySurveyStore;
