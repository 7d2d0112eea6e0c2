//! Configuration loading and data types.

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, ProviderConfig};
pub use loader::ConfigLoader;
