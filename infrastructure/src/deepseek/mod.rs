//! DeepSeek inference API adapter.

pub mod gateway;

pub use gateway::DeepSeekGateway;
