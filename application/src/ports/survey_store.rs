//! Survey store port
//!
//! Persistence is owned by an external relational collaborator; the only
//! thing the core needs from it is a slug collision probe.

use async_trait::async_trait;
use thiserror::Error;

/// A failure reported by the backing store.
#[derive(Error, Debug)]
#[error("Store error: {0}")]
pub struct StoreError(pub String);

/// Collision probe against the store that holds published surveys.
#[async_trait]
pub trait SurveyStore: Send + Sync {
    /// True when a survey with this slug already exists.
    async fn slug_exists(&self, slug: &str) -> Result<bool, StoreError>;
}
