//! In-memory survey store.
//!
//! Backs the CLI and tests. A production deployment implements
//! [`SurveyStore`] against the relational store that owns survey rows.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use surveyforge_application::ports::survey_store::{StoreError, SurveyStore};

/// Slug set held in memory.
#[derive(Debug, Default)]
pub struct InMemorySurveyStore {
    slugs: Mutex<HashSet<String>>,
}

impl InMemorySurveyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a slug as taken. Returns false if it was already present.
    pub fn insert(&self, slug: &str) -> bool {
        self.slugs.lock().unwrap().insert(slug.to_string())
    }
}

#[async_trait]
impl SurveyStore for InMemorySurveyStore {
    async fn slug_exists(&self, slug: &str) -> Result<bool, StoreError> {
        Ok(self.slugs.lock().unwrap().contains(slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn probe_reflects_inserts() {
        let store = InMemorySurveyStore::new();
        assert!(!store.slug_exists("Ab3dEf9Z").await.unwrap());

        assert!(store.insert("Ab3dEf9Z"));
        assert!(store.slug_exists("Ab3dEf9Z").await.unwrap());

        // Second insert of the same slug reports the collision
        assert!(!store.insert("Ab3dEf9Z"));
    }
}
