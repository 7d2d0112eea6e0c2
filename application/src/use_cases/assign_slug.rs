//! Assign Slug use case.
//!
//! Uniqueness under contention is solved optimistically: generate a random
//! candidate from the fixed alphabet, probe the store for a collision, and
//! retry with a fresh candidate up to a bounded attempt count. The bound is
//! part of the contract — unbounded retry against a filling identifier space
//! is a hazard.

use crate::ports::survey_store::{StoreError, SurveyStore};
use rand::Rng;
use std::sync::Arc;
use surveyforge_domain::{SLUG_ALPHABET, SLUG_LEN};
use thiserror::Error;
use tracing::{debug, warn};

/// Maximum generate-and-probe attempts before giving up.
pub const MAX_SLUG_ATTEMPTS: usize = 10;

/// Why a slug could not be assigned.
#[derive(Error, Debug)]
pub enum SlugError {
    /// Every candidate collided. With an 8-character 62-symbol slug this
    /// means the store is pathologically full or the store probe is lying.
    #[error("Unable to generate unique slug after maximum attempts")]
    SpaceExhausted,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Generate one slug candidate without any collision probe.
///
/// Used where the caller accepts collision risk (e.g. previewing a survey
/// that has not been published yet).
pub fn generate_slug() -> String {
    let mut rng = rand::rng();
    (0..SLUG_LEN)
        .map(|_| SLUG_ALPHABET[rng.random_range(0..SLUG_ALPHABET.len())] as char)
        .collect()
}

/// Use case for assigning a collision-free slug to a survey.
pub struct AssignSlugUseCase {
    store: Arc<dyn SurveyStore>,
}

impl AssignSlugUseCase {
    pub fn new(store: Arc<dyn SurveyStore>) -> Self {
        Self { store }
    }

    /// Generate candidates until one is free, bounded by
    /// [`MAX_SLUG_ATTEMPTS`].
    pub async fn execute(&self) -> Result<String, SlugError> {
        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let candidate = generate_slug();

            if !self.store.slug_exists(&candidate).await? {
                debug!(attempt, "slug assigned");
                return Ok(candidate);
            }

            debug!(attempt, "slug collision, retrying");
        }

        warn!(
            "slug space exhausted after {} attempts",
            MAX_SLUG_ATTEMPTS
        );
        Err(SlugError::SpaceExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use surveyforge_domain::is_valid_slug;

    // ==================== Test Mocks ====================

    /// Store that reports a collision for the first `collisions` probes.
    struct CollidingStore {
        collisions: Mutex<usize>,
        probes: Mutex<usize>,
    }

    impl CollidingStore {
        fn new(collisions: usize) -> Self {
            Self {
                collisions: Mutex::new(collisions),
                probes: Mutex::new(0),
            }
        }

        fn probe_count(&self) -> usize {
            *self.probes.lock().unwrap()
        }
    }

    #[async_trait]
    impl SurveyStore for CollidingStore {
        async fn slug_exists(&self, _slug: &str) -> Result<bool, StoreError> {
            *self.probes.lock().unwrap() += 1;
            let mut remaining = self.collisions.lock().unwrap();
            if *remaining > 0 {
                *remaining -= 1;
                Ok(true)
            } else {
                Ok(false)
            }
        }
    }

    struct FailingStore;

    #[async_trait]
    impl SurveyStore for FailingStore {
        async fn slug_exists(&self, _slug: &str) -> Result<bool, StoreError> {
            Err(StoreError("connection reset".to_string()))
        }
    }

    // ==================== Tests ====================

    #[test]
    fn generated_slugs_are_well_formed() {
        for _ in 0..100 {
            assert!(is_valid_slug(&generate_slug()));
        }
    }

    #[tokio::test]
    async fn first_candidate_accepted_when_free() {
        let store = Arc::new(CollidingStore::new(0));
        let use_case = AssignSlugUseCase::new(store.clone());

        let slug = use_case.execute().await.unwrap();
        assert!(is_valid_slug(&slug));
        assert_eq!(store.probe_count(), 1);
    }

    #[tokio::test]
    async fn retries_through_collisions() {
        let store = Arc::new(CollidingStore::new(3));
        let use_case = AssignSlugUseCase::new(store.clone());

        let slug = use_case.execute().await.unwrap();
        assert!(is_valid_slug(&slug));
        assert_eq!(store.probe_count(), 4);
    }

    #[tokio::test]
    async fn exhaustion_after_bounded_attempts() {
        let store = Arc::new(CollidingStore::new(usize::MAX));
        let use_case = AssignSlugUseCase::new(store.clone());

        let err = use_case.execute().await.unwrap_err();
        assert!(matches!(err, SlugError::SpaceExhausted));
        assert_eq!(store.probe_count(), MAX_SLUG_ATTEMPTS);
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let use_case = AssignSlugUseCase::new(Arc::new(FailingStore));

        let err = use_case.execute().await.unwrap_err();
        assert!(matches!(err, SlugError::Store(_)));
    }
}
