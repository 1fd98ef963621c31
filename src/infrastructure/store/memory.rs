//! In-memory counter storage.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::repositories::CounterRepository;
use crate::error::AppError;

/// Process-memory implementation of [`CounterRepository`].
///
/// Counts are held in a `HashMap` guarded by an `RwLock`: reads take the
/// shared lock and may run concurrently, while an increment holds the
/// exclusive lock across its whole read-add-store sequence, so concurrent
/// increments of the same slug are linearized and none are lost.
///
/// The lock is never held across an await point.
///
/// State lives for the lifetime of the process and is lost on restart; there
/// is no eviction, expiry, or capacity bound.
pub struct InMemoryCounterStore {
    counts: RwLock<HashMap<String, u64>>,
}

impl InMemoryCounterStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            counts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCounterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CounterRepository for InMemoryCounterStore {
    async fn get(&self, slug: &str) -> Result<u64, AppError> {
        let counts = self.counts.read().expect("counter lock poisoned");

        Ok(counts.get(slug).copied().unwrap_or(0))
    }

    async fn increment(&self, slug: &str) -> Result<u64, AppError> {
        let mut counts = self.counts.write().expect("counter lock poisoned");

        let count = counts.entry(slug.to_owned()).or_insert(0);
        // Saturating keeps the count valid even at the numeric ceiling.
        *count = count.saturating_add(1);

        Ok(*count)
    }

    async fn tracked_slugs(&self) -> Result<usize, AppError> {
        let counts = self.counts.read().expect("counter lock poisoned");

        Ok(counts.len())
    }

    async fn reset(&self) -> Result<(), AppError> {
        let mut counts = self.counts.write().expect("counter lock poisoned");

        counts.clear();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unseen_slug_reads_zero() {
        let store = InMemoryCounterStore::new();

        assert_eq!(store.get("never-seen").await.unwrap(), 0);
        assert_eq!(store.tracked_slugs().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_increment_returns_new_value() {
        let store = InMemoryCounterStore::new();

        assert_eq!(store.increment("post").await.unwrap(), 1);
        assert_eq!(store.increment("post").await.unwrap(), 2);
        assert_eq!(store.get("post").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_slugs_are_independent() {
        let store = InMemoryCounterStore::new();

        store.increment("first").await.unwrap();
        store.increment("first").await.unwrap();
        store.increment("second").await.unwrap();

        assert_eq!(store.get("first").await.unwrap(), 2);
        assert_eq!(store.get("second").await.unwrap(), 1);
        assert_eq!(store.get("third").await.unwrap(), 0);
        assert_eq!(store.tracked_slugs().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_get_does_not_create_entries() {
        let store = InMemoryCounterStore::new();

        store.get("phantom").await.unwrap();

        assert_eq!(store.tracked_slugs().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_keys_are_exact_strings() {
        let store = InMemoryCounterStore::new();

        store.increment("spaced-slug").await.unwrap();

        // No normalization happens at the store level.
        assert_eq!(store.get(" spaced-slug ").await.unwrap(), 0);
        assert_eq!(store.get("Spaced-Slug").await.unwrap(), 0);
        assert_eq!(store.get("spaced-slug").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_reset_clears_all_entries() {
        let store = InMemoryCounterStore::new();

        store.increment("one").await.unwrap();
        store.increment("two").await.unwrap();

        store.reset().await.unwrap();

        assert_eq!(store.get("one").await.unwrap(), 0);
        assert_eq!(store.get("two").await.unwrap(), 0);
        assert_eq!(store.tracked_slugs().await.unwrap(), 0);

        // The store keeps working after a reset.
        assert_eq!(store.increment("one").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_increment_saturates_at_ceiling() {
        let store = InMemoryCounterStore::new();
        store
            .counts
            .write()
            .unwrap()
            .insert("maxed".to_owned(), u64::MAX);

        assert_eq!(store.increment("maxed").await.unwrap(), u64::MAX);
    }
}
