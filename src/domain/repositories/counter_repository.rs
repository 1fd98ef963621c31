//! Repository trait for per-slug counter storage.

use async_trait::async_trait;

use crate::error::AppError;

/// Storage interface for a single counter (likes or views).
///
/// A counter maps slugs to non-negative counts. A slug without an entry has
/// count 0; implementations never need to materialize zero entries. Slugs are
/// compared by exact string equality; any normalization (such as trimming)
/// happens at the HTTP boundary before the repository is called.
///
/// # Concurrency
///
/// Implementations must serialize the read-modify-write sequence inside
/// [`increment`](CounterRepository::increment) so that concurrent increments
/// of the same slug are never lost, and reads must never observe a torn
/// value.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::InMemoryCounterStore`] - process-memory map
/// - Test mocks available with `cfg(test)`
///
/// # Errors
///
/// The in-memory implementation is infallible; the `Result` returns exist so
/// a persistent backing store (file, key-value store, database row) can be
/// substituted behind this trait without changing the HTTP contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterRepository: Send + Sync {
    /// Returns the current count for `slug`, or 0 if the slug has never been
    /// incremented.
    async fn get(&self, slug: &str) -> Result<u64, AppError>;

    /// Atomically adds 1 to the count for `slug` and returns the new value.
    async fn increment(&self, slug: &str) -> Result<u64, AppError>;

    /// Number of slugs with a stored entry.
    async fn tracked_slugs(&self) -> Result<usize, AppError>;

    /// Removes every entry, returning the counter to its initial state.
    ///
    /// Used by tests and operational tooling; the request path never calls
    /// this.
    async fn reset(&self) -> Result<(), AppError>;
}
