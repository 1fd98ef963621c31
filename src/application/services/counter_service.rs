//! Per-slug counter service.

use std::sync::Arc;

use metrics::counter;
use tracing::debug;

use crate::domain::repositories::CounterRepository;
use crate::error::AppError;

/// Service for reading and incrementing a single engagement counter.
///
/// The likes and views counters are two independent instances of this type,
/// each owning its own repository; nothing is shared between them. The
/// service is deliberately thin: slug extraction and validation happen at
/// the HTTP boundary, and storage semantics live in the repository.
pub struct CounterService<R: CounterRepository> {
    repository: Arc<R>,
    /// Counter name used in logs and metric labels (`"likes"` / `"views"`).
    name: &'static str,
}

impl<R: CounterRepository> CounterService<R> {
    /// Creates a new counter service over the given repository.
    pub fn new(repository: Arc<R>, name: &'static str) -> Self {
        Self { repository, name }
    }

    /// Returns the counter name (`"likes"` or `"views"`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the current count for `slug` without mutating anything.
    ///
    /// A slug that has never been incremented reads as 0.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails. The
    /// in-memory store never does.
    pub async fn current(&self, slug: &str) -> Result<u64, AppError> {
        let count = self.repository.get(slug).await?;

        counter!("engagement_reads_total", "counter" => self.name).increment(1);

        Ok(count)
    }

    /// Adds exactly 1 to the count for `slug` and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    pub async fn increment(&self, slug: &str) -> Result<u64, AppError> {
        let count = self.repository.increment(slug).await?;

        counter!("engagement_increments_total", "counter" => self.name).increment(1);
        debug!(counter = self.name, slug, count, "Counter incremented");

        Ok(count)
    }

    /// Number of slugs this counter currently tracks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    pub async fn tracked_slugs(&self) -> Result<usize, AppError> {
        self.repository.tracked_slugs().await
    }

    /// Clears every entry, returning the counter to its initial state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    pub async fn reset(&self) -> Result<(), AppError> {
        self.repository.reset().await?;

        debug!(counter = self.name, "Counter reset");

        Ok(())
    }
}
