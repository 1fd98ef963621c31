use std::sync::Arc;

use crate::application::services::CounterService;
use crate::infrastructure::store::InMemoryCounterStore;

/// Shared application state injected into all handlers.
///
/// Holds the two counter services. Each service owns its own store; the
/// likes and views counters share nothing.
#[derive(Clone)]
pub struct AppState {
    pub likes_service: Arc<CounterService<InMemoryCounterStore>>,
    pub views_service: Arc<CounterService<InMemoryCounterStore>>,
}

impl AppState {
    /// Builds application state with two freshly created, empty counters.
    pub fn new() -> Self {
        Self {
            likes_service: Arc::new(CounterService::new(
                Arc::new(InMemoryCounterStore::new()),
                "likes",
            )),
            views_service: Arc::new(CounterService::new(
                Arc::new(InMemoryCounterStore::new()),
                "views",
            )),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
