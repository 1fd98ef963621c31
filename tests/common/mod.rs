#![allow(dead_code)]

use std::sync::Arc;

use engagement_service::application::services::CounterService;
use engagement_service::infrastructure::store::InMemoryCounterStore;
use engagement_service::state::AppState;

/// Builds application state backed by fresh, empty in-memory stores.
pub fn create_test_state() -> AppState {
    AppState {
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
