//! Counter storage implementations.
//!
//! Currently a single implementation exists:
//! - [`InMemoryCounterStore`] - process-memory map, lost on restart

mod memory;

pub use memory::InMemoryCounterStore;
