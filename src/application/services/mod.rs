//! Business logic services for the application layer.

pub mod counter_service;

pub use counter_service::CounterService;
