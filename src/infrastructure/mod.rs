//! Infrastructure layer for storage and telemetry.
//!
//! This layer implements interfaces defined by the domain layer and hosts
//! process-wide observability setup.
//!
//! # Modules
//!
//! - [`store`] - In-memory counter storage
//! - [`telemetry`] - Tracing subscriber and metric descriptions

pub mod store;
pub mod telemetry;
