//! # Observability
//!
//! Structured logging for the loader and the diagnostic binary. Library code
//! only emits `tracing` events; installing a subscriber is left to the
//! application.

pub mod logging;

pub use logging::init_logging;
