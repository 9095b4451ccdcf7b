//! Observability module.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the embedding application, which can use `init_tracing` for a
//! stderr logger driven by `Config::log_level`.

pub mod logging;

pub use logging::{env_filter, init_tracing};
