//! tarifas-core: shared infrastructure for the tarifas services
//!
//! Holds what every binary in the workspace needs before it can do real
//! work: database settings read once from the environment, and tracing
//! initialization.

pub mod config;
pub mod tracing_setup;

pub use config::{ConfigError, DatabaseConfig};
pub use tracing_setup::{init_tracing, TracingConfig};
