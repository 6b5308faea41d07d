//! Rolegate Observability
//!
//! Console logging for Rolegate binaries. The library crates only emit `tracing`
//! events; installing a subscriber is left to whoever runs them.
//!
//! # Examples
//!
//! ```no_run
//! use rolegate_config::LogConfig;
//! use rolegate_observability::init_logging;
//!
//! init_logging(&LogConfig::from_env()).expect("no subscriber installed yet");
//! tracing::info!("ready");
//! ```

pub mod basic_logging;

pub use basic_logging::{build_env_filter, init_logging};
