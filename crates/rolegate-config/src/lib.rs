//! # Rolegate Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`summary`]: Permission summary truncation
//! - [`logging`]: Log level and output format
//!
//! # Example
//!
//! ```ignore
//! use rolegate_config::{LogConfig, SummaryConfig};
//!
//! let summary = SummaryConfig::from_env();
//! let logging = LogConfig::from_env();
//! ```

pub mod logging;
pub mod summary;

pub use logging::{LogConfig, LogFormat};
pub use summary::SummaryConfig;
