//! # Rolegate Core
//!
//! Core types shared by every Rolegate crate:
//!
//! - [`errors`]: The error taxonomy returned by catalog lookups, portal resolution and
//!   role validation
//! - [`permissions`]: Permission and module id constants for the built-in catalog
//!
//! # Example
//!
//! ```ignore
//! use rolegate_core::{CoreError, permissions};
//!
//! let err = CoreError::not_found("module", "payroll");
//! assert_eq!(err.to_string(), "module not found: payroll");
//!
//! let id = permissions::USERS_VIEW;
//! ```

pub mod errors;
pub mod permissions;

pub use errors::{CoreError, CoreResult};
