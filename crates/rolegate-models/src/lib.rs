//! # Rolegate Models
//!
//! Data structures for the Rolegate RBAC core.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed role ids
//! - [`permissions`]: Permissions, modules, presentation metadata and the tri-state
//!   module selection
//! - [`roles`]: Roles, portals and the role form submission contract
//! - [`usage`]: Dependent-usage counts that gate deletion
//!
//! # Example
//!
//! ```ignore
//! use rolegate_models::{PortalAccess, RoleFormData, generate_slug};
//!
//! let portal: PortalAccess = "clientPortal".parse()?;
//! assert_eq!(generate_slug("Front Desk"), "front_desk");
//! ```

pub mod ids;
pub mod permissions;
pub mod roles;
pub mod usage;

pub use ids::RoleId;
pub use permissions::{
    Module, ModulePresentation, ModuleSelectionState, Permission, PermissionId, PermissionSet,
};
pub use roles::{PortalAccess, PortalDescriptor, Role, RoleFormData, generate_slug};
pub use usage::{DependentUsage, UsageCount};
