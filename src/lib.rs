//! # Rolegate
//!
//! The role-based access-control core behind the administration console: the
//! permission catalog, the selection rules that keep a role's permissions in step
//! with its modules, role summaries, portal resolution and deletion guards.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── rolegate-core/           # CoreError, permission id constants
//! ├── rolegate-models/         # Permission, Module, Role, PortalAccess, DependentUsage
//! ├── rolegate-config/         # Environment-driven configuration
//! ├── rolegate-observability/  # tracing subscriber setup
//! └── rolegate-cli/            # Command line front end
//! src/modules/
//! ├── catalog/    # PermissionCatalog: module -> ordered permissions
//! ├── selection/  # SelectionEngine: toggles and tri-state module status
//! ├── summary/    # RoleAggregator: per-module counts and truncation
//! ├── access/     # Portal resolution, can_delete / explain_block
//! └── roles/      # RoleDraft: one edit session over a role
//! ```
//!
//! Everything here is synchronous and side-effect free apart from `tracing`
//! events. Loading roles, storing them and counting the records that reference
//! them belong to the caller.
//!
//! ## Example
//!
//! ```
//! use rolegate::{PermissionCatalog, RoleAggregator, SelectionEngine};
//! use rolegate_models::{ModuleSelectionState, PermissionSet};
//!
//! let catalog = PermissionCatalog::builtin();
//! let engine = SelectionEngine::new(&catalog);
//!
//! let selected = engine.toggle_module(&PermissionSet::new(), "reports", true).unwrap();
//! assert_eq!(
//!     engine.module_state(&selected, "reports").unwrap(),
//!     ModuleSelectionState::Checked
//! );
//!
//! let summary = RoleAggregator::new(&catalog).summarize(&selected, 3);
//! assert_eq!(summary.shown[0].module_label, "Reports");
//! ```

pub mod modules;

pub use modules::access::{can_delete, check_delete, explain_block, resolve_portal, resolve_portal_key};
pub use modules::catalog::{PermissionCatalog, builtin_presentation};
pub use modules::roles::RoleDraft;
pub use modules::selection::{SelectionEngine, toggle_permission};
pub use modules::summary::{ModuleCount, PermissionSummary, RoleAggregator};
