pub mod model;
pub mod service;

pub use model::{ModuleCount, PermissionSummary};
pub use service::RoleAggregator;
