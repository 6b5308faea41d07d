pub mod builtin;
pub mod service;

pub use builtin::{builtin_modules, builtin_presentation};
pub use service::PermissionCatalog;
