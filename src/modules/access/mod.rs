pub mod service;

pub use service::{can_delete, check_delete, explain_block, resolve_portal, resolve_portal_key};
