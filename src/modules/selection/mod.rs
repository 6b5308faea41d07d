pub mod service;

pub use service::{SelectionEngine, toggle_permission};
