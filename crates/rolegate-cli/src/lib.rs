//! Rolegate CLI library
//!
//! Argument parsing helpers and report rendering shared by the `rolegate-cli`
//! binary.

pub mod render;

pub use render::{
    can_delete_json, module_state_json, module_states_json, modules_json, parse_counts,
    parse_permission_set, render_can_delete, render_modules, render_portal, render_states,
    render_summary, summary_json,
};
