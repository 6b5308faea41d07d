use std::env;

/// Default number of modules listed before a "+N more" marker.
pub const DEFAULT_MAX_MODULES: usize = 3;

/// # Environment Variables
///
/// - `PERMISSION_SUMMARY_MAX_MODULES`: modules shown in a role summary (default: `3`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryConfig {
    pub max_modules: usize,
}

impl SummaryConfig {
    pub fn from_env() -> Self {
        Self::from_value(env::var("PERMISSION_SUMMARY_MAX_MODULES").ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Self {
        let max_modules = value
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_MAX_MODULES);
        Self { max_modules }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_modules: DEFAULT_MAX_MODULES,
        }
    }
}
