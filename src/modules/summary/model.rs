use serde::Serialize;

/// Number of selected permissions in one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleCount {
    pub module_id: String,
    pub module_label: String,
    pub count: usize,
}

/// Truncated per-module counts for list views ("Users 3, Reports 1, +2 more").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PermissionSummary {
    pub shown: Vec<ModuleCount>,
    pub overflow_count: usize,
}

impl PermissionSummary {
    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow_count > 0).then(|| format!("+{} more", self.overflow_count))
    }
}
