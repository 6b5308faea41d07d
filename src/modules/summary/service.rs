use rolegate_models::PermissionSet;

use super::model::{ModuleCount, PermissionSummary};
use crate::modules::catalog::PermissionCatalog;

/// Summaries of a role's permission set for tables and detail views.
#[derive(Debug, Clone, Copy)]
pub struct RoleAggregator<'a> {
    catalog: &'a PermissionCatalog,
}

impl<'a> RoleAggregator<'a> {
    pub fn new(catalog: &'a PermissionCatalog) -> Self {
        Self { catalog }
    }

    /// Selected-permission count per module, in catalog order. Modules with
    /// nothing selected are left out.
    pub fn counts_by_module(&self, permissions: &PermissionSet) -> Vec<ModuleCount> {
        self.catalog
            .list_modules()
            .iter()
            .filter_map(|module| {
                let count = module.selected_count(permissions);
                (count > 0).then(|| ModuleCount {
                    module_id: module.id.clone(),
                    module_label: module.label.clone(),
                    count,
                })
            })
            .collect()
    }

    pub fn summarize(&self, permissions: &PermissionSet, max_modules: usize) -> PermissionSummary {
        let mut shown = self.counts_by_module(permissions);
        let overflow_count = shown.len().saturating_sub(max_modules);
        shown.truncate(max_modules);

        PermissionSummary {
            shown,
            overflow_count,
        }
    }

    /// Size of the set, including ids the catalog no longer knows.
    pub fn total_selected(&self, permissions: &PermissionSet) -> usize {
        permissions.len()
    }
}
