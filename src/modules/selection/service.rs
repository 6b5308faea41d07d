//! Permission selection for role drafts.
//!
//! Every operation takes the current set and returns the next one; nothing is
//! mutated in place, so a renderer holding the previous set never observes a
//! half-applied change.

use rolegate_core::CoreResult;
use rolegate_models::{Module, ModuleSelectionState, PermissionId, PermissionSet};
use tracing::{debug, instrument};

use crate::modules::catalog::PermissionCatalog;

/// Adds or removes a single permission. Ids are not checked against the catalog;
/// callers pass ids they got from it.
pub fn toggle_permission(current: &PermissionSet, permission_id: &str, checked: bool) -> PermissionSet {
    let mut next = current.clone();
    if checked {
        next.insert(PermissionId::from(permission_id));
    } else {
        next.remove(permission_id);
    }
    next
}

#[derive(Debug, Clone, Copy)]
pub struct SelectionEngine<'a> {
    catalog: &'a PermissionCatalog,
}

impl<'a> SelectionEngine<'a> {
    pub fn new(catalog: &'a PermissionCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a PermissionCatalog {
        self.catalog
    }

    pub fn toggle_permission(
        &self,
        current: &PermissionSet,
        permission_id: &str,
        checked: bool,
    ) -> PermissionSet {
        toggle_permission(current, permission_id, checked)
    }

    /// Selects or clears every permission of `module_id`, leaving permissions of
    /// other modules exactly as they were.
    #[instrument(skip(self, current), fields(selected = current.len()))]
    pub fn toggle_module(
        &self,
        current: &PermissionSet,
        module_id: &str,
        checked: bool,
    ) -> CoreResult<PermissionSet> {
        let module = self.catalog.module(module_id)?;
        let mut next = current.clone();

        if checked {
            next.extend(module.permission_ids().cloned());
        } else {
            for id in module.permission_ids() {
                next.remove(id);
            }
        }

        debug!(before = current.len(), after = next.len(), "Module toggled");
        Ok(next)
    }

    pub fn module_state(
        &self,
        current: &PermissionSet,
        module_id: &str,
    ) -> CoreResult<ModuleSelectionState> {
        let module = self.catalog.module(module_id)?;
        Ok(Self::classify(module, current))
    }

    /// State of every module, in catalog order.
    pub fn module_states(&self, current: &PermissionSet) -> Vec<(&'a Module, ModuleSelectionState)> {
        self.catalog
            .list_modules()
            .iter()
            .map(|module| (module, Self::classify(module, current)))
            .collect()
    }

    pub fn select_all(&self) -> PermissionSet {
        self.catalog.all_permission_ids()
    }

    pub fn clear_all(&self) -> PermissionSet {
        PermissionSet::new()
    }

    /// Drops ids the catalog does not know, e.g. permissions retired since a role
    /// was stored.
    pub fn retain_known(&self, current: &PermissionSet) -> PermissionSet {
        let next: PermissionSet = current
            .iter()
            .filter(|id| self.catalog.contains(id.as_str()))
            .cloned()
            .collect();

        if next.len() != current.len() {
            debug!(
                dropped = current.len() - next.len(),
                "Removed permissions missing from the catalog"
            );
        }
        next
    }

    fn classify(module: &Module, current: &PermissionSet) -> ModuleSelectionState {
        ModuleSelectionState::from_counts(module.selected_count(current), module.permissions.len())
    }
}
