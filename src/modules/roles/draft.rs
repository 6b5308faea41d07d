//! In-memory role edit session.
//!
//! A draft starts empty (new role) or as a copy of a stored role, is changed only
//! through [`SelectionEngine`] transitions, and ends either in [`RoleDraft::submit`],
//! which hands a validated [`RoleFormData`] to the role repository, or in
//! [`RoleDraft::cancel`], which drops it.

use rolegate_core::{CoreError, CoreResult};
use rolegate_models::{ModuleSelectionState, PermissionSet, Role, RoleFormData, RoleId, generate_slug};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::modules::catalog::PermissionCatalog;
use crate::modules::selection::SelectionEngine;

#[derive(Debug, Clone)]
pub struct RoleDraft<'a> {
    engine: SelectionEngine<'a>,
    role_id: Option<RoleId>,
    name: String,
    description: Option<String>,
    is_active: bool,
    permissions: PermissionSet,
}

impl<'a> RoleDraft<'a> {
    /// Draft for a role that does not exist yet: no name, no permissions, active.
    pub fn new(catalog: &'a PermissionCatalog) -> Self {
        Self {
            engine: SelectionEngine::new(catalog),
            role_id: None,
            name: String::new(),
            description: None,
            is_active: true,
            permissions: PermissionSet::new(),
        }
    }

    /// Draft copied from a stored role. Permissions the catalog no longer lists
    /// are dropped.
    pub fn from_role(role: &Role, catalog: &'a PermissionCatalog) -> Self {
        let engine = SelectionEngine::new(catalog);
        Self {
            permissions: engine.retain_known(&role.permissions),
            engine,
            role_id: Some(role.id),
            name: role.name.clone(),
            description: role.description.clone(),
            is_active: role.is_active,
        }
    }

    pub fn role_id(&self) -> Option<RoleId> {
        self.role_id
    }

    pub fn is_new(&self) -> bool {
        self.role_id.is_none()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    /// Sets the name of a new role. The name is the role's machine key, so a
    /// stored role's name cannot change.
    pub fn set_name(&mut self, name: impl Into<String>) -> CoreResult<()> {
        if !self.is_new() {
            return Err(CoreError::validation("Role name cannot be changed"));
        }
        self.name = name.into();
        Ok(())
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description.filter(|d| !d.trim().is_empty());
    }

    pub fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    /// Only ids listed in the catalog can be toggled, so a submitted draft never
    /// carries permissions the catalog does not know.
    pub fn toggle_permission(&mut self, permission_id: &str, checked: bool) -> CoreResult<()> {
        if !self.engine.catalog().contains(permission_id) {
            return Err(CoreError::not_found("permission", permission_id));
        }
        self.permissions = self
            .engine
            .toggle_permission(&self.permissions, permission_id, checked);
        debug!(permission_id, checked, "Permission toggled");
        Ok(())
    }

    pub fn toggle_module(&mut self, module_id: &str, checked: bool) -> CoreResult<()> {
        self.permissions = self
            .engine
            .toggle_module(&self.permissions, module_id, checked)?;
        Ok(())
    }

    pub fn module_state(&self, module_id: &str) -> CoreResult<ModuleSelectionState> {
        self.engine.module_state(&self.permissions, module_id)
    }

    /// Validates the draft and turns it into the repository payload. New role names
    /// are normalised into a machine key first.
    #[instrument(skip(self), fields(role_id = ?self.role_id))]
    pub fn submit(self) -> CoreResult<RoleFormData> {
        let name = if self.is_new() {
            generate_slug(&self.name)
        } else {
            self.name
        };

        let form = RoleFormData {
            name,
            description: self.description,
            permissions: self.permissions.into_iter().collect(),
            is_active: self.is_active,
        };
        form.validate()?;

        info!(
            name = %form.name,
            permissions = form.permissions.len(),
            "Role draft submitted"
        );
        Ok(form)
    }

    /// Discards the draft.
    pub fn cancel(self) {
        debug!(role_id = ?self.role_id, "Role draft discarded");
    }
}
