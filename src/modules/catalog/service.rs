use std::collections::{HashMap, HashSet};

use rolegate_core::{CoreError, CoreResult};
use rolegate_models::{Module, Permission, PermissionSet};
use tracing::{debug, instrument};

use super::builtin::builtin_modules;

/// Read-only registry of every permission, partitioned into modules.
///
/// Module order is the order the modules were supplied in and is what every listing
/// and summary follows.
#[derive(Debug, Clone)]
pub struct PermissionCatalog {
    modules: Vec<Module>,
    module_index: HashMap<String, usize>,
    permission_index: HashMap<String, (usize, usize)>,
}

impl PermissionCatalog {
    /// Builds a catalog, rejecting data that does not partition permissions:
    /// duplicate or empty modules, a permission listed twice, or a permission whose
    /// `module` field names a different module than the one listing it.
    #[instrument(skip_all, fields(modules = modules.len()))]
    pub fn new(modules: Vec<Module>) -> CoreResult<Self> {
        let mut module_ids = HashSet::new();
        let mut permission_ids = HashSet::new();

        for module in &modules {
            if module.id.trim().is_empty() {
                return Err(CoreError::invalid_catalog("module id must not be empty"));
            }
            if !module_ids.insert(module.id.as_str()) {
                return Err(CoreError::invalid_catalog(format!(
                    "module '{}' is defined more than once",
                    module.id
                )));
            }
            if module.permissions.is_empty() {
                return Err(CoreError::invalid_catalog(format!(
                    "module '{}' has no permissions",
                    module.id
                )));
            }
            for permission in &module.permissions {
                if permission.module != module.id {
                    return Err(CoreError::invalid_catalog(format!(
                        "permission '{}' claims module '{}' but is listed under '{}'",
                        permission.id, permission.module, module.id
                    )));
                }
                if !permission_ids.insert(permission.id.as_str()) {
                    return Err(CoreError::invalid_catalog(format!(
                        "permission '{}' appears more than once",
                        permission.id
                    )));
                }
            }
        }

        let catalog = Self::index(modules);
        debug!(permissions = catalog.len(), "Permission catalog built");
        Ok(catalog)
    }

    /// The catalog shipped with the console.
    pub fn builtin() -> Self {
        Self::index(builtin_modules())
    }

    fn index(modules: Vec<Module>) -> Self {
        let mut module_index = HashMap::with_capacity(modules.len());
        let mut permission_index = HashMap::new();

        for (m, module) in modules.iter().enumerate() {
            module_index.insert(module.id.clone(), m);
            for (p, permission) in module.permissions.iter().enumerate() {
                permission_index.insert(permission.id.as_str().to_string(), (m, p));
            }
        }

        Self {
            modules,
            module_index,
            permission_index,
        }
    }

    pub fn list_modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn module(&self, module_id: &str) -> CoreResult<&Module> {
        self.module_index
            .get(module_id)
            .map(|&m| &self.modules[m])
            .ok_or_else(|| CoreError::not_found("module", module_id))
    }

    pub fn permissions_for(&self, module_id: &str) -> CoreResult<&[Permission]> {
        self.module(module_id).map(|module| module.permissions.as_slice())
    }

    pub fn module_of(&self, permission_id: &str) -> CoreResult<&Module> {
        self.permission_index
            .get(permission_id)
            .map(|&(m, _)| &self.modules[m])
            .ok_or_else(|| CoreError::not_found("permission", permission_id))
    }

    pub fn permission(&self, permission_id: &str) -> CoreResult<&Permission> {
        self.permission_index
            .get(permission_id)
            .map(|&(m, p)| &self.modules[m].permissions[p])
            .ok_or_else(|| CoreError::not_found("permission", permission_id))
    }

    pub fn contains(&self, permission_id: &str) -> bool {
        self.permission_index.contains_key(permission_id)
    }

    pub fn all_permission_ids(&self) -> PermissionSet {
        self.modules
            .iter()
            .flat_map(|module| module.permission_ids().cloned())
            .collect()
    }

    /// Total number of permissions.
    pub fn len(&self) -> usize {
        self.permission_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permission_index.is_empty()
    }
}
