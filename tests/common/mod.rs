use rolegate::PermissionCatalog;
use rolegate_models::{Module, Permission, PermissionId, PermissionSet, Role};

/// Catalog used by the selection scenarios: `users` (5 permissions, including
/// `roles.manage`), `reports` (2) and `settings` (1).
#[allow(dead_code)]
pub fn test_catalog() -> PermissionCatalog {
    let module = |id: &str, label: &str, permission_ids: &[&str]| {
        Module::new(
            id,
            label,
            permission_ids
                .iter()
                .map(|p| Permission::new(id, *p, *p))
                .collect(),
        )
    };

    PermissionCatalog::new(vec![
        module(
            "users",
            "Users",
            &[
                "users.view",
                "users.create",
                "users.edit",
                "users.delete",
                "roles.manage",
            ],
        ),
        module("reports", "Reports", &["reports.view", "reports.export"]),
        module("settings", "Settings", &["settings.edit"]),
    ])
    .expect("test catalog is a valid partition")
}

#[allow(dead_code)]
pub fn set(ids: &[&str]) -> PermissionSet {
    ids.iter().map(|id| PermissionId::from(*id)).collect()
}

/// Every subset of the catalog's permissions.
#[allow(dead_code)]
pub fn all_subsets(catalog: &PermissionCatalog) -> Vec<PermissionSet> {
    let ids: Vec<PermissionId> = catalog.all_permission_ids().into_iter().collect();
    (0u32..(1 << ids.len()))
        .map(|mask| {
            ids.iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, id)| id.clone())
                .collect()
        })
        .collect()
}

#[allow(dead_code)]
pub fn module_ids(catalog: &PermissionCatalog) -> Vec<String> {
    catalog.list_modules().iter().map(|m| m.id.clone()).collect()
}

#[allow(dead_code)]
pub fn stored_role(permissions: &[&str]) -> Role {
    let mut role = Role::new("Front Desk", rolegate_models::PortalAccess::Dashboard);
    role.description = Some("Checks clients in".to_string());
    role.permissions = set(permissions);
    role
}
