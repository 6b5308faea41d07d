mod common;

use common::{set, stored_role, test_catalog};
use fake::Fake;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use rolegate::{PermissionCatalog, RoleAggregator, RoleDraft, can_delete, explain_block};
use rolegate_core::CoreError;
use rolegate_models::{DependentUsage, ModuleSelectionState, PermissionId, generate_slug};

#[test]
fn test_new_draft_submits_slugged_name() {
    let catalog = test_catalog();
    let mut draft = RoleDraft::new(&catalog);
    assert!(draft.is_new());
    assert!(draft.permissions().is_empty());

    draft.set_name("Front Desk").unwrap();
    draft.toggle_permission("users.view", true).unwrap();
    draft.toggle_module("reports", true).unwrap();

    let form = draft.submit().unwrap();
    assert_eq!(form.name, "front_desk");
    assert_eq!(form.description, None);
    assert!(form.is_active);
    assert_eq!(
        form.permissions,
        vec![
            PermissionId::from("reports.export"),
            PermissionId::from("reports.view"),
            PermissionId::from("users.view"),
        ]
    );
}

#[test]
fn test_random_drafts_submit() {
    let catalog = test_catalog();

    for _ in 0..20 {
        let name: String = Name().fake();
        let description: String = Sentence(3..8).fake();

        let mut draft = RoleDraft::new(&catalog);
        draft.set_name(name.clone()).unwrap();
        draft.set_description(Some(description.clone()));
        draft.toggle_module("users", true).unwrap();

        let form = draft.submit().unwrap();
        assert_eq!(form.name, generate_slug(&name));
        assert_eq!(form.description.as_deref(), Some(description.as_str()));
        assert_eq!(form.permissions.len(), 5);
    }
}

#[test]
fn test_submit_requires_name() {
    let catalog = test_catalog();

    let unnamed = RoleDraft::new(&catalog);
    assert_eq!(
        unnamed.submit().unwrap_err(),
        CoreError::Validation("Name is required".to_string())
    );

    let mut symbols_only = RoleDraft::new(&catalog);
    symbols_only.set_name("***").unwrap();
    assert!(matches!(symbols_only.submit(), Err(CoreError::Validation(_))));
}

#[test]
fn test_submit_rejects_long_description() {
    let catalog = test_catalog();
    let mut draft = RoleDraft::new(&catalog);
    draft.set_name("Auditor").unwrap();
    draft.set_description(Some("x".repeat(501)));

    assert_eq!(
        draft.submit().unwrap_err(),
        CoreError::Validation("Description must not exceed 500 characters".to_string())
    );
}

#[test]
fn test_blank_description_is_dropped() {
    let catalog = test_catalog();
    let mut draft = RoleDraft::new(&catalog);
    draft.set_name("Auditor").unwrap();
    draft.set_description(Some("   ".to_string()));

    assert_eq!(draft.submit().unwrap().description, None);
}

#[test]
fn test_editing_stored_role_keeps_name() {
    let catalog = test_catalog();
    let role = stored_role(&["users.view", "users.create", "legacy.audit"]);

    let mut draft = RoleDraft::from_role(&role, &catalog);
    assert_eq!(draft.role_id(), Some(role.id));
    assert_eq!(draft.permissions(), &set(&["users.view", "users.create"]));
    assert_eq!(
        draft.module_state("users").unwrap(),
        ModuleSelectionState::Indeterminate
    );

    assert_eq!(
        draft.set_name("Reception"),
        Err(CoreError::Validation("Role name cannot be changed".to_string()))
    );

    draft.toggle_module("users", true).unwrap();
    assert_eq!(draft.module_state("users").unwrap(), ModuleSelectionState::Checked);
    draft.set_active(false);

    let form = draft.submit().unwrap();
    assert_eq!(form.name, role.name);
    assert_eq!(form.description, role.description);
    assert!(!form.is_active);
    assert_eq!(form.permissions.len(), 5);
}

#[test]
fn test_cancel_leaves_stored_role_untouched() {
    let catalog = test_catalog();
    let role = stored_role(&["reports.view"]);

    let mut draft = RoleDraft::from_role(&role, &catalog);
    draft.toggle_module("reports", false).unwrap();
    draft.toggle_permission("settings.edit", true).unwrap();
    draft.cancel();

    assert_eq!(role.permissions, set(&["reports.view"]));
}

#[test]
fn test_unknown_module_in_draft() {
    let catalog = test_catalog();
    let mut draft = RoleDraft::new(&catalog);

    assert!(draft.toggle_module("payroll", true).unwrap_err().is_not_found());
    assert!(draft.module_state("payroll").is_err());
    assert!(draft.permissions().is_empty());
}

#[test]
fn test_submitted_permissions_are_catalog_ids() {
    let catalog = PermissionCatalog::builtin();
    let mut draft = RoleDraft::new(&catalog);
    draft.set_name("Operations").unwrap();
    for module in ["equipment", "bookings", "locations"] {
        draft.toggle_module(module, true).unwrap();
    }
    draft.toggle_permission("bookings.cancel", false).unwrap();

    let form = draft.submit().unwrap();
    assert!(form.permissions.iter().all(|id| catalog.contains(id.as_str())));
    assert_eq!(form.permissions.len(), 11);
}

#[test]
fn test_role_lifecycle_with_summary_and_delete_guard() {
    let catalog = test_catalog();
    let role = stored_role(&[]);
    assert!(role.permissions.is_empty());

    assert!(can_delete(&DependentUsage::for_role(0)));

    let assigned = DependentUsage::for_role(1);
    assert!(!can_delete(&assigned));
    assert!(explain_block(&assigned).unwrap().contains("1 user"));

    let mut draft = RoleDraft::from_role(&role, &catalog);
    draft.toggle_module("users", true).unwrap();
    draft.toggle_permission("settings.edit", true).unwrap();
    let form = draft.submit().unwrap();

    let saved: rolegate_models::PermissionSet = form.permissions.into_iter().collect();
    let summary = RoleAggregator::new(&catalog).summarize(&saved, 1);
    assert_eq!(summary.shown.len(), 1);
    assert_eq!(summary.shown[0].module_label, "Users");
    assert_eq!(summary.shown[0].count, 5);
    assert_eq!(summary.overflow_label().as_deref(), Some("+1 more"));
}

#[test]
fn test_draft_rejects_permissions_outside_catalog() {
    let catalog = PermissionCatalog::builtin();
    let mut draft = RoleDraft::new(&catalog);
    draft.set_name("Ops").unwrap();
    draft.toggle_permission("users.view", true).unwrap();

    assert_eq!(
        draft.toggle_permission("users.fly", true),
        Err(CoreError::not_found("permission", "users.fly"))
    );
    assert_eq!(
        draft.toggle_permission("users.fly", false),
        Err(CoreError::not_found("permission", "users.fly"))
    );
    assert_eq!(draft.permissions(), &set(&["users.view"]));

    let form = draft.submit().unwrap();
    assert_eq!(form.permissions, vec![PermissionId::from("users.view")]);
}

#[test]
fn test_name_length_limit() {
    let catalog = test_catalog();

    let mut at_limit = RoleDraft::new(&catalog);
    at_limit.set_name("a".repeat(100)).unwrap();
    assert_eq!(at_limit.submit().unwrap().name.len(), 100);

    let mut too_long = RoleDraft::new(&catalog);
    too_long.set_name("a".repeat(101)).unwrap();
    assert_eq!(
        too_long.submit().unwrap_err(),
        CoreError::Validation("Name must not exceed 100 characters".to_string())
    );
}
