mod common;

use common::{all_subsets, module_ids, set, test_catalog};
use rolegate::{SelectionEngine, toggle_permission};
use rolegate_core::CoreError;
use rolegate_models::{ModuleSelectionState, PermissionSet};

#[test]
fn test_empty_set_is_unchecked_everywhere() {
    let catalog = test_catalog();
    let engine = SelectionEngine::new(&catalog);

    for module_id in module_ids(&catalog) {
        assert_eq!(
            engine.module_state(&PermissionSet::new(), &module_id).unwrap(),
            ModuleSelectionState::Unchecked
        );
    }
}

#[test]
fn test_full_module_is_checked() {
    let catalog = test_catalog();
    let engine = SelectionEngine::new(&catalog);

    for module in catalog.list_modules() {
        let full: PermissionSet = module.permission_ids().cloned().collect();
        assert_eq!(
            engine.module_state(&full, &module.id).unwrap(),
            ModuleSelectionState::Checked
        );
    }
}

#[test]
fn test_users_module_scenario() {
    let catalog = test_catalog();
    let engine = SelectionEngine::new(&catalog);

    let start = set(&["users.view", "users.create"]);
    assert_eq!(
        engine.module_state(&start, "users").unwrap(),
        ModuleSelectionState::Indeterminate
    );

    let all = engine.toggle_module(&start, "users", true).unwrap();
    assert_eq!(
        all,
        set(&[
            "users.view",
            "users.create",
            "users.edit",
            "users.delete",
            "roles.manage",
        ])
    );
    assert_eq!(
        engine.module_state(&all, "users").unwrap(),
        ModuleSelectionState::Checked
    );

    let none = engine.toggle_module(&all, "users", false).unwrap();
    assert!(none.is_empty());
    assert_eq!(
        engine.module_state(&none, "users").unwrap(),
        ModuleSelectionState::Unchecked
    );
}

#[test]
fn test_module_toggle_forces_state_for_every_subset() {
    let catalog = test_catalog();
    let engine = SelectionEngine::new(&catalog);

    for current in all_subsets(&catalog) {
        for module_id in module_ids(&catalog) {
            let on = engine.toggle_module(&current, &module_id, true).unwrap();
            assert_eq!(
                engine.module_state(&on, &module_id).unwrap(),
                ModuleSelectionState::Checked
            );

            let off = engine.toggle_module(&current, &module_id, false).unwrap();
            assert_eq!(
                engine.module_state(&off, &module_id).unwrap(),
                ModuleSelectionState::Unchecked
            );
        }
    }
}

#[test]
fn test_module_toggle_preserves_other_modules() {
    let catalog = test_catalog();
    let engine = SelectionEngine::new(&catalog);
    let every_id = catalog.all_permission_ids();

    for current in all_subsets(&catalog) {
        for module in catalog.list_modules() {
            for checked in [true, false] {
                let next = engine.toggle_module(&current, &module.id, checked).unwrap();
                for id in every_id.iter().filter(|id| catalog.module_of(id.as_str()).unwrap().id != module.id) {
                    assert_eq!(current.contains(id), next.contains(id), "{} changed", id);
                }
            }
        }
    }
}

#[test]
fn test_module_toggle_keeps_ids_outside_catalog() {
    let catalog = test_catalog();
    let engine = SelectionEngine::new(&catalog);

    let current = set(&["legacy.audit", "reports.view"]);
    let next = engine.toggle_module(&current, "reports", false).unwrap();
    assert_eq!(next, set(&["legacy.audit"]));
}

#[test]
fn test_state_is_exhaustive_and_matches_counts() {
    let catalog = test_catalog();
    let engine = SelectionEngine::new(&catalog);

    for current in all_subsets(&catalog) {
        for module in catalog.list_modules() {
            let selected = module.selected_count(&current);
            let expected = if selected == module.permissions.len() {
                ModuleSelectionState::Checked
            } else if selected == 0 {
                ModuleSelectionState::Unchecked
            } else {
                ModuleSelectionState::Indeterminate
            };
            assert_eq!(engine.module_state(&current, &module.id).unwrap(), expected);
        }
    }
}

#[test]
fn test_toggle_permission_is_idempotent() {
    let catalog = test_catalog();

    for current in all_subsets(&catalog).into_iter().step_by(7) {
        for checked in [true, false] {
            let once = toggle_permission(&current, "users.edit", checked);
            let twice = toggle_permission(&once, "users.edit", checked);
            assert_eq!(once, twice);
            assert_eq!(once.contains("users.edit"), checked);
        }
    }
}

#[test]
fn test_toggle_permission_leaves_input_untouched() {
    let current = set(&["users.view"]);
    let next = toggle_permission(&current, "users.edit", true);

    assert_eq!(current, set(&["users.view"]));
    assert_eq!(next, set(&["users.view", "users.edit"]));
}

#[test]
fn test_unknown_module_is_not_found() {
    let catalog = test_catalog();
    let engine = SelectionEngine::new(&catalog);

    assert_eq!(
        engine.toggle_module(&PermissionSet::new(), "payroll", true).unwrap_err(),
        CoreError::not_found("module", "payroll")
    );
    assert!(engine.module_state(&PermissionSet::new(), "payroll").unwrap_err().is_not_found());
}

#[test]
fn test_module_states_follow_catalog_order() {
    let catalog = test_catalog();
    let engine = SelectionEngine::new(&catalog);

    let states: Vec<_> = engine
        .module_states(&set(&["users.view", "reports.view", "reports.export"]))
        .into_iter()
        .map(|(module, state)| (module.id.as_str(), state))
        .collect();

    assert_eq!(
        states,
        vec![
            ("users", ModuleSelectionState::Indeterminate),
            ("reports", ModuleSelectionState::Checked),
            ("settings", ModuleSelectionState::Unchecked),
        ]
    );
}

#[test]
fn test_select_all_clear_all_and_retain_known() {
    let catalog = test_catalog();
    let engine = SelectionEngine::new(&catalog);

    let all = engine.select_all();
    assert_eq!(all.len(), catalog.len());
    assert!(engine.module_states(&all).iter().all(|(_, s)| *s == ModuleSelectionState::Checked));
    assert!(engine.clear_all().is_empty());

    let cleaned = engine.retain_known(&set(&["users.view", "legacy.audit"]));
    assert_eq!(cleaned, set(&["users.view"]));
}
