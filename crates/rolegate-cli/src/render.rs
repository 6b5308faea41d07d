use anyhow::{Context, Result, bail};
use rolegate::{PermissionCatalog, PermissionSummary, SelectionEngine, can_delete, explain_block};
use rolegate_models::{
    DependentUsage, ModulePresentation, ModuleSelectionState, PermissionId, PermissionSet,
    PortalDescriptor, UsageCount,
};
use serde_json::{Value, json};

/// Parses `users.view,users.edit` into a permission set. Blank entries are ignored.
pub fn parse_permission_set(raw: &str) -> PermissionSet {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PermissionId::from)
        .collect()
}

/// Parses `3,0` into reference counts. Two entries form the primary/secondary
/// pair; any other number is read as plain references.
pub fn parse_counts(raw: &str) -> Result<DependentUsage> {
    let counts = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u64>()
                .with_context(|| format!("'{}' is not a non-negative count", s))
        })
        .collect::<Result<Vec<_>>>()?;

    match counts.as_slice() {
        [] => bail!("at least one count is required"),
        [primary, secondary] => Ok(DependentUsage::pair(*primary, *secondary)),
        _ => Ok(DependentUsage::new(
            counts
                .iter()
                .map(|count| UsageCount::new("reference", "references", *count))
                .collect(),
        )),
    }
}

pub fn render_modules(catalog: &PermissionCatalog, presentation: &[ModulePresentation]) -> String {
    let mut out = String::new();
    for module in catalog.list_modules() {
        let icon = presentation
            .iter()
            .find(|p| p.module_id == module.id)
            .map(|p| p.icon.as_str())
            .unwrap_or("-");
        out.push_str(&format!("{} [{}] ({})\n", module.label, module.id, icon));
        for permission in &module.permissions {
            out.push_str(&format!("  {:<20} {}\n", permission.id, permission.name));
        }
    }
    out
}

pub fn render_states(engine: &SelectionEngine<'_>, selected: &PermissionSet) -> String {
    engine
        .module_states(selected)
        .into_iter()
        .map(|(module, state)| format!("{:<12} {}\n", module.id, state))
        .collect()
}

pub fn render_summary(summary: &PermissionSummary, total: usize) -> String {
    let mut parts: Vec<String> = summary
        .shown
        .iter()
        .map(|entry| format!("{} {}", entry.module_label, entry.count))
        .collect();
    if let Some(more) = summary.overflow_label() {
        parts.push(more);
    }
    if parts.is_empty() {
        return format!("No permissions ({} selected)", total);
    }
    format!("{} ({} selected)", parts.join(", "), total)
}

pub fn render_portal(portal: &PortalDescriptor) -> String {
    format!("{} ({})", portal.label, portal.id)
}

pub fn render_can_delete(usage: &DependentUsage) -> String {
    explain_block(usage).unwrap_or_else(|| "Deletion allowed".to_string())
}

pub fn modules_json(catalog: &PermissionCatalog, presentation: &[ModulePresentation]) -> Value {
    json!({ "modules": catalog.list_modules(), "presentation": presentation })
}

pub fn module_state_json(module_id: &str, state: ModuleSelectionState) -> Value {
    json!({ "module": module_id, "state": state })
}

pub fn module_states_json(engine: &SelectionEngine<'_>, selected: &PermissionSet) -> Value {
    engine
        .module_states(selected)
        .into_iter()
        .map(|(module, state)| module_state_json(&module.id, state))
        .collect()
}

pub fn summary_json(summary: &PermissionSummary, total: usize) -> Value {
    json!({ "summary": summary, "totalSelected": total })
}

pub fn can_delete_json(usage: &DependentUsage) -> Value {
    json!({ "canDelete": can_delete(usage), "reason": explain_block(usage) })
}
