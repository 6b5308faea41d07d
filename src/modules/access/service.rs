//! Portal resolution and deletion guards.
//!
//! One guard covers every resource kind: a role blocked by assigned users and a
//! location blocked by bookings or equipment differ only in the counts passed in.

use rolegate_core::{CoreError, CoreResult};
use rolegate_models::{DependentUsage, PortalAccess, PortalDescriptor, UsageCount};
use tracing::{instrument, warn};

/// Portal a role's users land in.
pub fn resolve_portal(portal_access: PortalAccess) -> PortalDescriptor {
    match portal_access {
        PortalAccess::GodMode => PortalDescriptor {
            id: "god-mode",
            label: "God Mode",
        },
        PortalAccess::Dashboard => PortalDescriptor {
            id: "dashboard",
            label: "Staff Dashboard",
        },
        PortalAccess::ClientPortal => PortalDescriptor {
            id: "client-portal",
            label: "Client Portal",
        },
    }
}

/// Resolves a stored portal key such as `"clientPortal"`. Keys outside the portal
/// table fail with [`CoreError::InvalidPortal`].
pub fn resolve_portal_key(key: &str) -> CoreResult<PortalDescriptor> {
    key.parse::<PortalAccess>().map(resolve_portal)
}

/// True iff nothing references the resource any more.
pub fn can_delete(usage: &DependentUsage) -> bool {
    usage.counts.iter().all(|c| c.count == 0)
}

/// User-facing reason a deletion is blocked, or `None` when it is allowed.
///
/// `"blocked: 3 users still assigned"`,
/// `"blocked: 2 bookings and 1 equipment item still assigned"`.
pub fn explain_block(usage: &DependentUsage) -> Option<String> {
    let parts: Vec<String> = usage.blocking_counts().map(UsageCount::describe).collect();
    if parts.is_empty() {
        return None;
    }
    Some(format!("blocked: {} still assigned", join_readable(&parts)))
}

/// [`can_delete`] as a `Result`, carrying the explanation in a validation error.
#[instrument(skip_all, fields(references = usage.total()))]
pub fn check_delete(usage: &DependentUsage) -> CoreResult<()> {
    match explain_block(usage) {
        None => Ok(()),
        Some(reason) => {
            warn!(%reason, "Deletion blocked by dependent records");
            Err(CoreError::validation(reason))
        }
    }
}

fn join_readable(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
