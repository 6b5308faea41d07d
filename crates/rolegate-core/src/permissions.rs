//! Permission and module id constants for the built-in Rolegate catalog.
//!
//! Permission ids follow the `module.action` shape. Use these constants instead of
//! string literals so renames stay in one place.
//!
//! # Example
//!
//! ```ignore
//! use rolegate_core::permissions;
//!
//! let users = catalog.permissions_for(permissions::modules::USERS)?;
//! assert!(users.iter().any(|p| p.id == permissions::USERS_VIEW));
//! ```

/// Module ids, in the order the built-in catalog lists them.
pub mod modules {
    pub const USERS: &str = "users";
    pub const EQUIPMENT: &str = "equipment";
    pub const LOCATIONS: &str = "locations";
    pub const BOOKINGS: &str = "bookings";
    pub const CLIENTS: &str = "clients";
    pub const REPORTS: &str = "reports";
    pub const SETTINGS: &str = "settings";

    pub fn all() -> Vec<&'static str> {
        vec![USERS, EQUIPMENT, LOCATIONS, BOOKINGS, CLIENTS, REPORTS, SETTINGS]
    }
}

// =============================================================================
// Users permissions
// =============================================================================

/// Permission to view users
pub const USERS_VIEW: &str = "users.view";
/// Permission to create users
pub const USERS_CREATE: &str = "users.create";
/// Permission to edit users
pub const USERS_EDIT: &str = "users.edit";
/// Permission to delete users
pub const USERS_DELETE: &str = "users.delete";
/// Permission to manage roles. Listed under the users module.
pub const ROLES_MANAGE: &str = "roles.manage";

// =============================================================================
// Equipment permissions
// =============================================================================

pub const EQUIPMENT_VIEW: &str = "equipment.view";
pub const EQUIPMENT_CREATE: &str = "equipment.create";
pub const EQUIPMENT_EDIT: &str = "equipment.edit";
pub const EQUIPMENT_DELETE: &str = "equipment.delete";

// =============================================================================
// Locations permissions
// =============================================================================

pub const LOCATIONS_VIEW: &str = "locations.view";
pub const LOCATIONS_CREATE: &str = "locations.create";
pub const LOCATIONS_EDIT: &str = "locations.edit";
pub const LOCATIONS_DELETE: &str = "locations.delete";

// =============================================================================
// Bookings permissions
// =============================================================================

pub const BOOKINGS_VIEW: &str = "bookings.view";
pub const BOOKINGS_CREATE: &str = "bookings.create";
pub const BOOKINGS_EDIT: &str = "bookings.edit";
/// Permission to cancel bookings on behalf of a client
pub const BOOKINGS_CANCEL: &str = "bookings.cancel";

// =============================================================================
// Clients permissions
// =============================================================================

pub const CLIENTS_VIEW: &str = "clients.view";
pub const CLIENTS_CREATE: &str = "clients.create";
pub const CLIENTS_EDIT: &str = "clients.edit";
pub const CLIENTS_DELETE: &str = "clients.delete";

// =============================================================================
// Reports permissions
// =============================================================================

/// Permission to view reports
pub const REPORTS_VIEW: &str = "reports.view";
/// Permission to export reports
pub const REPORTS_EXPORT: &str = "reports.export";

// =============================================================================
// Settings permissions
// =============================================================================

/// Permission to view settings
pub const SETTINGS_VIEW: &str = "settings.view";
/// Permission to edit settings
pub const SETTINGS_EDIT: &str = "settings.edit";
