//! The permission catalog and module icons the console ships with.

use rolegate_core::permissions::{self, modules};
use rolegate_models::{Module, ModulePresentation, Permission};

fn permission(module: &str, id: &str, name: &str, description: &str) -> Permission {
    Permission::new(module, id, name).with_description(description)
}

pub fn builtin_modules() -> Vec<Module> {
    vec![
        Module::new(
            modules::USERS,
            "Users",
            vec![
                permission(modules::USERS, permissions::USERS_VIEW, "View users", "List and open user accounts"),
                permission(modules::USERS, permissions::USERS_CREATE, "Create users", "Invite new users"),
                permission(modules::USERS, permissions::USERS_EDIT, "Edit users", "Change user details and roles"),
                permission(modules::USERS, permissions::USERS_DELETE, "Delete users", "Remove user accounts"),
                permission(modules::USERS, permissions::ROLES_MANAGE, "Manage roles", "Create, edit and delete roles"),
            ],
        ),
        Module::new(
            modules::EQUIPMENT,
            "Equipment",
            vec![
                permission(modules::EQUIPMENT, permissions::EQUIPMENT_VIEW, "View equipment", "Browse the equipment inventory"),
                permission(modules::EQUIPMENT, permissions::EQUIPMENT_CREATE, "Add equipment", "Register new equipment"),
                permission(modules::EQUIPMENT, permissions::EQUIPMENT_EDIT, "Edit equipment", "Update equipment details"),
                permission(modules::EQUIPMENT, permissions::EQUIPMENT_DELETE, "Delete equipment", "Retire equipment records"),
            ],
        ),
        Module::new(
            modules::LOCATIONS,
            "Locations",
            vec![
                permission(modules::LOCATIONS, permissions::LOCATIONS_VIEW, "View locations", "Browse sites and rooms"),
                permission(modules::LOCATIONS, permissions::LOCATIONS_CREATE, "Create locations", "Add sites and rooms"),
                permission(modules::LOCATIONS, permissions::LOCATIONS_EDIT, "Edit locations", "Update site details"),
                permission(modules::LOCATIONS, permissions::LOCATIONS_DELETE, "Delete locations", "Remove unused locations"),
            ],
        ),
        Module::new(
            modules::BOOKINGS,
            "Bookings",
            vec![
                permission(modules::BOOKINGS, permissions::BOOKINGS_VIEW, "View bookings", "See the booking calendar"),
                permission(modules::BOOKINGS, permissions::BOOKINGS_CREATE, "Create bookings", "Book equipment or rooms"),
                permission(modules::BOOKINGS, permissions::BOOKINGS_EDIT, "Edit bookings", "Reschedule existing bookings"),
                permission(modules::BOOKINGS, permissions::BOOKINGS_CANCEL, "Cancel bookings", "Cancel bookings for any client"),
            ],
        ),
        Module::new(
            modules::CLIENTS,
            "Clients",
            vec![
                permission(modules::CLIENTS, permissions::CLIENTS_VIEW, "View clients", "List client accounts"),
                permission(modules::CLIENTS, permissions::CLIENTS_CREATE, "Create clients", "Onboard new clients"),
                permission(modules::CLIENTS, permissions::CLIENTS_EDIT, "Edit clients", "Update client details"),
                permission(modules::CLIENTS, permissions::CLIENTS_DELETE, "Delete clients", "Close client accounts"),
            ],
        ),
        Module::new(
            modules::REPORTS,
            "Reports",
            vec![
                permission(modules::REPORTS, permissions::REPORTS_VIEW, "View reports", "Open usage and revenue reports"),
                permission(modules::REPORTS, permissions::REPORTS_EXPORT, "Export reports", "Download reports as CSV"),
            ],
        ),
        Module::new(
            modules::SETTINGS,
            "Settings",
            vec![
                permission(modules::SETTINGS, permissions::SETTINGS_VIEW, "View settings", "Read console settings"),
                permission(modules::SETTINGS, permissions::SETTINGS_EDIT, "Edit settings", "Change console settings"),
            ],
        ),
    ]
}

/// Icons for the built-in modules, in catalog order. Labels stay on [`Module`].
pub fn builtin_presentation() -> Vec<ModulePresentation> {
    [
        (modules::USERS, "users"),
        (modules::EQUIPMENT, "wrench"),
        (modules::LOCATIONS, "map-pin"),
        (modules::BOOKINGS, "calendar"),
        (modules::CLIENTS, "briefcase"),
        (modules::REPORTS, "bar-chart"),
        (modules::SETTINGS, "settings"),
    ]
    .into_iter()
    .map(|(module_id, icon)| ModulePresentation {
        module_id: module_id.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}
