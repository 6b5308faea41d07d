//! Role, portal and role-form models.

use crate::ids::RoleId;
use crate::permissions::{PermissionId, PermissionSet};
use rolegate_core::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

/// Generate a slug from a name
/// Converts to lowercase, replaces spaces and hyphens with underscores,
/// and collapses runs of underscores
pub fn generate_slug(name: &str) -> String {
    let mut result = String::new();
    let mut prev_underscore = false;

    for c in name.trim().to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            result.push(c);
            prev_underscore = false;
        } else {
            if !prev_underscore && !result.is_empty() {
                result.push('_');
            }
            prev_underscore = true;
        }
    }

    result.trim_end_matches('_').to_string()
}

/// Application surface a role's users may enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PortalAccess {
    GodMode,
    Dashboard,
    ClientPortal,
}

impl PortalAccess {
    pub fn all() -> [PortalAccess; 3] {
        [Self::GodMode, Self::Dashboard, Self::ClientPortal]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GodMode => "godMode",
            Self::Dashboard => "dashboard",
            Self::ClientPortal => "clientPortal",
        }
    }
}

impl fmt::Display for PortalAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PortalAccess {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|portal| portal.as_str() == s)
            .ok_or_else(|| CoreError::invalid_portal(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortalDescriptor {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    /// Machine key. Fixed once the role exists.
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub permissions: PermissionSet,
    pub portal_access: PortalAccess,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Role {
    /// A fresh, active role with no permissions. The machine key is derived from
    /// `display_name`.
    pub fn new(display_name: impl Into<String>, portal_access: PortalAccess) -> Self {
        let display_name = display_name.into();
        let now = chrono::Utc::now();
        Self {
            id: RoleId::new(),
            name: generate_slug(&display_name),
            display_name,
            description: None,
            permissions: PermissionSet::new(),
            portal_access,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_permission(&self, id: &str) -> bool {
        self.permissions.contains(id)
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Name is required".into()));
    }
    Ok(())
}

/// Payload handed to the role repository when a draft is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RoleFormData {
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 100, message = "Name must not exceed 100 characters")
    )]
    pub name: String,
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: Option<String>,
    pub permissions: Vec<PermissionId>,
    pub is_active: bool,
}
