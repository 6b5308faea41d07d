//! Permission and module models.
//!
//! A [`Module`] groups an ordered, non-empty list of [`Permission`]s. Icons and other
//! display hints live in [`ModulePresentation`] so the catalog itself stays plain data.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

/// Identifier of a single permission, shaped `module.action` (e.g. `users.view`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionId(String);

impl PermissionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before the first `.`, or the whole id when there is none.
    pub fn module_key(&self) -> &str {
        self.0.split_once('.').map_or(self.0.as_str(), |(m, _)| m)
    }

    /// The part after the first `.`, empty when there is none.
    pub fn action(&self) -> &str {
        self.0.split_once('.').map_or("", |(_, a)| a)
    }
}

impl fmt::Display for PermissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl Borrow<str> for PermissionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PermissionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PermissionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for PermissionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PermissionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A role's selected permissions. Ordered so that output built from it is stable.
pub type PermissionSet = BTreeSet<PermissionId>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub id: PermissionId,
    pub name: String,
    /// Id of the owning [`Module`].
    pub module: String,
    pub action: String,
    pub description: Option<String>,
}

impl Permission {
    /// Builds a permission owned by `module`. The action is taken from the id.
    pub fn new(module: impl Into<String>, id: impl Into<PermissionId>, name: impl Into<String>) -> Self {
        let id = id.into();
        let action = id.action().to_string();
        Self {
            id,
            name: name.into(),
            module: module.into(),
            action,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub label: String,
    pub permissions: Vec<Permission>,
}

impl Module {
    pub fn new(id: impl Into<String>, label: impl Into<String>, permissions: Vec<Permission>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            permissions,
        }
    }

    pub fn permission_ids(&self) -> impl Iterator<Item = &PermissionId> {
        self.permissions.iter().map(|p| &p.id)
    }

    /// Number of this module's permissions present in `set`.
    pub fn selected_count(&self, set: &PermissionSet) -> usize {
        self.permission_ids().filter(|id| set.contains(*id)).count()
    }
}

/// Display hints for a module, handed to renderers alongside the catalog. The
/// human label is [`Module::label`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePresentation {
    pub module_id: String,
    pub icon: String,
}

/// Tri-state classification of a module checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleSelectionState {
    Checked,
    Unchecked,
    Indeterminate,
}

impl ModuleSelectionState {
    /// Classifies `selected` out of `total` permissions. `total` must be at least 1.
    pub fn from_counts(selected: usize, total: usize) -> Self {
        debug_assert!(total > 0, "modules always carry at least one permission");
        if selected == 0 {
            Self::Unchecked
        } else if selected >= total {
            Self::Checked
        } else {
            Self::Indeterminate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checked => "checked",
            Self::Unchecked => "unchecked",
            Self::Indeterminate => "indeterminate",
        }
    }
}

impl fmt::Display for ModuleSelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
