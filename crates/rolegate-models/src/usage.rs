//! Dependent-usage counts used to gate deletion of roles, locations and any other
//! resource other records point at.

use serde::{Deserialize, Serialize};

/// How many records of one kind still reference the resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCount {
    pub singular: String,
    pub plural: String,
    pub count: u64,
}

impl UsageCount {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>, count: u64) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
            count,
        }
    }

    /// `"1 user"`, `"3 users"`.
    pub fn describe(&self) -> String {
        let noun = if self.count == 1 {
            &self.singular
        } else {
            &self.plural
        };
        format!("{} {}", self.count, noun)
    }
}

/// Reference counts supplied by the repository that owns the resource.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DependentUsage {
    pub counts: Vec<UsageCount>,
}

impl DependentUsage {
    pub fn new(counts: Vec<UsageCount>) -> Self {
        Self { counts }
    }

    pub fn pair(primary_usage_count: u64, secondary_usage_count: u64) -> Self {
        Self::new(vec![
            UsageCount::new("primary reference", "primary references", primary_usage_count),
            UsageCount::new(
                "secondary reference",
                "secondary references",
                secondary_usage_count,
            ),
        ])
    }

    /// Users assigned to a role.
    pub fn for_role(user_count: u64) -> Self {
        Self::new(vec![UsageCount::new("user", "users", user_count)])
    }

    /// Bookings and equipment attached to a location.
    pub fn for_location(booking_count: u64, equipment_count: u64) -> Self {
        Self::new(vec![
            UsageCount::new("booking", "bookings", booking_count),
            UsageCount::new("equipment item", "equipment items", equipment_count),
        ])
    }

    pub fn with(mut self, count: UsageCount) -> Self {
        self.counts.push(count);
        self
    }

    pub fn blocking_counts(&self) -> impl Iterator<Item = &UsageCount> {
        self.counts.iter().filter(|c| c.count > 0)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|c| c.count).sum()
    }
}
