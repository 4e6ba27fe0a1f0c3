//! Analysis result
//!
//! The sole output of [`Resolver::analyze`](crate::Resolver::analyze). It is
//! recomputed from scratch on every call; nothing is cached between runs.

use mig_inventory::{Component, Notes};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a closure member is left out of the migration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExclusionReason {
    /// Pre-exists on every org
    PlatformStandard,
    /// Comes with an installed package
    Packaged,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlatformStandard => f.write_str("platform-standard"),
            Self::Packaged => f.write_str("packaged"),
        }
    }
}

/// Closure member that is not migrated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedComponent {
    /// The component
    pub component: Component,
    /// Why it is excluded
    pub reason: ExclusionReason,
}

/// Custom fields that hang off one platform-standard object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardObjectGroup {
    /// Parent object name
    pub parent: String,
    /// Field components, in closure order
    pub fields: Vec<Component>,
}

impl StandardObjectGroup {
    /// Local field names (the segment after the parent separator)
    #[must_use]
    pub fn field_names(&self, separator: char) -> Vec<&str> {
        self.fields
            .iter()
            .map(|field| {
                field
                    .name
                    .split_once(separator)
                    .map_or(field.name.as_str(), |(_, local)| local)
            })
            .collect()
    }
}

/// Where a closure member ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement<'r> {
    /// Left out of the migration
    Excluded(ExclusionReason),
    /// Migrated as a whole unit
    CustomToMigrate,
    /// Migrated as a field on an existing standard object
    StandardGroup(&'r str),
}

/// Categorized closure of a selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Everything the selection requires, roots first
    pub closure: Vec<Component>,
    /// Custom components to migrate as whole units
    pub custom_to_migrate: Vec<Component>,
    /// Custom fields on standard objects, grouped by parent
    pub standard_groups: Vec<StandardObjectGroup>,
    /// Closure members left out of the migration
    pub excluded: Vec<ExcludedComponent>,
    /// Explanations of what was and was not inferred, by component id
    pub notes: Notes,
}

impl AnalysisResult {
    /// Nothing to migrate
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.custom_to_migrate.is_empty() && self.standard_groups.is_empty()
    }

    /// Number of components that will be migrated
    #[must_use]
    pub fn migrate_count(&self) -> usize {
        self.custom_to_migrate.len()
            + self
                .standard_groups
                .iter()
                .map(|group| group.fields.len())
                .sum::<usize>()
    }

    /// Group for `parent`, if any
    #[must_use]
    pub fn group(&self, parent: &str) -> Option<&StandardObjectGroup> {
        self.standard_groups.iter().find(|group| group.parent == parent)
    }

    /// Where the closure member `id` was placed
    #[must_use]
    pub fn placement(&self, id: &str) -> Option<Placement<'_>> {
        if let Some(excluded) = self.excluded.iter().find(|e| e.component.id == id) {
            return Some(Placement::Excluded(excluded.reason));
        }
        if self.custom_to_migrate.iter().any(|c| c.id == id) {
            return Some(Placement::CustomToMigrate);
        }
        self.standard_groups
            .iter()
            .find(|group| group.fields.iter().any(|f| f.id == id))
            .map(|group| Placement::StandardGroup(group.parent.as_str()))
    }
}
