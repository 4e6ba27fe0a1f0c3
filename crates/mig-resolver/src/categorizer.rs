//! Categorization
//!
//! Two passes: classify every closure member, then group the staged
//! custom-on-standard fields by parent. Each closure member lands in exactly
//! one of excluded, custom-to-migrate or a single standard-object group.

use crate::analysis::{AnalysisResult, ExcludedComponent, ExclusionReason, StandardObjectGroup};
use crate::classifier::{Classification, Classifier};
use crate::closure::{Closure, Resolver};
use indexmap::IndexMap;
use mig_inventory::{Component, ComponentKind};

impl Resolver {
    /// Partition a closure into what is migrated and what is not
    #[must_use]
    pub fn categorize(&self, closure: &Closure<'_>) -> AnalysisResult {
        let mut notes = closure.notes.clone();
        let mut custom_to_migrate = Vec::new();
        let mut excluded = Vec::new();
        let mut staged = Vec::new();

        for &component in &closure.components {
            match self.classifier.classify(component) {
                Classification::PlatformStandard => excluded.push(ExcludedComponent {
                    component: component.clone(),
                    reason: ExclusionReason::PlatformStandard,
                }),
                Classification::Packaged => {
                    notes.push(
                        component.id.as_str(),
                        format!(
                            "installed from package `{}`; install the package on the target org instead",
                            component.namespace().unwrap_or_default()
                        ),
                    );
                    excluded.push(ExcludedComponent {
                        component: component.clone(),
                        reason: ExclusionReason::Packaged,
                    });
                }
                Classification::CustomFieldOnStandardParent => staged.push(component),
                Classification::Custom => {
                    if component.kind == ComponentKind::DataField
                        && self.classifier.parent_name(component).is_none()
                    {
                        notes.push(
                            component.id.as_str(),
                            "field name has no parent segment; migrated as a standalone component",
                        );
                    }
                    custom_to_migrate.push(component.clone());
                }
            }
        }

        let standard_groups = group_by_parent(&staged, &self.classifier);

        tracing::debug!(
            "Categorized {} component(s): {} custom, {} standard group(s), {} excluded",
            closure.len(),
            custom_to_migrate.len(),
            standard_groups.len(),
            excluded.len()
        );

        AnalysisResult {
            closure: closure.components.iter().map(|&c| c.clone()).collect(),
            custom_to_migrate,
            standard_groups,
            excluded,
            notes,
        }
    }

    /// Expand `selected_ids` and categorize the closure
    #[must_use]
    pub fn analyze<S: AsRef<str>>(&self, selected_ids: &[S], inventory: &[Component]) -> AnalysisResult {
        let closure = self.resolve_closure(selected_ids, inventory);
        let result = self.categorize(&closure);
        tracing::info!(
            "Analyzed selection of {}: {} required, {} to migrate, {} excluded",
            selected_ids.len(),
            result.closure.len(),
            result.migrate_count(),
            result.excluded.len()
        );
        result
    }
}

/// Group staged fields by parent, keeping first-seen order of parents and fields
fn group_by_parent(staged: &[&Component], classifier: &Classifier) -> Vec<StandardObjectGroup> {
    let mut groups: IndexMap<&str, Vec<Component>> = IndexMap::new();
    for &field in staged {
        let parent = classifier.parent_name(field).unwrap_or(field.name.as_str());
        groups.entry(parent).or_default().push(field.clone());
    }
    groups
        .into_iter()
        .map(|(parent, fields)| StandardObjectGroup {
            parent: parent.to_string(),
            fields,
        })
        .collect()
}
