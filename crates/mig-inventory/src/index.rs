//! Immutable inventory index
//!
//! Provides [`InventoryIndex`] for O(1) lookup by id, by `(name, kind)` and
//! of the fields hanging off a parent object. The index only borrows the
//! caller's components; it is built once per analysis run and dropped with it.

use crate::component::{Component, ComponentKind, DependencyRef};
use crate::naming::NamingConvention;
use std::collections::HashMap;

/// Borrowed lookup structure over an inventory snapshot
///
/// When ids or `(name, kind)` pairs repeat, the first occurrence wins.
#[derive(Debug, Clone)]
pub struct InventoryIndex<'a> {
    components: &'a [Component],
    by_id: HashMap<&'a str, usize>,
    by_name: HashMap<(&'a str, ComponentKind), usize>,
    fields_by_parent: HashMap<&'a str, Vec<usize>>,
    duplicate_ids: Vec<&'a str>,
}

impl<'a> InventoryIndex<'a> {
    /// Build the index
    #[must_use]
    pub fn build(components: &'a [Component], naming: &NamingConvention) -> Self {
        let mut by_id = HashMap::with_capacity(components.len());
        let mut by_name = HashMap::with_capacity(components.len());
        let mut fields_by_parent: HashMap<&'a str, Vec<usize>> = HashMap::new();
        let mut duplicate_ids = Vec::new();

        for (position, component) in components.iter().enumerate() {
            if by_id.contains_key(component.id.as_str()) {
                duplicate_ids.push(component.id.as_str());
                continue;
            }
            by_id.insert(component.id.as_str(), position);
            by_name
                .entry((component.name.as_str(), component.kind))
                .or_insert(position);

            if component.kind == ComponentKind::DataField {
                if let Some(parent) = naming.parent_segment(&component.name) {
                    fields_by_parent.entry(parent).or_default().push(position);
                }
            }
        }

        if !duplicate_ids.is_empty() {
            tracing::warn!(
                "Inventory contains {} duplicate id(s); first occurrence wins",
                duplicate_ids.len()
            );
        }

        Self {
            components,
            by_id,
            by_name,
            fields_by_parent,
            duplicate_ids,
        }
    }

    /// Underlying components, in inventory order
    #[inline]
    #[must_use]
    pub fn components(&self) -> &'a [Component] {
        self.components
    }

    /// Number of components in the snapshot
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Snapshot is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Lookup by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'a Component> {
        self.position(id).map(|position| &self.components[position])
    }

    /// Inventory position of `id`
    #[inline]
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Check if `id` is present
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Lookup by exact qualified name and kind
    #[must_use]
    pub fn find_by_name(&self, name: &str, kind: ComponentKind) -> Option<&'a Component> {
        self.by_name
            .get(&(name, kind))
            .map(|&position| &self.components[position])
    }

    /// Data object with the given name
    #[inline]
    #[must_use]
    pub fn object_named(&self, name: &str) -> Option<&'a Component> {
        self.find_by_name(name, ComponentKind::DataObject)
    }

    /// Fields whose parent segment equals `parent`, in inventory order
    pub fn fields_of(&self, parent: &str) -> impl Iterator<Item = &'a Component> + '_ {
        let components = self.components;
        self.fields_by_parent
            .get(parent)
            .into_iter()
            .flatten()
            .map(move |&position| &components[position])
    }

    /// Resolve a declared reference: by id first, then by exact `(name, kind)`
    #[must_use]
    pub fn resolve(&self, dependency: &DependencyRef) -> Option<&'a Component> {
        self.get(&dependency.id).or_else(|| {
            if dependency.name.is_empty() {
                None
            } else {
                self.find_by_name(&dependency.name, dependency.kind)
            }
        })
    }

    /// Ids that appeared more than once (later occurrences were ignored)
    #[inline]
    #[must_use]
    pub fn duplicate_ids(&self) -> &[&'a str] {
        &self.duplicate_ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> Vec<Component> {
        vec![
            Component::new("o1", "Invoice__c", ComponentKind::DataObject),
            Component::new("f1", "Invoice__c.Total__c", ComponentKind::DataField),
            Component::new("f2", "Invoice__c.Notes__c", ComponentKind::DataField),
            Component::new("f3", "Account.Loyalty__c", ComponentKind::DataField),
            Component::new("f4", "Orphan", ComponentKind::DataField),
            Component::new("o1", "Shadow__c", ComponentKind::DataObject),
        ]
    }

    #[test]
    fn lookup_by_id_and_name() {
        let inventory = inventory();
        let index = InventoryIndex::build(&inventory, &NamingConvention::default());

        assert_eq!(index.get("f1").map(|c| c.name.as_str()), Some("Invoice__c.Total__c"));
        assert_eq!(index.object_named("Invoice__c").map(|c| c.id.as_str()), Some("o1"));
        assert!(index.object_named("Account").is_none());
        assert!(index.find_by_name("Invoice__c", ComponentKind::DataField).is_none());
    }

    #[test]
    fn fields_grouped_by_parent_in_inventory_order() {
        let inventory = inventory();
        let index = InventoryIndex::build(&inventory, &NamingConvention::default());

        let ids: Vec<_> = index.fields_of("Invoice__c").map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["f1", "f2"]);
        assert_eq!(index.fields_of("Account").count(), 1);
        assert_eq!(index.fields_of("Orphan").count(), 0);
    }

    #[test]
    fn first_duplicate_wins() {
        let inventory = inventory();
        let index = InventoryIndex::build(&inventory, &NamingConvention::default());

        assert_eq!(index.get("o1").map(|c| c.name.as_str()), Some("Invoice__c"));
        assert_eq!(index.duplicate_ids(), ["o1"]);
        assert!(index.object_named("Shadow__c").is_none());
    }

    #[test]
    fn resolve_falls_back_to_name() {
        let inventory = inventory();
        let index = InventoryIndex::build(&inventory, &NamingConvention::default());

        let by_id = DependencyRef::new("f2", "", ComponentKind::DataField);
        assert_eq!(index.resolve(&by_id).map(|c| c.id.as_str()), Some("f2"));

        let by_name = DependencyRef::new("target-org-id", "Invoice__c", ComponentKind::DataObject);
        assert_eq!(index.resolve(&by_name).map(|c| c.id.as_str()), Some("o1"));

        let dangling = DependencyRef::new("nope", "", ComponentKind::DataObject);
        assert!(index.resolve(&dangling).is_none());
    }
}
