//! Testing utilities for the org migration workspace
//!
//! Fixture builders and proptest strategies for component inventories.

#![allow(missing_docs)]

use mig_inventory::{Component, ComponentKind, DependencyRef, MigrationStatus};
use proptest::prelude::*;

/// Data object whose id is its name
pub fn object(name: &str) -> Component {
    Component::new(name, name, ComponentKind::DataObject)
}

/// Data field whose id is its qualified name
pub fn field(qualified_name: &str) -> Component {
    Component::new(qualified_name, qualified_name, ComponentKind::DataField)
}

/// Code module whose id is its name
pub fn module(name: &str) -> Component {
    Component::new(name, name, ComponentKind::CodeModule)
}

/// Add a required declared dependency on `target`
pub fn requires(component: Component, target: &Component) -> Component {
    component.with_requires(target.to_ref())
}

/// Add an optional declared dependency on `target`
pub fn optionally_requires(component: Component, target: &Component) -> Component {
    component.with_requires(target.to_ref().optional())
}

/// Code modules `ids[0] -> ids[1] -> ... -> ids[n-1]`, all required
pub fn chain(ids: &[&str]) -> Vec<Component> {
    let mut components: Vec<Component> = ids.iter().map(|id| module(id)).collect();
    for i in 0..components.len().saturating_sub(1) {
        let target = components[i + 1].clone();
        components[i] = requires(components[i].clone(), &target);
    }
    components
}

/// Code modules forming a required cycle `ids[0] -> ... -> ids[n-1] -> ids[0]`
pub fn cycle(ids: &[&str]) -> Vec<Component> {
    let mut components = chain(ids);
    if let Some(first) = components.first().cloned() {
        let last = components.len() - 1;
        components[last] = requires(components[last].clone(), &first);
    }
    components
}

/// Set the status of `id` in `inventory`
pub fn set_status(inventory: &mut [Component], id: &str, status: MigrationStatus) {
    for component in inventory.iter_mut().filter(|c| c.id == id) {
        component.status = status;
    }
}

const STANDARD_PARENTS: [&str; 3] = ["Account", "Contact", "Case"];

#[derive(Debug, Clone)]
enum Entry {
    Object { standard: bool, n: u8, namespaced: bool },
    Field { parent: u8, custom: bool, n: u8 },
    Module { deps: Vec<(u8, bool)>, namespaced: bool },
}

fn arb_status() -> impl Strategy<Value = MigrationStatus> {
    prop::sample::select(MigrationStatus::ALL.to_vec())
}

fn arb_entry() -> impl Strategy<Value = Entry> {
    prop_oneof![
        (any::<bool>(), 0..4u8, prop::bool::weighted(0.1))
            .prop_map(|(standard, n, namespaced)| Entry::Object { standard, n, namespaced }),
        (0..7u8, any::<bool>(), 0..6u8)
            .prop_map(|(parent, custom, n)| Entry::Field { parent, custom, n }),
        (
            prop::collection::vec((0..48u8, any::<bool>()), 0..4),
            prop::bool::weighted(0.1)
        )
            .prop_map(|(deps, namespaced)| Entry::Module { deps, namespaced }),
    ]
}

fn parent_name(parent: u8) -> String {
    match STANDARD_PARENTS.get(usize::from(parent)) {
        Some(name) => (*name).to_string(),
        None => format!("Obj{}__c", parent - 3),
    }
}

fn build(entries: Vec<(Entry, MigrationStatus)>) -> Vec<Component> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (entry, status))| {
            let id = format!("c{i}");
            let component = match entry {
                Entry::Object { standard, n, namespaced } => {
                    let name = if standard {
                        STANDARD_PARENTS[usize::from(n) % STANDARD_PARENTS.len()].to_string()
                    } else {
                        format!("Obj{n}__c")
                    };
                    let c = Component::new(&id, name, ComponentKind::DataObject);
                    if namespaced { c.with_namespace("pkg") } else { c }
                }
                Entry::Field { parent, custom, n } => {
                    let suffix = if custom { "__c" } else { "" };
                    let name = format!("{}.F{n}{suffix}", parent_name(parent));
                    Component::new(&id, name, ComponentKind::DataField)
                }
                Entry::Module { deps, namespaced } => {
                    let mut c = Component::new(&id, format!("Module{i}"), ComponentKind::CodeModule);
                    for (target, required) in deps {
                        let mut dep = DependencyRef::new(
                            format!("c{target}"),
                            "",
                            ComponentKind::CodeModule,
                        );
                        dep.required = required;
                        c = c.with_requires(dep);
                    }
                    if namespaced { c.with_namespace("pkg") } else { c }
                }
            };
            component.with_status(status)
        })
        .collect()
}

/// Random inventory of objects, fields and code modules with unique ids
///
/// Module declarations may point at ids outside the inventory.
pub fn arb_inventory() -> impl Strategy<Value = Vec<Component>> {
    prop::collection::vec((arb_entry(), arb_status()), 1..40).prop_map(build)
}

/// Random inventory together with a selection of ids drawn from it
pub fn arb_inventory_and_selection() -> impl Strategy<Value = (Vec<Component>, Vec<String>)> {
    arb_inventory().prop_flat_map(|inventory| {
        let len = inventory.len();
        let ids: Vec<String> = inventory.iter().map(|c| c.id.clone()).collect();
        (
            Just(inventory),
            prop::collection::vec(0..len, 0..=len.min(6))
                .prop_map(move |picks| picks.into_iter().map(|i| ids[i].clone()).collect()),
        )
    })
}
