//! Declared-edge dependency graph
//!
//! Nodes are the inventory's components (first occurrence of each id);
//! arcs are their resolved `requires` declarations, weighted with the
//! `required` flag. The graph borrows the caller's snapshot and is rebuilt
//! whenever statuses change.

use mig_inventory::{Component, Dependency, InventoryIndex, NamingConvention, Notes};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

/// Immutable dependency graph over an inventory snapshot
#[derive(Debug, Clone)]
pub struct DependencyGraph<'a> {
    index: InventoryIndex<'a>,
    graph: DiGraph<usize, bool>,
    node_of: Vec<Option<NodeIndex>>,
    notes: Notes,
}

impl<'a> DependencyGraph<'a> {
    /// Build the graph from declared `requires` lists
    ///
    /// References that resolve to nothing are dropped with a note; the graph
    /// only ever references ids present in `components`. A target declared
    /// more than once gets a single edge, required if any declaration is.
    #[must_use]
    pub fn build(components: &'a [Component]) -> Self {
        Self::build_with(components, &NamingConvention::default())
    }

    /// [`build`](Self::build) with the naming rules of the caller's configuration
    #[must_use]
    pub fn build_with(components: &'a [Component], naming: &NamingConvention) -> Self {
        let index = InventoryIndex::build(components, naming);
        let mut graph = DiGraph::with_capacity(components.len(), components.len());
        let mut node_of = vec![None; components.len()];
        let mut notes = Notes::new();

        for (position, component) in components.iter().enumerate() {
            if index.position(&component.id) == Some(position) {
                node_of[position] = Some(graph.add_node(position));
            } else {
                notes.push(
                    component.id.as_str(),
                    format!("duplicate id at inventory position {position}; occurrence ignored"),
                );
            }
        }

        for (position, component) in components.iter().enumerate() {
            let Some(source) = node_of[position] else {
                continue;
            };
            for declared in &component.requires {
                let target = index
                    .resolve(declared)
                    .and_then(|target| index.position(&target.id))
                    .and_then(|target| node_of[target]);
                match target {
                    Some(target) => match graph.find_edge(source, target) {
                        Some(edge) => graph[edge] |= declared.required,
                        None => {
                            graph.add_edge(source, target, declared.required);
                        }
                    },
                    None => {
                        tracing::warn!(
                            "Dropping dependency {} -> {}: not in inventory",
                            component.id,
                            declared.id
                        );
                        notes.push(
                            component.id.as_str(),
                            format!(
                                "declared dependency {} `{}` ({}) not in inventory; dropped",
                                declared.kind, declared.name, declared.id
                            ),
                        );
                    }
                }
            }
        }

        tracing::debug!(
            "Built dependency graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        Self {
            index,
            graph,
            node_of,
            notes,
        }
    }

    /// Number of nodes
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Graph has no nodes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// No cycle anywhere in the graph
    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        !petgraph::algo::is_cyclic_directed(&self.graph)
    }

    /// Notes gathered while building
    #[inline]
    #[must_use]
    pub fn notes(&self) -> &Notes {
        &self.notes
    }

    /// Component by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'a Component> {
        self.node(id).map(|node| self.component(node))
    }

    /// Components in inventory order
    pub fn components(&self) -> impl Iterator<Item = &'a Component> + '_ {
        self.nodes().map(|node| self.component(node))
    }

    /// Node of `id`
    pub(crate) fn node(&self, id: &str) -> Option<NodeIndex> {
        self.index
            .position(id)
            .and_then(|position| self.node_of[position])
    }

    /// Nodes in inventory order
    pub(crate) fn nodes(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    pub(crate) fn component(&self, node: NodeIndex) -> &'a Component {
        &self.index.components()[self.graph[node]]
    }

    /// Outgoing `(target, required)` pairs in declaration order
    pub(crate) fn successors(&self, node: NodeIndex) -> Vec<(NodeIndex, bool)> {
        // petgraph walks outgoing edges newest first
        let mut successors: Vec<_> = self
            .graph
            .edges(node)
            .map(|edge| (edge.target(), *edge.weight()))
            .collect();
        successors.reverse();
        successors
    }

    /// Declared requirements of `id` as `(target, required)`
    #[must_use]
    pub fn requirements(&self, id: &str) -> Vec<(&'a Component, bool)> {
        self.node(id)
            .map(|node| {
                self.successors(node)
                    .into_iter()
                    .map(|(target, required)| (self.component(target), required))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Components that declare a dependency on `id`, in inventory order
    #[must_use]
    pub fn dependents(&self, id: &str) -> Vec<&'a Component> {
        let Some(node) = self.node(id) else {
            return Vec::new();
        };
        let mut sources: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(node, Direction::Incoming)
            .collect();
        sources.sort_unstable();
        sources.dedup();
        sources
            .into_iter()
            .map(|source| self.component(source))
            .collect()
    }

    /// All edges, grouped by source in inventory order
    #[must_use]
    pub fn edges(&self) -> Vec<Dependency> {
        self.nodes()
            .flat_map(|node| {
                let source = &self.component(node).id;
                self.successors(node)
                    .into_iter()
                    .map(move |(target, required)| {
                        Dependency::new(source, &self.component(target).id, required)
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mig_inventory::{ComponentKind, DependencyRef};

    fn module(id: &str) -> Component {
        Component::new(id, id, ComponentKind::CodeModule)
    }

    fn dep(id: &str) -> DependencyRef {
        DependencyRef::new(id, id, ComponentKind::CodeModule)
    }

    #[test]
    fn edges_keep_declaration_order() {
        let inventory = vec![
            module("a")
                .with_requires(dep("c"))
                .with_requires(dep("b").optional()),
            module("b"),
            module("c"),
        ];
        let graph = DependencyGraph::build(&inventory);

        assert_eq!(
            graph.edges(),
            [Dependency::new("a", "c", true), Dependency::new("a", "b", false)]
        );
        let requirements: Vec<_> = graph
            .requirements("a")
            .into_iter()
            .map(|(c, required)| (c.id.as_str(), required))
            .collect();
        assert_eq!(requirements, [("c", true), ("b", false)]);
    }

    #[test]
    fn dangling_references_are_dropped_with_note() {
        let inventory = vec![module("a").with_requires(dep("ghost")).with_requires(dep("b")), module("b")];
        let graph = DependencyGraph::build(&inventory);

        assert_eq!(graph.edge_count(), 1);
        assert!(graph.notes().get("a")[0].contains("ghost"));
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let inventory = vec![module("a"), module("a").with_requires(dep("b")), module("b")];
        let graph = DependencyGraph::build(&inventory);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.notes().contains("a"));
    }

    #[test]
    fn dependents_are_sorted_and_unique() {
        let inventory = vec![
            module("z").with_requires(dep("t")).with_requires(dep("t")),
            module("t"),
            module("y").with_requires(dep("t")),
        ];
        let graph = DependencyGraph::build(&inventory);

        let ids: Vec<_> = graph.dependents("t").iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["z", "y"]);
        assert!(graph.dependents("missing").is_empty());
    }

    #[test]
    fn repeated_declarations_share_one_edge() {
        let inventory = vec![
            module("a")
                .with_requires(dep("b").optional())
                .with_requires(dep("b"))
                .with_requires(dep("b").optional()),
            module("b"),
        ];
        let graph = DependencyGraph::build(&inventory);

        assert_eq!(graph.edges(), [Dependency::new("a", "b", true)]);
    }

    #[test]
    fn acyclic_check() {
        let inventory = vec![module("a").with_requires(dep("b")), module("b")];
        assert!(DependencyGraph::build(&inventory).is_acyclic());

        let inventory = vec![module("a").with_requires(dep("a"))];
        assert!(!DependencyGraph::build(&inventory).is_acyclic());
    }
}
