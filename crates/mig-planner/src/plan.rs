//! Migration plan
//!
//! Processing order, detected cycles and deployment waves for a whole
//! inventory. Cyclic subgraphs still get an order (every node exactly once)
//! but it cannot honour the edges that close a loop.

use crate::graph::DependencyGraph;
use crate::traversal::{walk, Walk};
use mig_inventory::{Component, Notes};
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

/// Result of planning an inventory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationPlan {
    /// Components, dependencies before dependents
    pub order: Vec<Component>,
    /// Detected cycles as id paths
    pub cycles: Vec<Vec<String>>,
    /// Deployment waves as ids; a wave only depends on earlier waves
    pub batches: Vec<Vec<String>>,
    /// Notes gathered while building the graph
    pub notes: Notes,
}

impl MigrationPlan {
    /// Ids in processing order
    #[must_use]
    pub fn order_ids(&self) -> Vec<&str> {
        self.order.iter().map(|c| c.id.as_str()).collect()
    }

    /// Position of `id` in the processing order
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.order.iter().position(|c| c.id == id)
    }

    /// No cycles were found
    #[inline]
    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Check if `id` takes part in any reported cycle
    #[must_use]
    pub fn in_cycle(&self, id: &str) -> bool {
        self.cycles.iter().any(|cycle| cycle.iter().any(|member| member == id))
    }
}

impl<'a> DependencyGraph<'a> {
    /// Components with dependencies before dependents
    ///
    /// Every component appears exactly once, cycles included.
    #[must_use]
    pub fn topological_order(&self) -> Vec<&'a Component> {
        self.to_components(&walk(self).order)
    }

    /// Every cycle found by depth-first search, as id paths
    ///
    /// A path starts at the node re-entered by a back edge and ends at the
    /// node that closes the loop.
    #[must_use]
    pub fn find_cycles(&self) -> Vec<Vec<String>> {
        self.to_ids(&walk(self).cycles)
    }

    /// Deployment waves
    ///
    /// Wave 0 holds components without dependencies; every other component
    /// sits one wave after its latest dependency. Edges that close a cycle
    /// are ignored.
    #[must_use]
    pub fn batches(&self) -> Vec<Vec<&'a Component>> {
        self.waves(&walk(self))
            .iter()
            .map(|wave| self.to_components(wave))
            .collect()
    }

    /// Full plan: order, cycles and waves
    #[must_use]
    pub fn plan(&self) -> MigrationPlan {
        let walk = walk(self);

        for cycle in &walk.cycles {
            let ids: Vec<_> = cycle.iter().map(|&node| self.component(node).id.as_str()).collect();
            tracing::warn!("Dependency cycle: {}", ids.join(" -> "));
        }

        let plan = MigrationPlan {
            order: self.to_components(&walk.order).into_iter().cloned().collect(),
            cycles: self.to_ids(&walk.cycles),
            batches: self.to_ids(&self.waves(&walk)),
            notes: self.notes().clone(),
        };

        tracing::info!(
            "Planned {} component(s) in {} wave(s), {} cycle(s)",
            plan.order.len(),
            plan.batches.len(),
            plan.cycles.len()
        );

        plan
    }

    fn waves(&self, walk: &Walk) -> Vec<Vec<NodeIndex>> {
        let mut position = vec![0usize; self.node_count()];
        for (i, node) in walk.order.iter().enumerate() {
            position[node.index()] = i;
        }

        let mut level = vec![0usize; self.node_count()];
        let mut waves: Vec<Vec<NodeIndex>> = Vec::new();
        for &node in &walk.order {
            let wave = self
                .successors(node)
                .into_iter()
                .filter(|(target, _)| position[target.index()] < position[node.index()])
                .map(|(target, _)| level[target.index()] + 1)
                .max()
                .unwrap_or(0);
            level[node.index()] = wave;
            if waves.len() <= wave {
                waves.resize_with(wave + 1, Vec::new);
            }
            waves[wave].push(node);
        }
        waves
    }

    fn to_components(&self, nodes: &[NodeIndex]) -> Vec<&'a Component> {
        nodes.iter().map(|&node| self.component(node)).collect()
    }

    fn to_ids(&self, paths: &[Vec<NodeIndex>]) -> Vec<Vec<String>> {
        paths
            .iter()
            .map(|path| path.iter().map(|&node| self.component(node).id.clone()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mig_inventory::{ComponentKind, DependencyRef};

    fn module(id: &str, deps: &[&str]) -> Component {
        deps.iter().fold(Component::new(id, id, ComponentKind::CodeModule), |c, d| {
            c.with_requires(DependencyRef::new(*d, *d, ComponentKind::CodeModule))
        })
    }

    fn wave_ids(plan: &MigrationPlan) -> Vec<Vec<&str>> {
        plan.batches
            .iter()
            .map(|wave| wave.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn waves_follow_longest_dependency_chain() {
        let inventory = vec![
            module("page", &["service", "object"]),
            module("service", &["object"]),
            module("object", &[]),
            module("standalone", &[]),
        ];
        let plan = DependencyGraph::build(&inventory).plan();

        assert_eq!(plan.order_ids(), ["object", "service", "page", "standalone"]);
        assert_eq!(
            wave_ids(&plan),
            vec![vec!["object", "standalone"], vec!["service"], vec!["page"]]
        );
    }

    #[test]
    fn cyclic_edges_do_not_push_waves() {
        let inventory = vec![module("a", &["b"]), module("b", &["a"])];
        let plan = DependencyGraph::build(&inventory).plan();

        assert_eq!(plan.order_ids(), ["b", "a"]);
        assert_eq!(wave_ids(&plan), vec![vec!["b"], vec!["a"]]);
        assert!(plan.in_cycle("a") && plan.in_cycle("b"));
        assert!(!plan.is_acyclic());
    }

    #[test]
    fn empty_inventory() {
        let plan = DependencyGraph::build(&[]).plan();
        assert_eq!(plan, MigrationPlan::default());
    }
}
