//! Readiness queries
//!
//! Read-only gating for the execution layer. A component may be migrated
//! once every target of its required edges is `done`; optional edges never
//! block. Statuses are read from the snapshot the graph was built on, so
//! the graph is rebuilt after each status change.

use crate::graph::DependencyGraph;
use mig_inventory::{Component, MigrationStatus};
use petgraph::graph::NodeIndex;

impl<'a> DependencyGraph<'a> {
    /// Every required dependency of `component` is done
    ///
    /// Components unknown to the graph are never ready.
    #[must_use]
    pub fn can_migrate(&self, component: &Component) -> bool {
        self.can_migrate_id(&component.id)
    }

    /// [`can_migrate`](Self::can_migrate) by id
    #[must_use]
    pub fn can_migrate_id(&self, id: &str) -> bool {
        self.node(id)
            .is_some_and(|node| self.unfinished_requirements(node).next().is_none())
    }

    /// Required dependencies of `component` that are not done yet
    #[must_use]
    pub fn blocking(&self, component: &Component) -> Vec<&'a Component> {
        let Some(node) = self.node(&component.id) else {
            return Vec::new();
        };
        let mut blocking: Vec<&'a Component> = Vec::new();
        for target in self.unfinished_requirements(node) {
            if !blocking.iter().any(|c| c.id == target.id) {
                blocking.push(target);
            }
        }
        blocking
    }

    /// Pending components (not started or in progress) waiting on a dependency
    #[must_use]
    pub fn blocked(&self) -> Vec<&'a Component> {
        self.components()
            .filter(|c| c.status.is_pending() && !self.can_migrate(c))
            .collect()
    }

    /// Not-started components whose required dependencies are all done
    #[must_use]
    pub fn ready_to_migrate(&self) -> Vec<&'a Component> {
        self.components()
            .filter(|c| c.status == MigrationStatus::NotStarted && self.can_migrate(c))
            .collect()
    }

    fn unfinished_requirements(&self, node: NodeIndex) -> impl Iterator<Item = &'a Component> + '_ {
        self.successors(node)
            .into_iter()
            .filter(|&(_, required)| required)
            .map(move |(target, _)| self.component(target))
            .filter(|target| !target.status.is_done())
    }
}
