//! Configured engine
//!
//! Holds a [`Resolver`] built from an [`EngineConfig`] and exposes both
//! pipelines. Every call recomputes from the snapshot it is given.

use crate::config::EngineConfig;
use mig_inventory::Component;
use mig_planner::{DependencyGraph, MigrationPlan};
use mig_resolver::{AnalysisResult, InferencerRegistry, Resolver};

/// Selection analysis and migration planning over inventory snapshots
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    resolver: Resolver,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    /// Create with the standard inferencers
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let resolver = Resolver::new(config.resolver.clone());
        Self { config, resolver }
    }

    /// With a custom inferencer registry
    #[must_use]
    pub fn with_registry(mut self, registry: InferencerRegistry) -> Self {
        self.resolver = self.resolver.with_registry(registry);
        self
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolver in use
    #[inline]
    #[must_use]
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Expand `selected_ids` over `inventory` and categorize the closure
    #[must_use]
    pub fn analyze<S: AsRef<str>>(&self, selected_ids: &[S], inventory: &[Component]) -> AnalysisResult {
        self.resolver.analyze(selected_ids, inventory)
    }

    /// Declared-edge graph of `inventory`, indexed with the configured naming rules
    #[must_use]
    pub fn graph<'a>(&self, inventory: &'a [Component]) -> DependencyGraph<'a> {
        DependencyGraph::build_with(inventory, &self.config.resolver.naming)
    }

    /// Processing order, cycles and waves for `inventory`
    ///
    /// Built on [`graph`](Self::graph).
    #[must_use]
    pub fn plan_order(&self, inventory: &[Component]) -> MigrationPlan {
        self.graph(inventory).plan()
    }
}
