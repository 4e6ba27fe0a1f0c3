//! Closure resolution
//!
//! Breadth-first expansion of a root selection over inferred edges. Each
//! component is inferred at most once; the visited set only grows and is
//! bounded by the inventory, so expansion always terminates.

use crate::classifier::Classifier;
use crate::config::ResolverConfig;
use crate::inferencer::{InferenceContext, InferencerRegistry};
use mig_inventory::{Component, InventoryIndex, Notes};
use std::collections::{HashSet, VecDeque};

/// Transitive set of components required by a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Closure<'a> {
    /// Components in breadth-first discovery order, roots first
    pub components: Vec<&'a Component>,
    /// Notes gathered while expanding
    pub notes: Notes,
}

impl<'a> Closure<'a> {
    /// Number of components
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// No components
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Check if `id` is in the closure
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.components.iter().any(|c| c.id == id)
    }

    /// Ids in discovery order
    pub fn ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.components.iter().map(|c| c.id.as_str())
    }
}

/// Selection resolver: closure expansion plus categorization
#[derive(Debug)]
pub struct Resolver {
    pub(crate) config: ResolverConfig,
    pub(crate) classifier: Classifier,
    pub(crate) registry: InferencerRegistry,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

impl Resolver {
    /// Create with the standard inferencers
    #[must_use]
    pub fn new(config: ResolverConfig) -> Self {
        let classifier = Classifier::new(&config);
        Self {
            config,
            classifier,
            registry: InferencerRegistry::standard(),
        }
    }

    /// With a custom inferencer registry
    #[inline]
    #[must_use]
    pub fn with_registry(mut self, registry: InferencerRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Classifier in use
    #[inline]
    #[must_use]
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Build the inventory index this resolver expects
    #[must_use]
    pub fn index<'a>(&self, inventory: &'a [Component]) -> InventoryIndex<'a> {
        InventoryIndex::build(inventory, &self.config.naming)
    }

    /// Transitive closure of `root_ids` over `inventory`
    #[must_use]
    pub fn resolve_closure<'a, S: AsRef<str>>(
        &self,
        root_ids: &[S],
        inventory: &'a [Component],
    ) -> Closure<'a> {
        let index = self.index(inventory);
        self.resolve_closure_in(root_ids, &index)
    }

    /// Transitive closure of `root_ids` over a prebuilt index
    ///
    /// Unknown root ids and edges to ids outside the inventory are skipped
    /// with a note; the roots found in the inventory are always part of the
    /// result.
    #[must_use]
    pub fn resolve_closure_in<'a, S: AsRef<str>>(
        &self,
        root_ids: &[S],
        index: &InventoryIndex<'a>,
    ) -> Closure<'a> {
        let ctx = InferenceContext {
            index,
            classifier: &self.classifier,
            expand_standard_objects: self.config.expand_standard_objects,
        };

        let mut notes = Notes::new();
        let mut visited: HashSet<&'a str> = HashSet::new();
        let mut components = Vec::new();
        let mut queue = VecDeque::new();

        for root in root_ids {
            let root = root.as_ref();
            match index.get(root) {
                Some(component) => {
                    if visited.insert(component.id.as_str()) {
                        queue.push_back(component);
                    }
                }
                None => notes.push(root, "selected component not found in inventory"),
            }
        }

        while let Some(component) = queue.pop_front() {
            components.push(component);

            let inference = self.registry.infer(component, &ctx);
            for note in inference.notes {
                notes.push(component.id.as_str(), note);
            }

            for edge in &inference.edges {
                let Some(target) = index.get(&edge.target) else {
                    tracing::warn!(
                        "Inferred dependency {} -> {} is not in inventory",
                        component.id,
                        edge.target
                    );
                    notes.push(
                        component.id.as_str(),
                        format!("dependency `{}` not in inventory; skipped", edge.target),
                    );
                    continue;
                };
                if visited.insert(target.id.as_str()) {
                    queue.push_back(target);
                }
            }
        }

        tracing::debug!(
            "Resolved closure of {} root(s): {} component(s)",
            root_ids.len(),
            components.len()
        );

        Closure { components, notes }
    }
}
