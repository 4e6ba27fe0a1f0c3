//! Per-kind dependency inference
//!
//! Every component kind has one [`DependencyInferencer`] registered in an
//! [`InferencerRegistry`]. Declared `requires` edges are always kept. Body
//! kinds fall back to their inferencer only when nothing is declared; the
//! object and field heuristics also run alongside declarations, since an
//! object always owns its fields and a field always needs its parent.
//! A parser-backed inferencer for a kind can be swapped in with
//! [`InferencerRegistry::register`] without touching the resolver.

use crate::classifier::Classifier;
use mig_inventory::{Component, ComponentKind, Dependency, InventoryIndex};
use std::collections::HashMap;
use std::fmt;

/// Edges and notes produced for one component
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inference {
    /// Outgoing "requires" edges; targets are inventory ids
    pub edges: Vec<Dependency>,
    /// Explanations of what was or was not inferred
    pub notes: Vec<String>,
}

impl Inference {
    /// No edges, no notes
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Single note, no edges
    #[must_use]
    pub fn note(note: impl Into<String>) -> Self {
        Self {
            edges: Vec::new(),
            notes: vec![note.into()],
        }
    }

    /// Add an edge
    #[inline]
    pub fn push_edge(&mut self, edge: Dependency) {
        self.edges.push(edge);
    }

    /// Add a note
    #[inline]
    pub fn push_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    /// Merge `other` into this inference, keeping one edge per target
    ///
    /// A target reached by a required and an optional edge keeps the
    /// required one. Notes are appended.
    pub fn merge(&mut self, other: Inference) {
        for edge in other.edges {
            match self.edges.iter_mut().find(|e| e.target == edge.target) {
                Some(existing) => existing.required |= edge.required,
                None => self.edges.push(edge),
            }
        }
        self.notes.extend(other.notes);
    }

    /// Ids of the edge targets
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.edges.iter().map(|edge| edge.target.as_str())
    }
}

/// Read-only state shared by inferencers during one run
#[derive(Debug, Clone, Copy)]
pub struct InferenceContext<'r, 'a> {
    /// Inventory lookup
    pub index: &'r InventoryIndex<'a>,
    /// Classification rules
    pub classifier: &'r Classifier,
    /// Pull custom fields of platform-standard objects
    pub expand_standard_objects: bool,
}

/// Derives "requires" edges for one component kind
pub trait DependencyInferencer: fmt::Debug + Send + Sync {
    /// Infer outgoing edges of `component`
    ///
    /// Must not fail: anything that cannot be inferred is reported as a note.
    fn infer(&self, component: &Component, ctx: &InferenceContext<'_, '_>) -> Inference;

    /// Also run when the component declares its dependencies
    ///
    /// Inferred edges are then merged with the declared ones.
    fn supplements_declared(&self) -> bool {
        false
    }
}

/// Data object requires every field whose parent segment is its name
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectFieldsInferencer;

impl DependencyInferencer for ObjectFieldsInferencer {
    fn infer(&self, component: &Component, ctx: &InferenceContext<'_, '_>) -> Inference {
        if !ctx.expand_standard_objects && ctx.classifier.is_platform_standard(component) {
            return Inference::note(
                "platform-standard object; fields on it are not pulled into the selection",
            );
        }

        let mut inference = Inference::empty();
        for field in ctx.index.fields_of(&component.name) {
            inference.push_edge(Dependency::new(&component.id, &field.id, true));
        }
        inference
    }

    fn supplements_declared(&self) -> bool {
        true
    }
}

/// Data field requires its parent object
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldParentInferencer;

impl DependencyInferencer for FieldParentInferencer {
    fn infer(&self, component: &Component, ctx: &InferenceContext<'_, '_>) -> Inference {
        let Some(parent) = ctx.classifier.parent_name(component) else {
            return Inference::note(format!(
                "name `{}` has no `{}` separator; parent object not inferred",
                component.name,
                ctx.classifier.naming().separator
            ));
        };

        match ctx.index.object_named(parent) {
            Some(object) => {
                let mut inference = Inference::empty();
                inference.push_edge(Dependency::new(&component.id, &object.id, true));
                inference
            }
            None => Inference::note(format!(
                "parent object `{parent}` not in inventory; assumed to exist on the target org"
            )),
        }
    }

    fn supplements_declared(&self) -> bool {
        true
    }
}

/// Kinds whose dependencies live in the component body
///
/// Nothing is inferred; only declared edges count for these kinds, so their
/// closure may be incomplete.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredOnlyInferencer;

impl DependencyInferencer for DeclaredOnlyInferencer {
    fn infer(&self, component: &Component, _ctx: &InferenceContext<'_, '_>) -> Inference {
        Inference::note(format!(
            "no declared dependencies for {}; true dependency discovery requires parsing the component body, not implemented",
            component.kind
        ))
    }
}

/// One inferencer per component kind
#[derive(Debug)]
pub struct InferencerRegistry {
    by_kind: HashMap<ComponentKind, Box<dyn DependencyInferencer>>,
}

impl Default for InferencerRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl InferencerRegistry {
    /// Registry with no inferencers; every kind falls back to declared edges only
    #[must_use]
    pub fn empty() -> Self {
        Self {
            by_kind: HashMap::new(),
        }
    }

    /// Registry with the naming-convention heuristics
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for kind in ComponentKind::ALL {
            match kind {
                ComponentKind::DataObject => registry.register(kind, ObjectFieldsInferencer),
                ComponentKind::DataField => registry.register(kind, FieldParentInferencer),
                _ => registry.register(kind, DeclaredOnlyInferencer),
            };
        }
        registry
    }

    /// Install `inferencer` for `kind`, returning the one it replaces
    pub fn register(
        &mut self,
        kind: ComponentKind,
        inferencer: impl DependencyInferencer + 'static,
    ) -> Option<Box<dyn DependencyInferencer>> {
        self.by_kind.insert(kind, Box::new(inferencer))
    }

    /// With `inferencer` installed for `kind`
    #[must_use]
    pub fn with(mut self, kind: ComponentKind, inferencer: impl DependencyInferencer + 'static) -> Self {
        self.register(kind, inferencer);
        self
    }

    /// Inferencer registered for `kind`
    #[must_use]
    pub fn get(&self, kind: ComponentKind) -> Option<&dyn DependencyInferencer> {
        self.by_kind.get(&kind).map(AsRef::as_ref)
    }

    /// Infer outgoing edges of `component`
    ///
    /// Declared edges come first. The kind's inferencer runs when nothing is
    /// declared, or when it supplements declarations; its edges are then
    /// merged in, one edge per target, required if either side requires it.
    #[must_use]
    pub fn infer(&self, component: &Component, ctx: &InferenceContext<'_, '_>) -> Inference {
        let inferencer = self.get(component.kind);
        if component.requires.is_empty() {
            return match inferencer {
                Some(inferencer) => inferencer.infer(component, ctx),
                None => Inference::note(format!(
                    "no dependency inferencer registered for {}",
                    component.kind
                )),
            };
        }

        let mut inference = declared_edges(component, ctx.index);
        if let Some(inferencer) = inferencer.filter(|i| i.supplements_declared()) {
            inference.merge(inferencer.infer(component, ctx));
        }
        inference
    }
}

/// Declared `requires` entries resolved against the inventory
///
/// Entries that resolve to nothing are dropped with a note.
#[must_use]
pub fn declared_edges(component: &Component, index: &InventoryIndex<'_>) -> Inference {
    let mut inference = Inference::empty();
    for declared in &component.requires {
        match index.resolve(declared) {
            Some(target) => {
                inference.push_edge(Dependency::new(&component.id, &target.id, declared.required));
            }
            None => inference.push_note(format!(
                "declared dependency {} `{}` ({}) not in inventory; skipped",
                declared.kind, declared.name, declared.id
            )),
        }
    }
    inference
}
