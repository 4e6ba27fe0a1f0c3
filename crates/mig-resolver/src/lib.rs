//! Migration selection resolver
//!
//! Expands a user's selection into everything it implicitly requires and
//! sorts the result into what must be migrated:
//! - **Classifier**: platform-standard / packaged / custom labelling
//! - **InferencerRegistry**: per-kind dependency inference behind a trait
//! - **Resolver**: breadth-first closure plus categorization
//!
//! # Example
//!
//! ```rust
//! use mig_inventory::{Component, ComponentKind};
//! use mig_resolver::analyze;
//!
//! let inventory = vec![
//!     Component::new("acc", "Account", ComponentKind::DataObject),
//!     Component::new("loy", "Account.Loyalty__c", ComponentKind::DataField),
//! ];
//!
//! let result = analyze(&["loy"], &inventory);
//! assert_eq!(result.closure.len(), 2);
//! assert!(result.custom_to_migrate.is_empty());
//! assert_eq!(result.standard_groups[0].parent, "Account");
//! ```

#![warn(missing_docs)]

pub mod analysis;
pub mod categorizer;
pub mod classifier;
pub mod closure;
pub mod config;
pub mod inferencer;
pub mod standard_objects;

// Re-exports
pub use analysis::{AnalysisResult, ExcludedComponent, ExclusionReason, Placement, StandardObjectGroup};
pub use classifier::{Classification, Classifier};
pub use closure::{Closure, Resolver};
pub use config::ResolverConfig;
pub use inferencer::{
    DeclaredOnlyInferencer, DependencyInferencer, FieldParentInferencer, Inference,
    InferenceContext, InferencerRegistry, ObjectFieldsInferencer,
};

use mig_inventory::Component;

/// Expand `selected_ids` and categorize the closure with the default configuration
#[must_use]
pub fn analyze<S: AsRef<str>>(selected_ids: &[S], inventory: &[Component]) -> AnalysisResult {
    Resolver::default().analyze(selected_ids, inventory)
}

/// Transitive closure of `root_ids` with the default configuration
#[must_use]
pub fn resolve_closure<'a, S: AsRef<str>>(root_ids: &[S], inventory: &'a [Component]) -> Closure<'a> {
    Resolver::default().resolve_closure(root_ids, inventory)
}

/// Categorize a closure with the default configuration
#[must_use]
pub fn categorize(closure: &Closure<'_>) -> AnalysisResult {
    Resolver::default().categorize(closure)
}

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for resolving selections
    pub use crate::{
        analyze, AnalysisResult, Classification, Classifier, Closure, DependencyInferencer,
        Inference, InferenceContext, InferencerRegistry, Resolver, ResolverConfig,
        StandardObjectGroup,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
