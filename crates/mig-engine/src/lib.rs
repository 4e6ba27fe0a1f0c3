//! Org migration engine
//!
//! Facade over the resolver and planner crates:
//! - **analyze**: expand a selection into everything it requires and sort
//!   it into custom components, standard-object field groups and exclusions
//! - **plan_order**: dependency-first processing order with cycle detection
//! - **readiness**: which components the execution layer may start now
//!
//! Both entry points are pure functions of the inventory snapshot. Only
//! loading an inventory or a config file can fail.
//!
//! # Example
//!
//! ```rust
//! use mig_engine::prelude::*;
//!
//! let inventory = Inventory::from_json_str(r#"{"components": [
//!     {"id": "obj", "name": "Invoice__c", "kind": "data-object"},
//!     {"id": "fld", "name": "Invoice__c.Total__c", "kind": "data-field"},
//!     {"id": "svc", "name": "InvoiceService", "kind": "code-module",
//!      "requires": [{"id": "obj", "name": "Invoice__c", "kind": "data-object"}]}
//! ]}"#).unwrap();
//!
//! let engine = Engine::default();
//! let result = engine.analyze(&["svc"], inventory.components());
//! assert_eq!(result.custom_to_migrate.len(), 3);
//!
//! let plan = engine.plan_order(inventory.components());
//! assert_eq!(plan.position("obj"), Some(0));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod error;
pub mod report;

// Re-exports
pub use config::{EngineConfig, LogConfig};
pub use engine::Engine;
pub use error::ConfigError;
pub use mig_inventory::{Component, ComponentKind, Inventory, InventoryError, MigrationStatus, Notes};
pub use mig_planner::{plan_order, DependencyGraph, MigrationPlan, MigrationProgress};
pub use mig_resolver::{analyze, AnalysisResult, ResolverConfig, StandardObjectGroup};

/// Check if `component` may be migrated given the statuses in `inventory`
#[must_use]
pub fn can_migrate(component: &Component, inventory: &[Component]) -> bool {
    DependencyGraph::build(inventory).can_migrate(component)
}

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving the engine
    pub use crate::{
        analyze, can_migrate, plan_order, AnalysisResult, Component, ComponentKind,
        DependencyGraph, Engine, EngineConfig, Inventory, MigrationPlan, MigrationStatus,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
