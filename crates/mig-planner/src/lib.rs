//! Migration order planner
//!
//! Operates on the declared-edge graph of a whole inventory:
//! - **DependencyGraph**: components as nodes, declared `requires` as arcs
//! - **Cycle detection**: every back edge found by depth-first search
//! - **Order planning**: dependencies before dependents, best effort on cycles
//! - **Readiness**: which components may be migrated given current statuses
//!
//! Nothing here fails. Dangling references become notes, cycles become data.
//!
//! # Example
//!
//! ```rust
//! use mig_inventory::{Component, ComponentKind};
//! use mig_planner::{plan_order, DependencyGraph};
//!
//! let invoice = Component::new("inv", "Invoice__c", ComponentKind::DataObject);
//! let service = Component::new("svc", "InvoiceService", ComponentKind::CodeModule)
//!     .with_requires(invoice.to_ref());
//! let inventory = vec![service, invoice];
//!
//! let plan = plan_order(&inventory);
//! assert_eq!(plan.order_ids(), ["inv", "svc"]);
//! assert!(plan.cycles.is_empty());
//!
//! let graph = DependencyGraph::build(&inventory);
//! assert!(!graph.can_migrate(&inventory[0]));
//! ```

#![warn(missing_docs)]

pub mod graph;
pub mod plan;
pub mod progress;
pub mod readiness;
mod traversal;

// Re-exports
pub use graph::DependencyGraph;
pub use plan::MigrationPlan;
pub use progress::MigrationProgress;

use mig_inventory::Component;

/// Build the declared-edge graph of `inventory` and plan it
#[must_use]
pub fn plan_order(inventory: &[Component]) -> MigrationPlan {
    DependencyGraph::build(inventory).plan()
}

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for planning
    pub use crate::{plan_order, DependencyGraph, MigrationPlan, MigrationProgress};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
