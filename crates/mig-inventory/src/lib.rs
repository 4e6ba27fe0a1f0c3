//! Component inventory for org-to-org migration
//!
//! The inventory is the materialized snapshot of configuration components
//! handed to the engine by the connector layer. This crate provides:
//! - **Component**: one migratable unit with its declared dependencies
//! - **NamingConvention**: parent separator and custom-suffix rules
//! - **InventoryIndex**: immutable id/name lookup built once per run
//! - **Notes**: per-component analysis notes
//!
//! # Example
//!
//! ```rust
//! use mig_inventory::{Component, ComponentKind, InventoryIndex, NamingConvention};
//!
//! let inventory = vec![
//!     Component::new("obj-1", "Invoice__c", ComponentKind::DataObject),
//!     Component::new("fld-1", "Invoice__c.Total__c", ComponentKind::DataField),
//! ];
//!
//! let index = InventoryIndex::build(&inventory, &NamingConvention::default());
//! assert_eq!(index.fields_of("Invoice__c").count(), 1);
//! ```

#![warn(missing_docs)]

pub mod component;
pub mod error;
pub mod index;
pub mod load;
pub mod naming;
pub mod notes;

// Re-exports
pub use component::{Component, ComponentKind, Dependency, DependencyRef, MigrationStatus};
pub use error::InventoryError;
pub use index::InventoryIndex;
pub use load::Inventory;
pub use naming::{NamingConvention, DEFAULT_CUSTOM_SUFFIX, DEFAULT_SEPARATOR};
pub use notes::Notes;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with inventories
    pub use crate::{
        Component, ComponentKind, Dependency, DependencyRef, Inventory, InventoryIndex,
        MigrationStatus, NamingConvention, Notes,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
