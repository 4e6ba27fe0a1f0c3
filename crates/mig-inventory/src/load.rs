//! Inventory documents
//!
//! Connectors hand over a JSON document, either `{"components": [...]}` or a
//! bare array of components.

use crate::component::{Component, MigrationStatus};
use crate::error::InventoryError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Owned inventory snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Components in connector order
    pub components: Vec<Component>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InventoryDocument {
    Wrapped(Inventory),
    Bare(Vec<Component>),
}

impl Inventory {
    /// Create from components
    #[inline]
    #[must_use]
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    /// Parse and validate a JSON document
    ///
    /// # Errors
    /// Returns error if the document is malformed or fails [`Inventory::validate`]
    pub fn from_json_str(json: &str) -> Result<Self, InventoryError> {
        let document: InventoryDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Parse and validate a JSON document from a reader
    ///
    /// # Errors
    /// Returns error if reading fails, the document is malformed or fails validation
    pub fn from_reader(reader: impl Read) -> Result<Self, InventoryError> {
        let document: InventoryDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    /// Load and validate a JSON file
    ///
    /// # Errors
    /// Returns error if the file cannot be read, is malformed or fails validation
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InventoryError> {
        let file = std::fs::File::open(path.as_ref())?;
        let inventory = Self::from_reader(std::io::BufReader::new(file))?;
        tracing::debug!(
            "Loaded {} components from {}",
            inventory.len(),
            path.as_ref().display()
        );
        Ok(inventory)
    }

    fn from_document(document: InventoryDocument) -> Result<Self, InventoryError> {
        let inventory = match document {
            InventoryDocument::Wrapped(inventory) => inventory,
            InventoryDocument::Bare(components) => Self::new(components),
        };
        inventory.validate()?;
        Ok(inventory)
    }

    /// Check id uniqueness and non-emptiness
    ///
    /// # Errors
    /// Returns the first offending component
    pub fn validate(&self) -> Result<(), InventoryError> {
        let mut seen = HashSet::with_capacity(self.components.len());
        for component in &self.components {
            if component.id.trim().is_empty() {
                return Err(InventoryError::EmptyId {
                    name: component.name.clone(),
                });
            }
            if !seen.insert(component.id.as_str()) {
                return Err(InventoryError::DuplicateId {
                    id: component.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Components as a slice
    #[inline]
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

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

    /// Component by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Record a status change made by the execution layer
    ///
    /// Returns `false` if `id` is not in the inventory.
    pub fn set_status(&mut self, id: &str, status: MigrationStatus) -> bool {
        match self.components.iter_mut().find(|c| c.id == id) {
            Some(component) => {
                component.status = status;
                true
            }
            None => false,
        }
    }
}

impl From<Vec<Component>> for Inventory {
    fn from(components: Vec<Component>) -> Self {
        Self::new(components)
    }
}

impl AsRef<[Component]> for Inventory {
    fn as_ref(&self) -> &[Component] {
        &self.components
    }
}
