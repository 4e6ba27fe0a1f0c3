//! Error types for inventory loading
//!
//! The analysis engine itself never fails; these errors only surface while
//! turning connector output into an [`Inventory`](crate::Inventory).

/// Inventory loading and validation errors
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// Inventory file could not be read
    #[error("failed to read inventory: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not a valid inventory
    #[error("malformed inventory document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two components share an id
    #[error("duplicate component id: {id}")]
    DuplicateId {
        /// The repeated id
        id: String,
    },

    /// Component has an empty id
    #[error("component `{name}` has an empty id")]
    EmptyId {
        /// Name of the offending component
        name: String,
    },
}

impl InventoryError {
    /// Check if error comes from the document content rather than the filesystem
    #[inline]
    #[must_use]
    pub fn is_content_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
