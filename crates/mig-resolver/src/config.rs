//! Resolver configuration

use mig_inventory::NamingConvention;
use serde::{Deserialize, Serialize};

/// Resolver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Qualified-name rules
    pub naming: NamingConvention,
    /// Object names treated as platform-standard in addition to the built-in list
    pub extra_standard_objects: Vec<String>,
    /// Pull the custom fields of platform-standard objects into the closure
    ///
    /// On by default. Turning it off keeps a selection that passes through a
    /// standard object from dragging in every custom field hung on it.
    pub expand_standard_objects: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            naming: NamingConvention::default(),
            extra_standard_objects: Vec::new(),
            expand_standard_objects: true,
        }
    }
}

impl ResolverConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With naming convention
    #[inline]
    #[must_use]
    pub fn with_naming(mut self, naming: NamingConvention) -> Self {
        self.naming = naming;
        self
    }

    /// With an additional platform-standard object name
    #[inline]
    #[must_use]
    pub fn with_standard_object(mut self, name: impl Into<String>) -> Self {
        self.extra_standard_objects.push(name.into());
        self
    }

    /// With standard-object expansion
    #[inline]
    #[must_use]
    pub fn with_expand_standard_objects(mut self, expand: bool) -> Self {
        self.expand_standard_objects = expand;
        self
    }
}
