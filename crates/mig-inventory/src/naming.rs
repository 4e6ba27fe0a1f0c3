//! Qualified-name conventions
//!
//! Fields are named `Parent.Local`; locally authored objects and fields
//! carry the custom suffix (`__c`).

use serde::{Deserialize, Serialize};

/// Default separator between parent and local segment
pub const DEFAULT_SEPARATOR: char = '.';

/// Default suffix marking locally authored objects and fields
pub const DEFAULT_CUSTOM_SUFFIX: &str = "__c";

/// Separator and suffix rules applied to qualified names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConvention {
    /// Parent/local separator
    pub separator: char,
    /// Custom-suffix marker
    pub custom_suffix: String,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            custom_suffix: DEFAULT_CUSTOM_SUFFIX.to_string(),
        }
    }
}

impl NamingConvention {
    /// Create the default convention
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With separator
    #[inline]
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// With custom suffix
    #[inline]
    #[must_use]
    pub fn with_custom_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.custom_suffix = suffix.into();
        self
    }

    /// Split a field name at the first separator
    ///
    /// Returns `None` when the separator is missing or either side is empty.
    #[must_use]
    pub fn split_field<'n>(&self, name: &'n str) -> Option<(&'n str, &'n str)> {
        let (parent, local) = name.split_once(self.separator)?;
        if parent.is_empty() || local.is_empty() {
            return None;
        }
        Some((parent, local))
    }

    /// Parent segment of a field name
    #[inline]
    #[must_use]
    pub fn parent_segment<'n>(&self, name: &'n str) -> Option<&'n str> {
        self.split_field(name).map(|(parent, _)| parent)
    }

    /// Local segment of a field name
    #[inline]
    #[must_use]
    pub fn local_segment<'n>(&self, name: &'n str) -> Option<&'n str> {
        self.split_field(name).map(|(_, local)| local)
    }

    /// Name carries the custom suffix
    #[inline]
    #[must_use]
    pub fn is_custom_name(&self, name: &str) -> bool {
        !self.custom_suffix.is_empty() && name.ends_with(self.custom_suffix.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_separator() {
        let naming = NamingConvention::default();
        assert_eq!(
            naming.split_field("Invoice__c.Total__c"),
            Some(("Invoice__c", "Total__c"))
        );
        assert_eq!(naming.split_field("A.B.C"), Some(("A", "B.C")));
    }

    #[test]
    fn malformed_names_do_not_split() {
        let naming = NamingConvention::default();
        assert_eq!(naming.split_field("Invoice__c"), None);
        assert_eq!(naming.split_field(".Total__c"), None);
        assert_eq!(naming.split_field("Invoice__c."), None);
    }

    #[test]
    fn custom_suffix_detection() {
        let naming = NamingConvention::default();
        assert!(naming.is_custom_name("Invoice__c"));
        assert!(!naming.is_custom_name("Account"));
        assert!(!naming.is_custom_name("Invoice__mdt"));

        let naming = naming.with_custom_suffix("__x").with_separator(':');
        assert!(naming.is_custom_name("Ext__x"));
        assert_eq!(naming.parent_segment("Ext__x:Col__x"), Some("Ext__x"));
    }

    #[test]
    fn empty_suffix_marks_nothing_custom() {
        let naming = NamingConvention::default().with_custom_suffix("");
        assert!(!naming.is_custom_name("Anything"));
    }
}
