//! Component classification
//!
//! Pure predicates deciding whether a component pre-exists on every org
//! (platform-standard), comes from an installed package, is a custom field
//! hung on a standard object, or is plain custom work to migrate.

use crate::config::ResolverConfig;
use crate::standard_objects::is_well_known_object;
use mig_inventory::{Component, ComponentKind, NamingConvention};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Migration class of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    /// Pre-exists on every org; never migrated
    PlatformStandard,
    /// Installed from a package; install the package instead
    Packaged,
    /// Custom field whose owning object is platform-standard
    CustomFieldOnStandardParent,
    /// Locally authored; migrated as a whole unit
    Custom,
}

/// Classifier bound to a naming convention and standard-object list
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    naming: NamingConvention,
    extra_standard: HashSet<String>,
}

impl Classifier {
    /// Create from configuration
    #[must_use]
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            naming: config.naming.clone(),
            extra_standard: config.extra_standard_objects.iter().cloned().collect(),
        }
    }

    /// Naming convention in use
    #[inline]
    #[must_use]
    pub fn naming(&self) -> &NamingConvention {
        &self.naming
    }

    /// Name is on the built-in or configured standard-object list
    #[must_use]
    pub fn is_well_known(&self, name: &str) -> bool {
        is_well_known_object(name) || self.extra_standard.contains(name)
    }

    /// Object name denotes a platform-standard object
    #[must_use]
    pub fn is_standard_object_name(&self, name: &str) -> bool {
        !self.naming.is_custom_name(name) && self.is_well_known(name)
    }

    /// Component pre-exists on every org
    ///
    /// Data objects qualify when un-namespaced, unsuffixed and well known.
    /// Data fields qualify when un-namespaced, not custom and hung on such an
    /// object (e.g. `Account.Name`). No other kind is ever platform-standard.
    #[must_use]
    pub fn is_platform_standard(&self, component: &Component) -> bool {
        if component.is_packaged() {
            return false;
        }
        match component.kind {
            ComponentKind::DataObject => self.is_standard_object_name(&component.name),
            ComponentKind::DataField => {
                !self.is_custom_field(component)
                    && self
                        .parent_name(component)
                        .is_some_and(|parent| self.is_standard_object_name(parent))
            }
            _ => false,
        }
    }

    /// Field whose local segment carries the custom suffix
    #[must_use]
    pub fn is_custom_field(&self, field: &Component) -> bool {
        field.kind == ComponentKind::DataField
            && self
                .naming
                .local_segment(&field.name)
                .is_some_and(|local| self.naming.is_custom_name(local))
    }

    /// Custom field whose parent object is platform-standard
    #[must_use]
    pub fn is_custom_field_on_standard_parent(&self, field: &Component) -> bool {
        self.is_custom_field(field)
            && self
                .parent_name(field)
                .is_some_and(|parent| self.is_standard_object_name(parent))
    }

    /// Parent object name of a field; `None` for other kinds and malformed names
    #[must_use]
    pub fn parent_name<'c>(&self, field: &'c Component) -> Option<&'c str> {
        if field.kind != ComponentKind::DataField {
            return None;
        }
        self.naming.parent_segment(&field.name)
    }

    /// Local segment of a field name
    #[must_use]
    pub fn local_name<'c>(&self, field: &'c Component) -> Option<&'c str> {
        if field.kind != ComponentKind::DataField {
            return None;
        }
        self.naming.local_segment(&field.name)
    }

    /// Combined classification
    ///
    /// Namespaced data objects stay [`Classification::Custom`]: they are
    /// handled as custom-equivalent dependencies. Any other namespaced
    /// component is [`Classification::Packaged`].
    #[must_use]
    pub fn classify(&self, component: &Component) -> Classification {
        if self.is_platform_standard(component) {
            Classification::PlatformStandard
        } else if component.is_packaged() && component.kind != ComponentKind::DataObject {
            Classification::Packaged
        } else if self.is_custom_field_on_standard_parent(component) {
            Classification::CustomFieldOnStandardParent
        } else {
            Classification::Custom
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(name: &str) -> Component {
        Component::new(name, name, ComponentKind::DataObject)
    }

    fn field(name: &str) -> Component {
        Component::new(name, name, ComponentKind::DataField)
    }

    #[test]
    fn standard_objects() {
        let classifier = Classifier::default();
        assert!(classifier.is_platform_standard(&object("Account")));
        assert!(!classifier.is_platform_standard(&object("Invoice__c")));
        assert!(!classifier.is_platform_standard(&object("Warehouse")));
        assert!(!classifier.is_platform_standard(&object("Account").with_namespace("acme")));
    }

    #[test]
    fn namespaced_object_is_custom_equivalent() {
        let classifier = Classifier::default();
        let packaged = object("acme__Ledger__c").with_namespace("acme");
        assert_eq!(classifier.classify(&packaged), Classification::Custom);
    }

    #[test]
    fn namespaced_code_is_packaged() {
        let classifier = Classifier::default();
        let class = Component::new("c", "LedgerService", ComponentKind::CodeModule)
            .with_namespace("acme");
        assert_eq!(classifier.classify(&class), Classification::Packaged);
        assert!(!classifier.is_platform_standard(&class));
    }

    #[test]
    fn code_is_never_standard() {
        let classifier = Classifier::default();
        for kind in [
            ComponentKind::CodeModule,
            ComponentKind::TriggerRule,
            ComponentKind::AutomationFlow,
            ComponentKind::Page,
            ComponentKind::UiBundle,
        ] {
            let c = Component::new("x", "Account", kind);
            assert_eq!(classifier.classify(&c), Classification::Custom, "{kind}");
        }
    }

    #[test]
    fn custom_field_on_standard_parent() {
        let classifier = Classifier::default();
        let loyalty = field("Account.Loyalty__c");
        assert!(classifier.is_custom_field(&loyalty));
        assert!(classifier.is_custom_field_on_standard_parent(&loyalty));
        assert_eq!(classifier.parent_name(&loyalty), Some("Account"));
        assert_eq!(classifier.classify(&loyalty), Classification::CustomFieldOnStandardParent);
    }

    #[test]
    fn custom_field_on_custom_parent() {
        let classifier = Classifier::default();
        let total = field("Invoice__c.Total__c");
        assert!(classifier.is_custom_field(&total));
        assert!(!classifier.is_custom_field_on_standard_parent(&total));
        assert_eq!(classifier.classify(&total), Classification::Custom);
    }

    #[test]
    fn classification_is_per_field_not_per_parent() {
        let classifier = Classifier::default();
        let color = field("Widget__c.Color");
        assert!(!classifier.is_custom_field(&color));
        assert!(!classifier.is_platform_standard(&color));
        assert_eq!(classifier.classify(&color), Classification::Custom);
    }

    #[test]
    fn standard_field_on_standard_object() {
        let classifier = Classifier::default();
        let name = field("Account.Name");
        assert!(classifier.is_platform_standard(&name));
        assert_eq!(classifier.classify(&name), Classification::PlatformStandard);
    }

    #[test]
    fn malformed_field_name() {
        let classifier = Classifier::default();
        let broken = field("Loyalty__c");
        assert_eq!(classifier.parent_name(&broken), None);
        assert!(!classifier.is_custom_field(&broken));
        assert_eq!(classifier.classify(&broken), Classification::Custom);
    }

    #[test]
    fn configured_standard_objects() {
        let config = ResolverConfig::new().with_standard_object("Warehouse");
        let classifier = Classifier::new(&config);
        assert!(classifier.is_platform_standard(&object("Warehouse")));
        assert!(classifier.is_custom_field_on_standard_parent(&field("Warehouse.Bin__c")));
    }

    #[test]
    fn parent_name_only_for_fields() {
        let classifier = Classifier::default();
        assert_eq!(classifier.parent_name(&object("Account.Thing")), None);
    }
}
