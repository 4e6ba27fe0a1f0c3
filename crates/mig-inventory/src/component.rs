//! Component records
//!
//! A [`Component`] is one configuration unit as reported by the source org:
//! its identity, kind, package origin, declared dependencies and the
//! migration status maintained by the execution layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of configuration component
///
/// Kebab-case names are canonical; platform metadata type names are
/// accepted as aliases so connector output can be fed in unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    /// Code module (class)
    #[serde(alias = "ApexClass")]
    CodeModule,

    /// Trigger rule attached to a data object
    #[serde(alias = "ApexTrigger")]
    TriggerRule,

    /// Data-model object
    #[serde(alias = "CustomObject")]
    DataObject,

    /// Field on a data-model object, named `Parent.Field`
    #[serde(alias = "CustomField")]
    DataField,

    /// Declarative automation flow
    #[serde(alias = "Flow")]
    AutomationFlow,

    /// Server-rendered or report page
    #[serde(alias = "ApexPage")]
    Page,

    /// Client-side UI bundle
    #[serde(alias = "LightningComponentBundle", alias = "AuraDefinitionBundle")]
    UiBundle,
}

impl ComponentKind {
    /// All kinds, in declaration order
    pub const ALL: [ComponentKind; 7] = [
        Self::CodeModule,
        Self::TriggerRule,
        Self::DataObject,
        Self::DataField,
        Self::AutomationFlow,
        Self::Page,
        Self::UiBundle,
    ];

    /// Canonical kebab-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CodeModule => "code-module",
            Self::TriggerRule => "trigger-rule",
            Self::DataObject => "data-object",
            Self::DataField => "data-field",
            Self::AutomationFlow => "automation-flow",
            Self::Page => "page",
            Self::UiBundle => "ui-bundle",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Migration status, mutated by the execution layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MigrationStatus {
    /// Not picked up yet
    #[default]
    NotStarted,
    /// Currently being deployed
    InProgress,
    /// Deployed to the target org
    Done,
    /// Deployment failed or was refused
    Blocked,
    /// Deliberately left out
    Skipped,
}

impl MigrationStatus {
    /// All statuses, in declaration order
    pub const ALL: [MigrationStatus; 5] = [
        Self::NotStarted,
        Self::InProgress,
        Self::Done,
        Self::Blocked,
        Self::Skipped,
    ];

    /// Component has been deployed
    #[inline]
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }

    /// Component still has work ahead of it (not started or in progress)
    #[inline]
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::NotStarted | Self::InProgress)
    }
}

impl fmt::Display for MigrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Done => "done",
            Self::Blocked => "blocked",
            Self::Skipped => "skipped",
        };
        f.write_str(s)
    }
}

fn default_required() -> bool {
    true
}

/// One entry of a declared `requires` / `required_by` list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyRef {
    /// Referenced component id
    pub id: String,
    /// Referenced component qualified name
    #[serde(default)]
    pub name: String,
    /// Referenced component kind
    pub kind: ComponentKind,
    /// Whether the dependent is un-migratable without the target
    #[serde(default = "default_required")]
    pub required: bool,
}

impl DependencyRef {
    /// Create a required reference
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            required: true,
        }
    }

    /// Mark the reference as informational only
    #[inline]
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Directed edge: `source` requires `target`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    /// Dependent component id
    pub source: String,
    /// Required component id
    pub target: String,
    /// Whether the edge gates migration
    pub required: bool,
}

impl Dependency {
    /// Create an edge
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>, required: bool) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            required,
        }
    }
}

/// One configuration unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Identifier, unique within an org
    pub id: String,

    /// Qualified name, e.g. `Invoice__c` or `Invoice__c.Total__c`
    pub name: String,

    /// Component kind
    pub kind: ComponentKind,

    /// Installed-package namespace; empty or absent for locally authored components
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Declared dependencies of this component
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<DependencyRef>,

    /// Declared dependents of this component
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_by: Vec<DependencyRef>,

    /// Migration status
    #[serde(default)]
    pub status: MigrationStatus,
}

impl Component {
    /// Create a locally authored, not-started component with no declarations
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            namespace: None,
            requires: Vec::new(),
            required_by: Vec::new(),
            status: MigrationStatus::NotStarted,
        }
    }

    /// With package namespace
    #[inline]
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// With an additional declared dependency
    #[inline]
    #[must_use]
    pub fn with_requires(mut self, dependency: DependencyRef) -> Self {
        self.requires.push(dependency);
        self
    }

    /// With an additional declared dependent
    #[inline]
    #[must_use]
    pub fn with_required_by(mut self, dependent: DependencyRef) -> Self {
        self.required_by.push(dependent);
        self
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: MigrationStatus) -> Self {
        self.status = status;
        self
    }

    /// Non-empty namespace, if any
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|ns| !ns.trim().is_empty())
    }

    /// Originates from an installed package
    #[inline]
    #[must_use]
    pub fn is_packaged(&self) -> bool {
        self.namespace().is_some()
    }

    /// Reference to this component, suitable for another component's `requires`
    #[must_use]
    pub fn to_ref(&self) -> DependencyRef {
        DependencyRef::new(self.id.clone(), self.name.clone(), self.kind)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.kind, self.name, self.id)
    }
}
