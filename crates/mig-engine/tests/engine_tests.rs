use mig_engine::prelude::*;
use mig_engine::{ConfigError, InventoryError, ResolverConfig};
use pretty_assertions::assert_eq;
use std::io::Write;

const INVENTORY: &str = r#"{
  "components": [
    {"id": "01I1", "name": "Invoice__c", "kind": "CustomObject"},
    {"id": "00N1", "name": "Invoice__c.Total__c", "kind": "CustomField"},
    {"id": "00N2", "name": "Account.Loyalty__c", "kind": "CustomField"},
    {"id": "0011", "name": "Account", "kind": "CustomObject"},
    {"id": "01p1", "name": "InvoiceService", "kind": "ApexClass",
     "requires": [
       {"id": "01I1", "name": "Invoice__c", "kind": "data-object"},
       {"id": "00N2", "name": "Account.Loyalty__c", "kind": "data-field"}
     ]},
    {"id": "01q1", "name": "InvoiceTrigger", "kind": "ApexTrigger", "status": "done",
     "requires": [{"id": "01p1", "name": "InvoiceService", "kind": "code-module", "required": false}]},
    {"id": "0Ho1", "name": "pkg__Widget", "kind": "LightningComponentBundle", "namespace": "pkg"}
  ]
}"#;

fn inventory() -> Inventory {
    Inventory::from_json_str(INVENTORY).unwrap()
}

#[test]
fn analyze_service_selection() {
    let inventory = inventory();
    let result = Engine::default().analyze(&["01p1"], inventory.components());

    let custom: Vec<&str> = result.custom_to_migrate.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(custom, ["01p1", "01I1", "00N1"]);
    assert_eq!(result.standard_groups.len(), 1);
    assert_eq!(result.standard_groups[0].parent, "Account");
    assert_eq!(result.standard_groups[0].field_names('.'), ["Loyalty__c"]);
    assert_eq!(result.excluded.len(), 1);
    assert_eq!(result.excluded[0].component.id, "0011");
}

#[test]
fn packaged_selection_is_excluded() {
    let inventory = inventory();
    let result = analyze(&["0Ho1"], inventory.components());

    assert!(result.is_empty());
    assert_eq!(result.excluded.len(), 1);
}

#[test]
fn plan_and_readiness() {
    let inventory = inventory();
    let plan = plan_order(inventory.components());

    assert!(plan.is_acyclic());
    assert!(plan.position("01I1") < plan.position("01p1"));
    assert!(plan.position("00N2") < plan.position("01p1"));
    assert!(plan.position("01p1") < plan.position("01q1"));

    let service = &inventory.components()[4];
    assert!(!can_migrate(service, inventory.components()));

    let mut inventory = inventory;
    assert!(inventory.set_status("01I1", MigrationStatus::Done));
    assert!(inventory.set_status("00N2", MigrationStatus::Done));
    assert!(can_migrate(&inventory.components()[4], inventory.components()));
}

#[test]
fn config_file_changes_classification() {
    let inventory = inventory();

    let result = Engine::default().analyze(&["0011"], inventory.components());
    let ids: Vec<&str> = result.closure.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["0011", "00N2"]);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[resolver]\nexpand_standard_objects = false").unwrap();
    let config = EngineConfig::from_path(file.path()).unwrap();
    let narrow = Engine::new(config);

    let result = narrow.analyze(&["0011"], inventory.components());
    assert_eq!(result.closure.len(), 1);
    assert!(result.notes.contains("0011"));

    let explicit = Engine::new(EngineConfig::new().with_resolver(ResolverConfig::new()));
    assert_eq!(explicit.analyze(&["0011"], inventory.components()).closure.len(), 2);
}

#[test]
fn malformed_inputs_fail_to_load() {
    let err = EngineConfig::from_toml_str("resolver = 3").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = Inventory::from_json_str(r#"[{"id": "a", "name": "A", "kind": "page"},
                                           {"id": "a", "name": "B", "kind": "page"}]"#)
        .unwrap_err();
    assert!(matches!(err, InventoryError::DuplicateId { ref id } if id == "a"));
}
