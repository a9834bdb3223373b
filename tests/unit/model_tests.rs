//! Unit tests for the entity metadata model

use entity_fields::{DataType, EntityMetadataProvider, RelationBinding};

use crate::common::{membership_registry, user_entity};

#[test]
fn test_data_type_from_clr_and_sql_names() {
    let cases = [
        ("String", DataType::String),
        ("NVARCHAR", DataType::String),
        ("varchar", DataType::String),
        ("Int32", DataType::Int32),
        ("int", DataType::Int32),
        ("bigint", DataType::Int64),
        ("bit", DataType::Boolean),
        ("DateTime", DataType::DateTime),
        ("datetime2", DataType::DateTime),
        ("uniqueidentifier", DataType::Guid),
        ("money", DataType::Decimal),
        ("Byte[]", DataType::Binary),
    ];
    for (raw, expected) in cases {
        assert_eq!(raw.parse::<DataType>().unwrap(), expected, "parsing {}", raw);
    }
}

#[test]
fn test_data_type_names_round_trip_through_display() {
    assert_eq!(DataType::Binary.to_string(), "Byte[]");
    assert_eq!(DataType::Other("xml".to_string()).to_string(), "xml");
    assert!(DataType::String.is_text());
    assert!(!DataType::Guid.is_text());
}

#[test]
fn test_relation_binding_self_detection() {
    assert!(RelationBinding::new("", "ParentID").is_self_relation("Menu"));
    assert!(RelationBinding::new("MENU", "ParentID").is_self_relation("Menu"));
    assert!(!RelationBinding::new("Role", "RoleID").is_self_relation("Menu"));
}

#[test]
fn test_user_entity_provider_contract() {
    let user = user_entity(true);

    assert_eq!(user.name(), "User");
    assert_eq!(user.base_fields().len(), 15);
    assert_eq!(user.all_fields().len(), 21);
    assert_eq!(user.master_field().unwrap().name, "Name");
    assert!(user.has_audit_capability());

    // Relation bindings live on navigation properties declared last
    let bound: Vec<&str> = user
        .properties()
        .iter()
        .filter(|p| p.relation.is_some())
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(bound, vec!["Dept", "Role"]);
}

#[test]
fn test_registry_resolves_related_providers() {
    use entity_fields::MetadataRegistry;

    let registry = membership_registry(false);
    let department = registry.resolve("department").unwrap();
    assert_eq!(department.master_field().unwrap().name, "Name");
    assert!(registry.resolve("Company").is_none());
}
