//! Metadata provider contracts
//!
//! The field list pipeline never inspects entity types directly. Everything it
//! needs (field sets, the master field, relation bindings, the audit capability)
//! comes through these two traits.

use super::field::{EntityProperty, FieldDescriptor, RelationBinding};

/// Read-only metadata for one entity type
pub trait EntityMetadataProvider {
    /// Entity type name
    fn name(&self) -> &str;

    /// Every field the entity exposes: stored columns and extended properties
    fn all_fields(&self) -> &[FieldDescriptor];

    /// The default field list a new builder is seeded from
    fn base_fields(&self) -> Vec<&FieldDescriptor>;

    /// Distinguished human-readable field (e.g. `Name`)
    fn master_field(&self) -> Option<&FieldDescriptor>;

    /// Every declared property, in declaration order
    fn properties(&self) -> &[EntityProperty];

    /// Whether the entity records who created and last updated each row
    fn has_audit_capability(&self) -> bool;

    /// Case-insensitive lookup in the full field set
    fn find_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.all_fields().iter().find(|f| f.is_named(name))
    }

    /// Case-insensitive lookup in the declared property set
    fn find_property(&self, name: &str) -> Option<&EntityProperty> {
        self.properties()
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Relation binding declared on `property`, if any
    fn relation_binding(&self, property: &str) -> Option<&RelationBinding> {
        self.find_property(property)
            .and_then(|p| p.relation.as_ref())
    }
}

/// Resolves the metadata provider of a related entity by name
pub trait MetadataRegistry {
    fn resolve(&self, entity_name: &str) -> Option<&dyn EntityMetadataProvider>;
}
