//! In-memory entity metadata

use super::field::{EntityProperty, FieldDescriptor, RelationBinding};
use super::provider::EntityMetadataProvider;

/// Metadata for one entity type
///
/// Stored columns come first in `fields`, followed by extended fields, each in
/// declaration order. `properties` lists every declared property, including
/// navigation properties that have no field of their own.
#[derive(Debug, Clone, Default)]
pub struct EntityMetadata {
    pub name: String,
    fields: Vec<FieldDescriptor>,
    properties: Vec<EntityProperty>,
    master: Option<String>,
    audit: bool,
}

impl EntityMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a stored column.
    pub fn with_column(mut self, mut field: FieldDescriptor) -> Self {
        field.is_stored = true;
        self.properties.push(EntityProperty::new(field.name.clone()));
        // Keep stored columns ahead of extended fields
        let at = self.fields.iter().take_while(|f| f.is_stored).count();
        self.fields.insert(at, field);
        self
    }

    /// Add an extended (computed) field.
    pub fn with_extended(mut self, mut field: FieldDescriptor) -> Self {
        field.is_stored = false;
        self.properties.push(EntityProperty::new(field.name.clone()));
        self.fields.push(field);
        self
    }

    /// Add a property that is not a displayable field.
    pub fn with_navigation(mut self, name: impl Into<String>) -> Self {
        self.properties.push(EntityProperty::new(name));
        self
    }

    /// Attach a relation binding to a declared property.
    ///
    /// Declares a navigation property of that name first if none exists.
    pub fn with_relation(mut self, property: &str, binding: RelationBinding) -> Self {
        match self
            .properties
            .iter_mut()
            .find(|p| p.name.eq_ignore_ascii_case(property))
        {
            Some(existing) => existing.relation = Some(binding),
            None => self.properties.push(EntityProperty {
                name: property.to_string(),
                relation: Some(binding),
            }),
        }
        self
    }

    /// Mark the named field as the master field.
    pub fn with_master(mut self, name: impl Into<String>) -> Self {
        self.master = Some(name.into());
        self
    }

    pub fn with_audit(mut self, audit: bool) -> Self {
        self.audit = audit;
        self
    }

    /// Number of stored columns
    pub fn column_count(&self) -> usize {
        self.fields.iter().filter(|f| f.is_stored).count()
    }
}

impl EntityMetadataProvider for EntityMetadata {
    fn name(&self) -> &str {
        &self.name
    }

    fn all_fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    fn base_fields(&self) -> Vec<&FieldDescriptor> {
        self.fields.iter().filter(|f| f.is_stored).collect()
    }

    fn master_field(&self) -> Option<&FieldDescriptor> {
        match &self.master {
            Some(master) => self.find_field(master),
            None => self
                .fields
                .iter()
                .find(|f| f.is_stored && f.is_named("Name")),
        }
    }

    fn properties(&self) -> &[EntityProperty] {
        &self.properties
    }

    fn has_audit_capability(&self) -> bool {
        self.audit
    }
}
