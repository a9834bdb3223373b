//! Ordered, duplicate-free field list with the primitive edit operations

use crate::model::{EntityMetadataProvider, FieldDescriptor, MetadataRegistry};

/// The working field list for one entity
///
/// Every element is drawn from the entity's full field set and appears at most
/// once. Edits that cannot be applied (unknown names, missing anchors) are
/// silent no-ops rather than errors.
pub struct FieldList<'a> {
    pub(super) entity: &'a dyn EntityMetadataProvider,
    pub(super) registry: Option<&'a dyn MetadataRegistry>,
    pub(super) fields: Vec<&'a FieldDescriptor>,
}

impl<'a> FieldList<'a> {
    /// Create a list seeded with the entity's base fields.
    ///
    /// Related entities named by relation bindings are looked up in `registry`.
    pub fn new(
        entity: &'a dyn EntityMetadataProvider,
        registry: &'a dyn MetadataRegistry,
    ) -> Self {
        Self {
            registry: Some(registry),
            ..Self::standalone(entity)
        }
    }

    /// Create a list for an entity considered on its own.
    ///
    /// Only self relations can be resolved; bindings to other entities are skipped.
    pub fn standalone(entity: &'a dyn EntityMetadataProvider) -> Self {
        let mut fields: Vec<&'a FieldDescriptor> = Vec::new();
        for field in entity.base_fields() {
            if !fields.iter().any(|f| f.is_named(&field.name)) {
                fields.push(field);
            }
        }
        Self {
            entity,
            registry: None,
            fields,
        }
    }

    pub fn entity(&self) -> &'a dyn EntityMetadataProvider {
        self.entity
    }

    pub fn fields(&self) -> &[&'a FieldDescriptor] {
        &self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a FieldDescriptor> + '_ {
        self.fields.iter().copied()
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Position of the first field named `name` (case-insensitive)
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.is_named(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Detach the list from the metadata it borrows from.
    pub fn into_owned(self) -> Vec<FieldDescriptor> {
        self.fields.into_iter().cloned().collect()
    }

    /// Append `name` from the full field set, unless unknown or already present.
    pub fn add(&mut self, name: &str) -> &mut Self {
        let entity = self.entity;
        if let Some(field) = entity.find_field(name) {
            if !self.contains(&field.name) {
                self.fields.push(field);
            }
        }
        self
    }

    /// Insert `name` right after the first field named `anchor`.
    ///
    /// A field that is already listed is moved there instead. No-op when the
    /// anchor is absent or `name` is unknown.
    pub fn add_after(&mut self, anchor: &str, name: &str) -> &mut Self {
        let Some(idx) = self.position(anchor) else {
            return self;
        };
        let entity = self.entity;
        if let Some(field) = entity.find_field(name) {
            self.place_after(idx, field);
        }
        self
    }

    /// Put `field` directly behind the field at `anchor`, moving it if listed.
    pub(super) fn place_after(&mut self, anchor: usize, field: &'a FieldDescriptor) {
        match self.position(&field.name) {
            None => self.fields.insert(anchor + 1, field),
            Some(existing) if existing == anchor || existing == anchor + 1 => {}
            Some(existing) => {
                self.fields.remove(existing);
                let at = if existing < anchor { anchor } else { anchor + 1 };
                self.fields.insert(at, field);
            }
        }
    }

    /// Remove every field named `name`.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        self.fields.retain(|f| !f.is_named(name));
        self
    }

    /// Swap the first field named `old` for `new`, keeping its position.
    ///
    /// Degrades to removing `old` when `new` is unknown or already listed elsewhere.
    pub fn replace(&mut self, old: &str, new: &str) -> &mut Self {
        let Some(idx) = self.position(old) else {
            return self;
        };

        let entity = self.entity;
        match entity.find_field(new) {
            None => {
                tracing::debug!(
                    entity = entity.name(),
                    old,
                    new,
                    "replacement unknown, removing field"
                );
                self.fields.remove(idx);
            }
            Some(field) => match self.position(&field.name) {
                Some(existing) if existing != idx => {
                    tracing::debug!(
                        entity = entity.name(),
                        old,
                        new,
                        "replacement already listed, removing field"
                    );
                    self.fields.remove(idx);
                }
                _ => self.fields[idx] = field,
            },
        }
        self
    }
}

impl std::fmt::Debug for FieldList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldList")
            .field("entity", &self.entity.name())
            .field("fields", &self.names())
            .finish()
    }
}
