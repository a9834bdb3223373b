//! Name-keyed registry of entity metadata

use std::collections::HashMap;

use super::entity::EntityMetadata;
use super::provider::{EntityMetadataProvider, MetadataRegistry};

/// Registered entities, looked up case-insensitively by name
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entities: Vec<EntityMetadata>,
    by_name: HashMap<String, usize>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity.
    ///
    /// Returns the entity back as `Err` if one with the same name is already registered.
    pub fn register(&mut self, entity: EntityMetadata) -> Result<(), EntityMetadata> {
        let key = entity.name.to_lowercase();
        if self.by_name.contains_key(&key) {
            return Err(entity);
        }
        self.by_name.insert(key, self.entities.len());
        self.entities.push(entity);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&EntityMetadata> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&idx| &self.entities[idx])
    }

    /// Entities in registration order
    pub fn entities(&self) -> &[EntityMetadata] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl MetadataRegistry for EntityRegistry {
    fn resolve(&self, entity_name: &str) -> Option<&dyn EntityMetadataProvider> {
        self.get(entity_name)
            .map(|e| e as &dyn EntityMetadataProvider)
    }
}

impl FromIterator<EntityMetadata> for EntityRegistry {
    /// Later duplicates are dropped.
    fn from_iter<I: IntoIterator<Item = EntityMetadata>>(iter: I) -> Self {
        let mut registry = EntityRegistry::new();
        for entity in iter {
            let _ = registry.register(entity);
        }
        registry
    }
}
