//! Entity metadata model

mod entity;
mod field;
mod provider;
mod registry;

pub use entity::EntityMetadata;
pub use field::{DataType, EntityProperty, FieldDescriptor, RelationBinding};
pub use provider::{EntityMetadataProvider, MetadataRegistry};
pub use registry::EntityRegistry;
