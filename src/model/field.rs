//! Field descriptor types

use std::fmt;

/// Data type of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    String,
    Boolean,
    Int16,
    Int32,
    Int64,
    Double,
    Decimal,
    DateTime,
    Guid,
    Binary,
    /// Anything the catalog names that isn't one of the scalar kinds above
    Other(String),
}

impl DataType {
    /// True for character data
    pub fn is_text(&self) -> bool {
        matches!(self, DataType::String)
    }

    /// Canonical name, as written back into catalogs and output
    pub fn name(&self) -> &str {
        match self {
            DataType::String => "String",
            DataType::Boolean => "Boolean",
            DataType::Int16 => "Int16",
            DataType::Int32 => "Int32",
            DataType::Int64 => "Int64",
            DataType::Double => "Double",
            DataType::Decimal => "Decimal",
            DataType::DateTime => "DateTime",
            DataType::Guid => "Guid",
            DataType::Binary => "Byte[]",
            DataType::Other(name) => name,
        }
    }
}

impl std::str::FromStr for DataType {
    type Err = std::convert::Infallible;

    /// Accepts CLR type names and the usual SQL spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let data_type = match trimmed.to_lowercase().as_str() {
            "string" | "system.string" | "nvarchar" | "varchar" | "nchar" | "char" | "ntext"
            | "text" => DataType::String,
            "boolean" | "bool" | "system.boolean" | "bit" => DataType::Boolean,
            "int16" | "short" | "smallint" => DataType::Int16,
            "int32" | "int" | "system.int32" | "integer" => DataType::Int32,
            "int64" | "long" | "system.int64" | "bigint" => DataType::Int64,
            "double" | "float" | "real" => DataType::Double,
            "decimal" | "money" | "numeric" => DataType::Decimal,
            "datetime" | "system.datetime" | "datetime2" | "date" => DataType::DateTime,
            "guid" | "uniqueidentifier" => DataType::Guid,
            "byte[]" | "binary" | "varbinary" | "image" => DataType::Binary,
            _ => DataType::Other(trimmed.to_string()),
        };
        Ok(data_type)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Metadata for one entity field: either a stored column or an extended (computed) property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub data_type: DataType,
    /// Declared length; `None` or a non-positive value means unbounded or not applicable
    pub max_length: Option<i32>,
    /// True for physically persisted columns, false for extended properties
    pub is_stored: bool,
    pub display_name: Option<String>,
    pub description: Option<String>,
}

impl FieldDescriptor {
    /// A stored column
    pub fn column(name: impl Into<String>, data_type: DataType, max_length: Option<i32>) -> Self {
        Self {
            name: name.into(),
            data_type,
            max_length,
            is_stored: true,
            display_name: None,
            description: None,
        }
    }

    /// An extended (computed) property
    pub fn extended(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            max_length: None,
            is_stored: false,
            display_name: None,
            description: None,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Case-insensitive name match
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Declares that a property's displayed value comes from a related entity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationBinding {
    /// Related entity name; empty means the entity itself
    pub relation_entity: String,
    /// Local column the property maps from
    pub local_column: String,
    /// Column on this entity to substitute, used only by self-relations
    pub relation_column: Option<String>,
}

impl RelationBinding {
    pub fn new(relation_entity: impl Into<String>, local_column: impl Into<String>) -> Self {
        Self {
            relation_entity: relation_entity.into(),
            local_column: local_column.into(),
            relation_column: None,
        }
    }

    pub fn with_relation_column(mut self, relation_column: impl Into<String>) -> Self {
        self.relation_column = Some(relation_column.into());
        self
    }

    /// True when the binding points back at `entity_name` (or at nothing)
    pub fn is_self_relation(&self, entity_name: &str) -> bool {
        self.relation_entity.is_empty() || self.relation_entity.eq_ignore_ascii_case(entity_name)
    }
}

/// A property declared by an entity type: a column, an extended field, or a navigation property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityProperty {
    pub name: String,
    pub relation: Option<RelationBinding>,
}

impl EntityProperty {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relation: None,
        }
    }
}
