//! Parser for entity model files
//!
//! A model file describes one or more entity types:
//!
//! ```xml
//! <Tables>
//!   <Table Name="User" Audit="True">
//!     <Columns>
//!       <Column Name="ID" DataType="Int32" />
//!       <Column Name="Name" DataType="String" Length="50" Master="True" />
//!       <Column Name="RoleID" DataType="Int32" />
//!     </Columns>
//!     <Properties>
//!       <Property Name="RoleName" DataType="String" />
//!       <Property Name="Role">
//!         <BindRelation Column="RoleID" Table="Role" />
//!       </Property>
//!     </Properties>
//!   </Table>
//! </Tables>
//! ```

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use encoding_rs::WINDOWS_1252;
use roxmltree::{Document, Node};

use crate::error::FieldListError;
use crate::model::{DataType, EntityMetadata, FieldDescriptor, RelationBinding};
use crate::util::parse_bool;

/// Read a file as a string, trying UTF-8 first, then Windows-1252 as fallback
fn read_file_with_encoding_fallback(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;

    match String::from_utf8(bytes) {
        Ok(s) if s.starts_with('\u{feff}') => Ok(s['\u{feff}'.len_utf8()..].to_string()),
        Ok(s) => Ok(s),
        Err(err) => {
            // Model files saved by older Windows tooling
            let bytes = err.into_bytes();
            let (decoded, _, had_errors) = WINDOWS_1252.decode(&bytes);
            if had_errors {
                Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "File contains invalid characters",
                ))
            } else {
                Ok(decoded.into_owned())
            }
        }
    }
}

/// Parse a model file into entity metadata, in document order
pub fn parse_model_file(path: &Path) -> Result<Vec<EntityMetadata>> {
    let content =
        read_file_with_encoding_fallback(path).map_err(|e| FieldListError::CatalogReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
    parse_model_str(&content, path)
}

/// Parse model XML already in memory; `path` is only used for error messages
pub fn parse_model_str(content: &str, path: &Path) -> Result<Vec<EntityMetadata>> {
    let doc = Document::parse(content).map_err(|e| FieldListError::CatalogParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let root = doc.root_element();
    let tables: Vec<Node> = if root.tag_name().name() == "Table" {
        vec![root]
    } else {
        root.children()
            .filter(|n| n.tag_name().name() == "Table")
            .collect()
    };

    if tables.is_empty() {
        return Err(invalid(
            path,
            format!("expected <Table> elements under <{}>", root.tag_name().name()),
        )
        .into());
    }

    tables.into_iter().map(|t| parse_table(&t, path)).collect()
}

fn parse_table(table: &Node, path: &Path) -> Result<EntityMetadata> {
    let name = required_attribute(table, "Name", path)?;
    let mut entity = EntityMetadata::new(name.clone());
    let mut declared = HashSet::new();

    if let Some(audit) = bool_attribute(table, "Audit") {
        entity = entity.with_audit(audit);
    }

    // Columns
    for column in section_children(table, "Columns", "Column") {
        let field = parse_field(&column, path)?;
        let field_name = field.name.clone();
        declare(&mut declared, &field_name, &name, path)?;
        if bool_attribute(&column, "Master").unwrap_or(false) {
            entity = entity.with_master(field_name.clone());
        }
        entity = entity.with_column(field);
        if let Some(binding) = find_relation(&column) {
            entity = entity.with_relation(&field_name, binding);
        }
    }

    // Extended and navigation properties
    for property in section_children(table, "Properties", "Property") {
        let property_name = required_attribute(&property, "Name", path)?;
        declare(&mut declared, &property_name, &name, path)?;
        if property.attribute("DataType").is_some() {
            let field = parse_field(&property, path)?;
            if bool_attribute(&property, "Master").unwrap_or(false) {
                entity = entity.with_master(property_name.clone());
            }
            entity = entity.with_extended(field);
        } else {
            entity = entity.with_navigation(property_name.clone());
        }
        if let Some(binding) = find_relation(&property) {
            entity = entity.with_relation(&property_name, binding);
        }
    }

    Ok(entity)
}

fn parse_field(node: &Node, path: &Path) -> Result<FieldDescriptor> {
    let name = required_attribute(node, "Name", path)?;
    let data_type = match node.attribute("DataType").unwrap_or("String").parse::<DataType>() {
        Ok(data_type) => data_type,
        Err(never) => match never {},
    };

    let max_length = match node.attribute("Length") {
        Some(raw) => Some(raw.trim().parse::<i32>().map_err(|_| {
            invalid(path, format!("invalid Length '{}' on field '{}'", raw, name))
        })?),
        None => None,
    };

    let mut field = FieldDescriptor::column(name, data_type, max_length);
    if let Some(display_name) = node.attribute("DisplayName") {
        field = field.with_display_name(display_name);
    }
    if let Some(description) = node.attribute("Description") {
        field = field.with_description(description);
    }
    Ok(field)
}

/// Property names are unique per table, ignoring case
fn declare(declared: &mut HashSet<String>, name: &str, table: &str, path: &Path) -> Result<()> {
    if declared.insert(name.to_lowercase()) {
        Ok(())
    } else {
        Err(invalid(
            path,
            format!("duplicate property '{}' on table '{}'", name, table),
        )
        .into())
    }
}

fn find_relation(node: &Node) -> Option<RelationBinding> {
    let relation = node
        .children()
        .find(|n| n.tag_name().name() == "BindRelation")?;

    let mut binding = RelationBinding::new(
        relation.attribute("Table").unwrap_or_default(),
        relation.attribute("Column").unwrap_or_default(),
    );
    if let Some(column) = relation.attribute("RelationColumn").filter(|c| !c.is_empty()) {
        binding = binding.with_relation_column(column);
    }
    Some(binding)
}

/// Children named `item` of the first child named `section`
fn section_children<'a, 'input>(
    table: &Node<'a, 'input>,
    section: &str,
    item: &str,
) -> Vec<Node<'a, 'input>> {
    table
        .children()
        .filter(|n| n.tag_name().name() == section)
        .flat_map(|s| s.children())
        .filter(|n| n.tag_name().name() == item)
        .collect()
}

fn required_attribute(node: &Node, name: &str, path: &Path) -> Result<String> {
    match node.attribute(name).map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => Ok(value.to_string()),
        None => Err(invalid(
            path,
            format!(
                "<{}> is missing the {} attribute",
                node.tag_name().name(),
                name
            ),
        )
        .into()),
    }
}

fn bool_attribute(node: &Node, name: &str) -> Option<bool> {
    let raw = node.attribute(name)?;
    let value = parse_bool(raw);
    if value.is_none() {
        tracing::warn!(attribute = name, value = raw, "ignoring non-boolean attribute");
    }
    value
}

fn invalid(path: &Path, message: String) -> FieldListError {
    FieldListError::InvalidCatalogFormat {
        path: path.to_path_buf(),
        message,
    }
}
