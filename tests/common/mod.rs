//! Common test utilities for entity-fields tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use entity_fields::{
    DataType, DeriveOptions, DerivedFieldList, EntityMetadata, EntityRegistry, FieldDescriptor,
    OutputFormat, RelationBinding, ViewKind,
};
use tempfile::TempDir;

/// Test context with temporary directory for isolated test execution
pub struct TestContext {
    /// Kept to prevent temp directory cleanup until TestContext is dropped
    _temp_dir: TempDir,
    pub catalog_dir: PathBuf,
}

impl TestContext {
    /// Create a new test context by copying a fixture to a temp directory
    pub fn with_fixture(fixture_name: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let catalog_dir = temp_dir.path().to_path_buf();

        copy_dir_recursive(&fixture_path(fixture_name), &catalog_dir)
            .expect("Failed to copy fixture");

        Self {
            _temp_dir: temp_dir,
            catalog_dir,
        }
    }

    /// Options deriving `entity` from this context's catalog, written to stdout as text
    pub fn options(&self, entity: &str, view: ViewKind) -> DeriveOptions {
        DeriveOptions {
            catalog_path: self.catalog_dir.clone(),
            entity: entity.to_string(),
            view,
            output_path: None,
            format: OutputFormat::Text,
        }
    }

    /// Derive a field list, panicking if the pipeline fails
    pub fn derive(&self, entity: &str, view: ViewKind) -> DerivedFieldList {
        entity_fields::derive_field_list(&self.options(entity, view)).unwrap_or_else(|e| {
            panic!("Derivation of '{}' failed: {:?}", entity, e);
        })
    }
}

/// Get the path to a test fixture
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), target)?;
        }
    }
    Ok(())
}

// ============================================================================
// In-memory metadata
// ============================================================================

pub fn text(name: &str, length: i32) -> FieldDescriptor {
    FieldDescriptor::column(name, DataType::String, Some(length))
}

pub fn int(name: &str) -> FieldDescriptor {
    FieldDescriptor::column(name, DataType::Int32, None)
}

pub fn time(name: &str) -> FieldDescriptor {
    FieldDescriptor::column(name, DataType::DateTime, None)
}

pub fn extended(name: &str) -> FieldDescriptor {
    FieldDescriptor::extended(name, DataType::String)
}

/// A user entity with relations to Department and Role, credentials,
/// long text, login/audit IPs and audit columns
pub fn user_entity(audit: bool) -> EntityMetadata {
    EntityMetadata::new("User")
        .with_column(int("ID"))
        .with_column(text("Name", 50))
        .with_column(text("Password", 200))
        .with_column(text("DisplayName", 50))
        .with_column(int("DeptID"))
        .with_column(int("RoleID"))
        .with_column(text("Avatar", 500))
        .with_column(text("Remark", 500))
        .with_column(text("LastLoginIP", 50))
        .with_column(int("CreateUserID"))
        .with_column(time("CreateTime"))
        .with_column(text("CreateIP", 50))
        .with_column(int("UpdateUserID"))
        .with_column(time("UpdateTime"))
        .with_column(text("UpdateIP", 50))
        .with_extended(extended("DeptName"))
        .with_extended(extended("DepartmentName"))
        .with_extended(extended("RoleName"))
        .with_extended(extended("LastLoginAddress"))
        .with_extended(extended("CreateAddress"))
        .with_extended(extended("UpdateAddress"))
        .with_relation("Dept", RelationBinding::new("Department", "DeptID"))
        .with_relation("Role", RelationBinding::new("Role", "RoleID"))
        .with_master("Name")
        .with_audit(audit)
}

/// A department entity whose parent column is swapped for a self-relation
pub fn department_entity() -> EntityMetadata {
    EntityMetadata::new("Department")
        .with_column(int("ID"))
        .with_column(text("Name", 50))
        .with_column(int("ParentID"))
        .with_extended(extended("ParentName"))
        .with_relation(
            "ParentName",
            RelationBinding::new("", "ParentID").with_relation_column("ParentID"),
        )
}

pub fn role_entity() -> EntityMetadata {
    EntityMetadata::new("Role")
        .with_column(int("ID"))
        .with_column(text("Name", 50))
}

pub fn membership_registry(audit: bool) -> EntityRegistry {
    [user_entity(audit), department_entity(), role_entity()]
        .into_iter()
        .collect()
}
