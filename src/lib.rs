//! entity-fields: list and form field layouts derived from entity metadata
//!
//! Given an entity's schema metadata, this library picks and orders the fields
//! to show in a tabular list view or an editable form view: foreign-key columns
//! are swapped for (or joined by) the related entity's readable name, long text
//! and credentials are hidden from lists, audit fields are hidden from forms,
//! and IP/Uri fields are paired with their resolved address.

pub mod catalog;
pub mod error;
pub mod fields;
pub mod model;
pub mod output;
pub mod util;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;

pub use error::FieldListError;
pub use fields::FieldList;
pub use model::{
    DataType, EntityMetadata, EntityMetadataProvider, EntityRegistry, FieldDescriptor,
    MetadataRegistry, RelationBinding,
};

/// Rendering context a field list is derived for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewKind {
    /// Tabular, read-only summary
    #[default]
    List,
    /// Editable detail view
    Form,
}

impl ViewKind {
    pub fn is_form(&self) -> bool {
        matches!(self, ViewKind::Form)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewKind::List => "List",
            ViewKind::Form => "Form",
        }
    }
}

/// Output format for a derived field list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Xml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "xml" => Ok(OutputFormat::Xml),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Options for deriving a field list
#[derive(Debug, Clone)]
pub struct DeriveOptions {
    /// Model file, directory of model files, or glob pattern
    pub catalog_path: PathBuf,
    /// Entity to derive fields for
    pub entity: String,
    pub view: ViewKind,
    /// Where to write the result (stdout when `None`)
    pub output_path: Option<PathBuf>,
    pub format: OutputFormat,
}

/// A derived field list, detached from the catalog it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedFieldList {
    pub entity: String,
    pub view: ViewKind,
    pub fields: Vec<FieldDescriptor>,
}

impl DerivedFieldList {
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

/// Derive the field list for one entity of an already loaded registry
pub fn derive_from_registry(
    registry: &EntityRegistry,
    entity: &str,
    view: ViewKind,
) -> Result<DerivedFieldList> {
    let metadata = registry
        .get(entity)
        .ok_or_else(|| FieldListError::EntityNotFound {
            name: entity.to_string(),
        })?;

    let mut list = FieldList::new(metadata, registry);
    list.derive_fields(view.is_form());

    Ok(DerivedFieldList {
        entity: metadata.name.clone(),
        view,
        fields: list.into_owned(),
    })
}

/// Load the catalog and derive the field list for the requested entity
pub fn derive_field_list(options: &DeriveOptions) -> Result<DerivedFieldList> {
    tracing::info!(catalog = %options.catalog_path.display(), "loading catalog");

    // Step 1: Load every entity in the catalog
    let registry = catalog::load_catalog(&options.catalog_path)?;

    // Step 2: Derive the layout
    let derived = derive_from_registry(&registry, &options.entity, options.view)?;

    tracing::info!(
        entity = %derived.entity,
        view = derived.view.label(),
        fields = derived.fields.len(),
        "derived field list"
    );
    Ok(derived)
}

/// Derive a field list and write it to the configured output
pub fn run(options: &DeriveOptions) -> Result<DerivedFieldList> {
    let derived = derive_field_list(options)?;

    match &options.output_path {
        Some(path) => {
            let file = File::create(path).map_err(|e| FieldListError::OutputWriteError {
                path: path.clone(),
                source: e,
            })?;
            let mut writer = BufWriter::new(file);
            output::render(&mut writer, &derived, options.format)?;
            writer.flush().map_err(|e| FieldListError::OutputWriteError {
                path: path.clone(),
                source: e,
            })?;
            tracing::info!(output = %path.display(), "wrote field list");
        }
        None => {
            let stdout = std::io::stdout();
            output::render(stdout.lock(), &derived, options.format)?;
        }
    }

    Ok(derived)
}
