//! Entity catalog loading
//!
//! A catalog is one model file, a directory of model files, or a glob pattern
//! matching model files. Every entity found is registered by name.

mod model_parser;

pub use model_parser::{parse_model_file, parse_model_str};

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::FieldListError;
use crate::model::EntityRegistry;

/// Load every entity from the model files at `path`
pub fn load_catalog(path: &Path) -> Result<EntityRegistry> {
    let files = find_model_files(path)?;
    if files.is_empty() {
        return Err(FieldListError::EmptyCatalog {
            path: path.to_path_buf(),
        }
        .into());
    }

    let mut registry = EntityRegistry::new();
    for file in &files {
        for entity in parse_model_file(file)? {
            registry
                .register(entity)
                .map_err(|dup| FieldListError::DuplicateEntity {
                    name: dup.name,
                    path: file.clone(),
                })?;
        }
    }

    tracing::info!(
        files = files.len(),
        entities = registry.len(),
        "loaded entity catalog"
    );
    Ok(registry)
}

/// Resolve a catalog path into model files, sorted by path
pub fn find_model_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let path_str = path.to_string_lossy();

    if path_str.contains('*') {
        // Glob pattern - expand it
        let paths = glob::glob(&path_str).map_err(|e| FieldListError::InvalidCatalogPattern {
            pattern: path_str.to_string(),
            source: e,
        })?;
        files.extend(paths.filter_map(|p| p.ok()).filter(|p| is_model_file(p)));
    } else if path.is_dir() {
        for entry in walkdir::WalkDir::new(path)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let entry_path = entry.path();
            if is_model_file(entry_path) && !in_build_output(entry_path, path) {
                files.push(entry_path.to_path_buf());
            }
        }
    } else if path.is_file() {
        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

fn is_model_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("xml"))
}

/// Skip bin and obj directories below the catalog root
fn in_build_output(path: &Path, root: &Path) -> bool {
    path.strip_prefix(root)
        .map(|rel| {
            rel.components().any(|c| {
                let part = c.as_os_str();
                part.eq_ignore_ascii_case("bin") || part.eq_ignore_ascii_case("obj")
            })
        })
        .unwrap_or(false)
}
