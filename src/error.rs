//! Error types for entity-fields

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading metadata or running the derivation pipeline.
///
/// Field list editing itself never fails; these cover the surrounding I/O.
#[derive(Error, Debug)]
pub enum FieldListError {
    #[error("Failed to read catalog file: {path}")]
    CatalogReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file: {path}")]
    CatalogParseError {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("Invalid catalog format in {path}: {message}")]
    InvalidCatalogFormat { path: PathBuf, message: String },

    #[error("Invalid catalog pattern: {pattern}")]
    InvalidCatalogPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("No catalog files found at {path}")]
    EmptyCatalog { path: PathBuf },

    #[error("Entity '{name}' is defined more than once (second definition in {path})")]
    DuplicateEntity { name: String, path: PathBuf },

    #[error("Entity not found in catalog: {name}")]
    EntityNotFound { name: String },

    #[error("Failed to write output to {path}")]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
