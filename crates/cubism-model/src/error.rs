use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// A type tag outside the closed Cubism vocabulary.
///
/// This always means the descriptor grew a type the generator does not know
/// yet, so it is never recovered from.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
#[error("Unmapped type `{tag}`")]
#[diagnostic(
    code("BIND-TYPE-001"),
    help("Add the tag to the type vocabulary and to every target type table")
)]
pub struct UnmappedType {
    pub tag: String,
}

/// Errors raised while loading descriptor files into an [`crate::ApiModel`].
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("Failed to read descriptor {path}")]
    #[diagnostic(code("BIND-LOAD-001"), help("Check that the data directory contains the descriptor"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid descriptor {path}: {message}")]
    #[diagnostic(code("BIND-LOAD-002"))]
    Parse { path: PathBuf, message: String },

    #[error("No descriptor files configured")]
    #[diagnostic(code("BIND-LOAD-003"), help("`yamlfiles` must name at least one descriptor"))]
    NoDescriptors,
}

/// Errors raised while reading a `bindgen.toml` options file.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("Options file not found: {0}")]
    #[diagnostic(code("BIND-CONFIG-001"))]
    NotFound(PathBuf),

    #[error("Error reading options file {path}")]
    #[diagnostic(code("BIND-CONFIG-002"))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid options file {path}: {message}")]
    #[diagnostic(
        code("BIND-CONFIG-003"),
        help("Check the bindgen.toml syntax; every key is optional")
    )]
    Parse { path: PathBuf, message: String },
}
