use std::path::PathBuf;

use cubism_model::{LoadError, UnmappedType};
use miette::Diagnostic;
use thiserror::Error;

/// Fatal errors of the binding context builder.
///
/// Both indicate a mismatch between the descriptor and the generator. Bindings
/// are never produced from a model that raised one.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum BindgenError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    UnmappedType(#[from] UnmappedType),

    #[error("Shape violation in `{subject}`: {reason}")]
    #[diagnostic(
        code("BIND-SHAPE-001"),
        help("The descriptor and the generator disagree on this member's signature")
    )]
    ShapeViolation { subject: String, reason: String },
}

impl BindgenError {
    pub fn shape(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        BindgenError::ShapeViolation { subject: subject.into(), reason: reason.into() }
    }
}

pub type BindgenResult<T> = Result<T, BindgenError>;

/// Errors handing the finished context to a renderer.
#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("Failed to write {path}")]
    #[diagnostic(code("BIND-RENDER-001"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize generation context: {0}")]
    #[diagnostic(code("BIND-RENDER-002"))]
    Serialize(#[from] serde_json::Error),
}

/// Errors of a full generator run: loading, building, then rendering.
#[derive(Debug, Error, Diagnostic)]
pub enum AssembleError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Bindgen(#[from] BindgenError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),
}
