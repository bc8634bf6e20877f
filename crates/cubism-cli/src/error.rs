use cubism_bindgen::AssembleError;
use cubism_model::ConfigError;
use miette::Diagnostic;
use thiserror::Error;

/// Every way a generator run can fail. All of them are fatal.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Assemble(#[from] AssembleError),
}
