//! Neutral description of the Cubism Core API.
//!
//! This crate holds what every target shares:
//! - the closed type vocabulary ([`NeutralType`])
//! - the API model records loaded from descriptor files ([`ApiModel`])
//! - run options and naming conventions ([`Options`], [`Conventions`])
//! - the loader seam ([`ModelLoader`]) with a YAML implementation

mod config;
mod error;
mod loader;
mod model;
mod types;

pub use config::{Conventions, ModelGetter, Options, OPTIONS_FILE};
pub use error::{ConfigError, LoadError, UnmappedType};
pub use loader::{ModelLoader, YamlLoader};
pub use model::{ApiModel, Arg, Class, Function, Property, Return};
pub use types::{HandleKind, NeutralType, ScalarKind};
