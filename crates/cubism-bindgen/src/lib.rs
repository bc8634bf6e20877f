//! Binding context builder for the Cubism Core API.
//!
//! Turns the neutral [`cubism_model::ApiModel`] into a fully resolved,
//! per-target context the template engine renders without further logic:
//!
//! ```text
//! ApiModel ──► ContextAssembler<T> ──► BindingContext ──► T::flatten ──► Renderer
//!                 │
//!                 ├─ types    neutral type → call / surface / buffer kind
//!                 ├─ entries  one entry point descriptor per function
//!                 ├─ props    decorated properties, methods, model-getter checks
//!                 └─ views    one array view wrapper per element kind
//! ```
//!
//! Targets live in [`targets`]: [`targets::Csharp`] (P/Invoke) and
//! [`targets::Javascript`] (Emscripten).

pub mod context;
pub mod entries;
mod error;
pub mod props;
pub mod render;
pub mod targets;
pub mod types;
pub mod views;

pub use context::{BindingContext, ContextAssembler, FunctionBinding, Target, TargetKind};
pub use entries::{EntryArg, EntryPoint};
pub use error::{AssembleError, BindgenError, BindgenResult, RenderError};
pub use props::{ClassBinding, LengthAccessor, MethodBinding, PropertyBinding};
pub use render::{JsonDump, Renderer};
pub use types::TypeTable;
pub use views::ViewWrapper;
