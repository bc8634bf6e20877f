//! Array view wrappers, one per distinct element kind.

use cubism_model::{Function, NeutralType, ScalarKind};
use indexmap::IndexMap;

use crate::context::Target;
use crate::error::BindgenResult;

/// A generated helper type exposing safe access over a raw native buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewWrapper {
    pub element: ScalarKind,
    /// Wrapper identity (`Float`, `Float32Array`, ...).
    pub name: String,
    /// Element call type.
    pub ty: String,
    pub buffer_kind: Option<String>,
}

/// Collects one wrapper per element kind returned by any function.
///
/// Void functions, scalar returns and `StringArray` are skipped. The first
/// function returning an element kind decides its position in the list.
pub fn synthesize_views<T: Target>(target: &T, funcs: &[Function]) -> BindgenResult<Vec<ViewWrapper>> {
    let mut views: IndexMap<ScalarKind, ViewWrapper> = IndexMap::new();
    for func in funcs {
        let Some(tag) = func.return_type() else {
            continue;
        };
        let Some(element) = NeutralType::parse(tag)?.element() else {
            continue;
        };
        views.entry(element).or_insert_with(|| target.view_wrapper(element));
    }
    log::debug!("Synthesized {} array view(s) from {} function(s)", views.len(), funcs.len());
    Ok(views.into_values().collect())
}
