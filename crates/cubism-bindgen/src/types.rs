//! Mapping of neutral types to target call and surface types.
//!
//! A target only supplies the leaf table: how each scalar and handle is
//! spelled, how a pointer and a view are named, and how a 2-D array wraps its
//! rows. The decomposition of `Array`/`Array2` is shared:
//!
//! ```text
//! call(XArray2)     = pointer_to(call(XArray))
//! call(XArray)      = pointer_to(call(X))
//! surface(XArray2)  = array_of(surface(XArray))
//! surface(XArray)   = view_surface(X)
//! ```

use cubism_model::{NeutralType, ScalarKind};

use crate::error::BindgenResult;

/// Leaf type table of a target language.
pub trait TypeTable {
    /// Call type of a scalar at the native boundary.
    fn scalar_call(&self, kind: ScalarKind) -> &'static str;

    /// Call type of every opaque handle.
    fn handle_call(&self) -> &'static str;

    fn string_array_call(&self) -> &'static str;

    /// Call type of a raw pointer to `pointee`.
    fn pointer_to(&self, pointee: &str) -> String;

    fn scalar_surface(&self, kind: ScalarKind) -> String {
        self.scalar_call(kind).to_string()
    }

    fn handle_surface(&self) -> &'static str {
        self.handle_call()
    }

    fn string_array_surface(&self) -> &'static str;

    /// Surface type of a 1-D view over `element` values.
    fn view_surface(&self, element: ScalarKind) -> String;

    /// Surface type of an array whose rows have surface type `row`.
    fn array_of(&self, row: &str) -> String;

    /// Runtime heap/view selector for a scalar kind, if the target has one.
    fn scalar_buffer_kind(&self, _kind: ScalarKind) -> Option<&'static str> {
        None
    }

    fn call_of(&self, ty: NeutralType) -> String {
        match ty {
            NeutralType::Scalar(kind) => self.scalar_call(kind).to_string(),
            NeutralType::Handle(_) => self.handle_call().to_string(),
            NeutralType::StringArray => self.string_array_call().to_string(),
            NeutralType::Array(kind) => self.pointer_to(self.scalar_call(kind)),
            NeutralType::Array2(kind) => self.pointer_to(&self.call_of(NeutralType::Array(kind))),
        }
    }

    fn surface_of(&self, ty: NeutralType) -> String {
        match ty {
            NeutralType::Scalar(kind) => self.scalar_surface(kind),
            NeutralType::Handle(_) => self.handle_surface().to_string(),
            NeutralType::StringArray => self.string_array_surface().to_string(),
            NeutralType::Array(kind) => self.view_surface(kind),
            NeutralType::Array2(kind) => self.array_of(&self.surface_of(NeutralType::Array(kind))),
        }
    }

    /// Call type for a descriptor tag.
    fn call_type(&self, tag: &str) -> BindgenResult<String> {
        Ok(self.call_of(NeutralType::parse(tag)?))
    }

    /// Surface type for a descriptor tag.
    fn surface_type(&self, tag: &str) -> BindgenResult<String> {
        Ok(self.surface_of(NeutralType::parse(tag)?))
    }

    /// Buffer kind for a scalar tag or for the element of a scalar array tag.
    fn buffer_kind(&self, tag: &str) -> BindgenResult<Option<String>> {
        let kind = match NeutralType::parse(tag)? {
            NeutralType::Scalar(kind) => Some(kind),
            other => other.element(),
        };
        Ok(kind.and_then(|kind| self.scalar_buffer_kind(kind)).map(str::to_string))
    }
}

/// Upper-cases the first character.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cases the first character.
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_only_the_first_char() {
        assert_eq!(capitalize("float"), "Float");
        assert_eq!(capitalize("ushort"), "Ushort");
        assert_eq!(capitalize("Byte"), "Byte");
        assert_eq!(capitalize(""), "");
        assert_eq!(lower_first("GetParameterValues"), "getParameterValues");
    }
}
