//! External entry point descriptors.

use cubism_model::{Conventions, Function, NeutralType};

use crate::context::Target;
use crate::error::{BindgenError, BindgenResult};
use crate::types::TypeTable;

/// An argument converted to its call type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryArg {
    pub name: String,
    pub ty: String,
}

/// Descriptor of one native entry point as seen from a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    pub doc: Option<String>,
    /// Original symbol, namespace included.
    pub entry: String,
    /// Display name in the target.
    pub name: String,
    pub args: Vec<EntryArg>,
    /// Target-formatted, comma-joined argument list.
    pub arg_list: String,
    /// Comma-joined, quoted argument call types.
    pub arg_types: String,
    /// Comma-joined argument names.
    pub arg_names: String,
    /// `None` for void entries.
    pub return_type: Option<String>,
    /// Set when an argument or the return crosses as a raw pointer.
    pub requires_unsafe: bool,
}

impl EntryPoint {
    /// Return call type with `void` for void entries.
    pub fn return_call_type(&self) -> &str {
        self.return_type.as_deref().unwrap_or("void")
    }

    pub fn is_void(&self) -> bool {
        self.return_type.is_none()
    }
}

/// Strips the namespace prefix, which every entry must carry.
pub fn entry_symbol<'a>(conventions: &Conventions, entry: &'a str) -> BindgenResult<&'a str> {
    conventions.strip_namespace(entry).ok_or_else(|| {
        BindgenError::shape(
            entry,
            format!("entry is missing the `{}` namespace prefix", conventions.namespace),
        )
    })
}

pub fn build_entry<T: Target>(target: &T, conventions: &Conventions, func: &Function) -> BindgenResult<EntryPoint> {
    let symbol = entry_symbol(conventions, &func.entry)?;
    let mut requires_unsafe = false;

    let mut args = Vec::with_capacity(func.args.len());
    for arg in &func.args {
        let ty = NeutralType::parse(&arg.ty)?;
        requires_unsafe |= ty.is_pointer_shaped();
        args.push(EntryArg { name: arg.name.clone(), ty: target.call_of(ty) });
    }

    let return_type = match func.return_type() {
        Some(tag) => {
            let ty = NeutralType::parse(tag)?;
            requires_unsafe |= ty.is_pointer_shaped();
            Some(target.call_of(ty))
        }
        None => None,
    };

    let arg_list = args
        .iter()
        .map(|arg| target.format_arg(&arg.name, &arg.ty))
        .collect::<Vec<_>>()
        .join(", ");
    let arg_types = args.iter().map(|arg| format!("\"{}\"", arg.ty)).collect::<Vec<_>>().join(", ");
    let arg_names = args.iter().map(|arg| arg.name.as_str()).collect::<Vec<_>>().join(", ");

    Ok(EntryPoint {
        doc: func.doc.clone(),
        entry: func.entry.clone(),
        name: target.display_name(symbol),
        args,
        arg_list,
        arg_types,
        arg_names,
        return_type,
        requires_unsafe,
    })
}

pub fn build_entries<T: Target>(target: &T, conventions: &Conventions, funcs: &[Function]) -> BindgenResult<Vec<EntryPoint>> {
    funcs.iter().map(|func| build_entry(target, conventions, func)).collect()
}
