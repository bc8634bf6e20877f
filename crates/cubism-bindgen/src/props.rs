//! Decoration of class properties and methods with target types and call names.

use cubism_model::{Arg, Class, Conventions, Function, NeutralType, Property, ScalarKind};

use crate::context::Target;
use crate::entries::entry_symbol;
use crate::error::{BindgenError, BindgenResult};
use crate::types::TypeTable;

/// A resolved length accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthAccessor {
    /// Fully-qualified call name of the accessor.
    pub getter: String,
    /// Pre-formatted multiplication suffix (`" * numComponents"`).
    pub factor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyBinding {
    pub property: Property,
    pub ty: NeutralType,
    pub surface_type: String,
    /// Fully-qualified call name of the getter.
    pub getter: String,
    pub length: Option<LengthAccessor>,
    pub length2: Option<LengthAccessor>,
    /// Surface type of one row, with one array dimension stripped.
    pub row_surface_type: Option<String>,
    pub scalar_type: Option<ScalarKind>,
    pub buffer_kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodBinding {
    pub function: Function,
    pub call_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBinding {
    /// Key in the class map.
    pub key: String,
    pub name: Option<String>,
    pub doc: Option<String>,
    pub props: Vec<PropertyBinding>,
    pub funcs: Vec<MethodBinding>,
    /// Indices into `props` of 1-D scalar array properties.
    pub scalar_array_props: Vec<usize>,
    /// Indices into `props` of 2-D scalar array properties.
    pub scalar_array2_props: Vec<usize>,
}

impl ClassBinding {
    pub fn scalar_array_props(&self) -> impl Iterator<Item = &PropertyBinding> {
        self.scalar_array_props.iter().map(|&idx| &self.props[idx])
    }

    pub fn scalar_array2_props(&self) -> impl Iterator<Item = &PropertyBinding> {
        self.scalar_array2_props.iter().map(|&idx| &self.props[idx])
    }

    pub fn prop(&self, name: &str) -> Option<&PropertyBinding> {
        self.props.iter().find(|prop| prop.property.name == name)
    }
}

/// `" * <factor>"`, spliced by templates right after a raw length read.
pub fn format_factor(factor: &str) -> String {
    format!(" * {}", factor)
}

fn resolve_call<T: Target>(target: &T, conventions: &Conventions, entry: &str) -> BindgenResult<String> {
    Ok(target.call_name(entry_symbol(conventions, entry)?))
}

fn resolve_length<T: Target>(
    target: &T,
    conventions: &Conventions,
    getter: Option<&String>,
    factor: Option<&String>,
) -> BindgenResult<Option<LengthAccessor>> {
    let Some(getter) = getter else {
        return Ok(None);
    };
    Ok(Some(LengthAccessor {
        getter: resolve_call(target, conventions, getter)?,
        factor: factor.map(|factor| format_factor(factor)),
    }))
}

pub fn normalize_property<T: Target>(
    target: &T,
    conventions: &Conventions,
    prop: &Property,
) -> BindgenResult<PropertyBinding> {
    let ty = NeutralType::parse(&prop.ty)?;
    let surface_type = target.surface_of(ty);
    let getter = resolve_call(target, conventions, &prop.getter)?;

    let length = resolve_length(target, conventions, prop.length.as_ref(), prop.length_factor.as_ref())?;
    let length2 = resolve_length(target, conventions, prop.length2.as_ref(), prop.length2_factor.as_ref())?;

    let row_surface_type = if length2.is_some() || ty.dimensions() == 2 {
        Some(ty.demote().map_or_else(|| surface_type.clone(), |row| target.surface_of(row)))
    } else {
        None
    };

    let scalar_type = ty.element();
    let buffer_kind = scalar_type
        .and_then(|kind| target.scalar_buffer_kind(kind))
        .map(str::to_string);

    Ok(PropertyBinding {
        property: prop.clone(),
        ty,
        surface_type,
        getter,
        length,
        length2,
        row_surface_type,
        scalar_type,
        buffer_kind,
    })
}

fn is_single_model_arg(args: &[Arg]) -> bool {
    match args {
        [arg] => NeutralType::parse(&arg.ty).is_ok_and(NeutralType::is_model_handle),
        _ => false,
    }
}

fn describe_args(args: &[Arg]) -> String {
    if args.is_empty() {
        return "no arguments".to_string();
    }
    let list = args
        .iter()
        .map(|arg| format!("{}: {}", arg.name, arg.ty))
        .collect::<Vec<_>>()
        .join(", ");
    format!("({})", list)
}

/// Checks that every getter and method of a model-getter class takes exactly
/// one `Model` argument.
pub fn validate_model_getter(key: &str, class: &Class) -> BindgenResult<()> {
    for prop in &class.props {
        if !is_single_model_arg(&prop.args) {
            return Err(BindgenError::shape(
                format!("{}.{}", key, prop.getter),
                format!("property getter must take exactly one `Model` argument, found {}", describe_args(&prop.args)),
            ));
        }
    }
    for func in &class.funcs {
        if !is_single_model_arg(&func.args) {
            return Err(BindgenError::shape(
                format!("{}.{}", key, func.entry),
                format!("method must take exactly one `Model` argument, found {}", describe_args(&func.args)),
            ));
        }
    }
    Ok(())
}

pub fn normalize_class<T: Target>(
    target: &T,
    conventions: &Conventions,
    key: &str,
    class: &Class,
) -> BindgenResult<ClassBinding> {
    if conventions.is_model_getter(key) {
        validate_model_getter(key, class)?;
    }

    let props = class
        .props
        .iter()
        .map(|prop| normalize_property(target, conventions, prop))
        .collect::<BindgenResult<Vec<_>>>()?;

    let funcs = class
        .funcs
        .iter()
        .map(|func| -> BindgenResult<MethodBinding> {
            Ok(MethodBinding {
                function: func.clone(),
                call_name: resolve_call(target, conventions, &func.entry)?,
            })
        })
        .collect::<BindgenResult<Vec<_>>>()?;

    let mut scalar_array_props = Vec::new();
    let mut scalar_array2_props = Vec::new();
    for (idx, prop) in props.iter().enumerate() {
        match prop.ty {
            NeutralType::Array(_) => scalar_array_props.push(idx),
            NeutralType::Array2(_) => scalar_array2_props.push(idx),
            _ => {}
        }
    }

    Ok(ClassBinding {
        key: key.to_string(),
        name: class.name.clone(),
        doc: class.doc.clone(),
        props,
        funcs,
        scalar_array_props,
        scalar_array2_props,
    })
}
