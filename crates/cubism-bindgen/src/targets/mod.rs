//! Target languages and the shared pieces of their renderer-boundary mapping.

mod csharp;
mod javascript;

pub use csharp::Csharp;
pub use javascript::Javascript;

use cubism_model::{Arg, Function};
use serde_json::{Map, Value};

use crate::context::BindingContext;
use crate::props::{ClassBinding, PropertyBinding};

fn args_value(args: &[Arg]) -> Value {
    Value::Array(
        args.iter()
            .map(|arg| {
                let mut map = Map::new();
                map.insert("name".into(), arg.name.clone().into());
                map.insert("type".into(), arg.ty.clone().into());
                Value::Object(map)
            })
            .collect(),
    )
}

fn insert_opt(map: &mut Map<String, Value>, key: &str, value: Option<&String>) {
    if let Some(value) = value {
        map.insert(key.to_string(), Value::String(value.clone()));
    }
}

/// Descriptor keys of a function (`entry`, `doc`, `args`, `return`).
pub(crate) fn function_map(func: &Function) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("entry".into(), func.entry.clone().into());
    map.insert("doc".into(), func.doc.clone().unwrap_or_default().into());
    map.insert("args".into(), args_value(&func.args));
    if let Some(ty) = func.return_type() {
        let mut ret = Map::new();
        ret.insert("type".into(), ty.into());
        map.insert("return".into(), Value::Object(ret));
    }
    map
}

/// Descriptor keys of a property with getters resolved and factors formatted.
pub(crate) fn property_map(prop: &PropertyBinding) -> Map<String, Value> {
    let source = &prop.property;
    let mut map = Map::new();
    map.insert("propname".into(), source.name.clone().into());
    map.insert("proptype".into(), source.ty.clone().into());
    map.insert("propget".into(), prop.getter.clone().into());
    map.insert("doc".into(), source.doc.clone().unwrap_or_default().into());
    map.insert("args".into(), args_value(&source.args));
    if let Some(length) = &prop.length {
        map.insert("propgetlength".into(), length.getter.clone().into());
        insert_opt(&mut map, "proplengthfactor", length.factor.as_ref());
    }
    if let Some(length2) = &prop.length2 {
        map.insert("propgetlength2".into(), length2.getter.clone().into());
        insert_opt(&mut map, "proplength2factor", length2.factor.as_ref());
    }
    map
}

pub(crate) fn class_map(class: &ClassBinding, props: Vec<Value>, funcs: Vec<Value>) -> Map<String, Value> {
    let mut map = Map::new();
    insert_opt(&mut map, "clsname", class.name.as_ref());
    insert_opt(&mut map, "clsdoc", class.doc.as_ref());
    map.insert("props".into(), Value::Array(props));
    map.insert("funcs".into(), Value::Array(funcs));
    map
}

/// Adds the model-getter shortcuts (`parameters`, `parts`, `drawables`) next
/// to `clsmap`.
pub(crate) fn insert_shortcuts(root: &mut Map<String, Value>, context: &BindingContext, clsmap: &Map<String, Value>) {
    for key in &context.model_getters {
        if let Some(class) = clsmap.get(key) {
            root.insert(key.clone(), class.clone());
        }
    }
}
