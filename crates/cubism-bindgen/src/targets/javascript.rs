//! JavaScript/TypeScript over Emscripten `ccall`s.
//!
//! Every value crosses the wasm boundary as a `number`; arrays are read back
//! by wrapping the Emscripten heap in typed arrays.

use cubism_model::{Options, ScalarKind};
use serde_json::{Map, Value};

use super::{class_map, function_map, insert_shortcuts, property_map};
use crate::context::{BindingContext, Target, TargetKind};
use crate::entries::EntryPoint;
use crate::props::{ClassBinding, PropertyBinding};
use crate::types::{lower_first, TypeTable};
use crate::views::ViewWrapper;

/// Namespace object holding the wrapped `ccall`s.
const CCALL_NAMESPACE: &str = "_csm";

#[derive(Debug, Default, Clone, Copy)]
pub struct Javascript;

impl TypeTable for Javascript {
    fn scalar_call(&self, _kind: ScalarKind) -> &'static str {
        "number"
    }

    fn handle_call(&self) -> &'static str {
        "number"
    }

    fn string_array_call(&self) -> &'static str {
        "number"
    }

    fn pointer_to(&self, _pointee: &str) -> String {
        "number".to_string()
    }

    fn string_array_surface(&self) -> &'static str {
        "Array<string>"
    }

    fn view_surface(&self, element: ScalarKind) -> String {
        format!("{}Array", element.tag())
    }

    fn array_of(&self, row: &str) -> String {
        format!("Array<{}>", row)
    }

    fn scalar_buffer_kind(&self, kind: ScalarKind) -> Option<&'static str> {
        Some(match kind {
            ScalarKind::Uint8 => "_em.HEAPU8.buffer",
            ScalarKind::Uint16 => "_em.HEAPU16.buffer",
            ScalarKind::Uint32 => "_em.HEAPU32.buffer",
            ScalarKind::Int32 => "_em.HEAP32.buffer",
            ScalarKind::Float32 => "_em.HEAPF32.buffer",
        })
    }
}

fn ccall_value(entry: &EntryPoint) -> Value {
    let mut map = Map::new();
    map.insert("doc".into(), entry.doc.clone().unwrap_or_default().into());
    map.insert("name".into(), entry.name.clone().into());
    map.insert("entry".into(), entry.entry.clone().into());
    map.insert("args".into(), entry.arg_list.clone().into());
    map.insert("argTypes".into(), entry.arg_types.clone().into());
    map.insert("argNames".into(), entry.arg_names.clone().into());
    if let Some(ty) = &entry.return_type {
        map.insert("returnType".into(), ty.clone().into());
    }
    Value::Object(map)
}

fn js_property_map(prop: &PropertyBinding) -> Map<String, Value> {
    let mut map = property_map(prop);
    map.insert("proptstype".into(), prop.surface_type.clone().into());
    map
}

fn scalar_array_value(prop: &PropertyBinding, two_dimensional: bool) -> Value {
    let mut map = js_property_map(prop);
    if let Some(kind) = prop.scalar_type {
        map.insert("propscalartype".into(), kind.tag().into());
    }
    if let Some(buffer) = &prop.buffer_kind {
        map.insert("propemheapbuffer".into(), buffer.clone().into());
    }
    if two_dimensional {
        if let Some(row) = &prop.row_surface_type {
            map.insert("proparray1tstype".into(), row.clone().into());
        }
    }
    Value::Object(map)
}

fn class_value(class: &ClassBinding) -> Value {
    let props = class.props.iter().map(|prop| Value::Object(js_property_map(prop))).collect();
    let funcs = class
        .funcs
        .iter()
        .map(|method| {
            let mut map = function_map(&method.function);
            map.insert("ccall".into(), method.call_name.clone().into());
            Value::Object(map)
        })
        .collect();

    let mut map = class_map(class, props, funcs);
    map.insert(
        "scalararrayprops".into(),
        class.scalar_array_props().map(|prop| scalar_array_value(prop, false)).collect(),
    );
    map.insert(
        "scalararray2props".into(),
        class.scalar_array2_props().map(|prop| scalar_array_value(prop, true)).collect(),
    );
    Value::Object(map)
}

impl Target for Javascript {
    const KIND: TargetKind = TargetKind::Javascript;

    fn extend_options(&self, options: &mut Options) {
        options.push_yaml("Live2DCubismCoreEMSCRIPTEN.yaml");
        options.push_infile(["js", "make.py"].iter().collect::<std::path::PathBuf>());
        options.push_infile(["js", ".in", "live2dcubismcore.ts"].iter().collect::<std::path::PathBuf>());
        options.push_infile(["js", ".in", "Live2DCubismCoreEMSCRIPTEN.c"].iter().collect::<std::path::PathBuf>());
    }

    fn call_name(&self, symbol: &str) -> String {
        format!("{}.{}", CCALL_NAMESPACE, self.display_name(symbol))
    }

    fn display_name(&self, symbol: &str) -> String {
        lower_first(symbol)
    }

    fn format_arg(&self, name: &str, call_type: &str) -> String {
        format!("{}: {}", name, call_type)
    }

    fn view_wrapper(&self, element: ScalarKind) -> ViewWrapper {
        ViewWrapper {
            element,
            name: self.view_surface(element),
            ty: self.scalar_call(element).to_string(),
            buffer_kind: self.scalar_buffer_kind(element).map(str::to_string),
        }
    }

    fn flatten(&self, context: &BindingContext) -> Value {
        let mut root = Map::new();

        let funcs = context.funcs.iter().map(|func| Value::Object(function_map(&func.function))).collect();
        root.insert("funcs".into(), Value::Array(funcs));

        let (returning, void): (Vec<&EntryPoint>, Vec<&EntryPoint>) =
            context.entries.iter().partition(|entry| !entry.is_void());
        let mut ccalls = Map::new();
        ccalls.insert("return".into(), returning.into_iter().map(ccall_value).collect());
        ccalls.insert("void".into(), void.into_iter().map(ccall_value).collect());
        root.insert("ccalls".into(), Value::Object(ccalls));

        let arrayviews = context
            .views
            .iter()
            .map(|view| {
                let mut map = Map::new();
                map.insert("Name".into(), view.name.clone().into());
                map.insert("type".into(), view.ty.clone().into());
                if let Some(buffer) = &view.buffer_kind {
                    map.insert("propemheapbuffer".into(), buffer.clone().into());
                }
                Value::Object(map)
            })
            .collect();
        root.insert("arrayviews".into(), Value::Array(arrayviews));

        let mut clsmap = Map::new();
        for (key, class) in &context.classes {
            clsmap.insert(key.clone(), class_value(class));
        }

        let modelgetterclss = context
            .model_getters
            .iter()
            .filter_map(|key| clsmap.get(key).cloned())
            .collect();
        root.insert("modelgetterclss".into(), Value::Array(modelgetterclss));
        insert_shortcuts(&mut root, context, &clsmap);
        root.insert("clsmap".into(), Value::Object(clsmap));

        Value::Object(root)
    }
}
