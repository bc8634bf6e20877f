//! C# over P/Invoke: the `CubismCoreDll` entry class, unmanaged array views,
//! and the managed wrappers around them.

use cubism_model::{Options, ScalarKind};
use serde_json::{Map, Value};

use super::{class_map, function_map, insert_shortcuts, property_map};
use crate::context::{BindingContext, Target, TargetKind};
use crate::types::{capitalize, TypeTable};
use crate::views::ViewWrapper;

/// Class exposing the raw DLL imports.
const DLL_CLASS: &str = "CubismCoreDll";

const UNMANAGED_DIR: [&str; 5] = ["cs", "Live2D", "Cubism", "Core", "Unmanaged"];

const UNMANAGED_SOURCES: [&str; 10] = [
    "ByteExtensionMethods.cs",
    "CubismCoreDll.cs",
    "CubismUnmanagedArrayView.cs",
    "CubismUnmanagedDrawables.cs",
    "CubismUnmanagedMemory.cs",
    "CubismUnmanagedMoc.cs",
    "CubismUnmanagedModel.cs",
    "CubismUnmanagedCanvasInformation.cs",
    "CubismUnmanagedParameters.cs",
    "CubismUnmanagedParts.cs",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct Csharp;

impl TypeTable for Csharp {
    fn scalar_call(&self, kind: ScalarKind) -> &'static str {
        match kind {
            ScalarKind::Int32 => "int",
            ScalarKind::Uint8 => "Byte",
            ScalarKind::Uint16 => "ushort",
            ScalarKind::Uint32 => "uint",
            ScalarKind::Float32 => "float",
        }
    }

    fn handle_call(&self) -> &'static str {
        "IntPtr"
    }

    fn string_array_call(&self) -> &'static str {
        "char **"
    }

    fn pointer_to(&self, pointee: &str) -> String {
        format!("{}*", pointee)
    }

    fn string_array_surface(&self) -> &'static str {
        "string[]"
    }

    fn view_surface(&self, element: ScalarKind) -> String {
        format!("CubismUnmanaged{}ArrayView", capitalize(self.scalar_call(element)))
    }

    fn array_of(&self, row: &str) -> String {
        format!("{}[]", row)
    }
}

impl Target for Csharp {
    const KIND: TargetKind = TargetKind::Csharp;

    fn extend_options(&self, options: &mut Options) {
        let dir = UNMANAGED_DIR.iter().collect::<std::path::PathBuf>();
        for source in UNMANAGED_SOURCES {
            options.push_infile(dir.join(source));
        }
    }

    fn call_name(&self, symbol: &str) -> String {
        format!("{}.{}", DLL_CLASS, symbol)
    }

    fn display_name(&self, symbol: &str) -> String {
        symbol.to_string()
    }

    fn format_arg(&self, name: &str, call_type: &str) -> String {
        format!("{} {}", call_type, name)
    }

    fn view_wrapper(&self, element: ScalarKind) -> ViewWrapper {
        let ty = self.scalar_call(element);
        ViewWrapper {
            element,
            name: capitalize(ty),
            ty: ty.to_string(),
            buffer_kind: None,
        }
    }

    fn flatten(&self, context: &BindingContext) -> Value {
        let mut root = Map::new();

        let funcs = context
            .funcs
            .iter()
            .map(|func| {
                let mut map = function_map(&func.function);
                map.insert("funccsentry".into(), func.call_name.clone().into());
                map.insert("funccsreturntype".into(), func.return_surface.clone().into());
                Value::Object(map)
            })
            .collect();
        root.insert("funcs".into(), Value::Array(funcs));

        let dllentries = context
            .entries
            .iter()
            .map(|entry| {
                let returntype = if entry.requires_unsafe {
                    format!("unsafe {}", entry.return_call_type())
                } else {
                    entry.return_call_type().to_string()
                };
                let mut map = Map::new();
                map.insert("funcdoc".into(), entry.doc.clone().unwrap_or_default().into());
                map.insert("entrypoint".into(), entry.entry.clone().into());
                map.insert("funcname".into(), entry.name.clone().into());
                map.insert("args".into(), entry.arg_list.clone().into());
                map.insert("returntype".into(), returntype.into());
                map.insert("unsafe".into(), entry.requires_unsafe.into());
                Value::Object(map)
            })
            .collect();
        root.insert("dllentries".into(), Value::Array(dllentries));

        let arrayviews = context
            .views
            .iter()
            .map(|view| {
                let mut map = Map::new();
                map.insert("Name".into(), view.name.clone().into());
                map.insert("type".into(), view.ty.clone().into());
                Value::Object(map)
            })
            .collect();
        root.insert("arrayviews".into(), Value::Array(arrayviews));

        let mut clsmap = Map::new();
        for (key, class) in &context.classes {
            let props = class
                .props
                .iter()
                .map(|prop| {
                    let mut map = property_map(prop);
                    map.insert("propcstype".into(), prop.surface_type.clone().into());
                    if prop.length2.is_some() {
                        if let Some(row) = &prop.row_surface_type {
                            map.insert("propcstype1d".into(), row.clone().into());
                        }
                    }
                    Value::Object(map)
                })
                .collect();
            let funcs = class
                .funcs
                .iter()
                .map(|method| Value::Object(function_map(&method.function)))
                .collect();
            clsmap.insert(key.clone(), Value::Object(class_map(class, props, funcs)));
        }
        insert_shortcuts(&mut root, context, &clsmap);
        root.insert("clsmap".into(), Value::Object(clsmap));

        Value::Object(root)
    }
}
