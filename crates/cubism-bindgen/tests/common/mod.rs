// Shared fixtures for the binding context tests.
#![allow(dead_code)]

use cubism_model::{ApiModel, Class, Function, Property};

pub fn model_getter(entry: &str, ty: &str) -> Function {
    Function::new(entry).with_doc(format!("{} doc", entry)).with_arg("model", "Model").returning(ty)
}

pub fn model_prop(name: &str, ty: &str, getter: &str) -> Property {
    Property::new(name, ty, getter).with_arg("model", "Model")
}

/// A reduced Cubism Core surface covering every shape the generator handles.
pub fn sample_model() -> ApiModel {
    let funcs = vec![
        Function::new("csmGetVersion").with_doc("Queries Core version.").returning("Uint32"),
        Function::new("csmReviveMocInPlace")
            .with_doc("Revives a moc in place.")
            .with_arg("address", "Memory")
            .with_arg("size", "Uint32")
            .returning("Moc"),
        Function::new("csmInitializeModelInPlace")
            .with_doc("Instantiates a model in place.")
            .with_arg("moc", "Moc")
            .with_arg("address", "Memory")
            .with_arg("size", "Uint32")
            .returning("Model"),
        Function::new("csmUpdateModel").with_doc("Updates a model.").with_arg("model", "Model"),
        model_getter("csmGetParameterCount", "Int32"),
        model_getter("csmGetParameterIds", "StringArray"),
        model_getter("csmGetParameterValues", "Float32Array"),
        model_getter("csmGetPartCount", "Int32"),
        model_getter("csmGetPartOpacities", "Float32Array"),
        model_getter("csmGetDrawableCount", "Int32"),
        model_getter("csmGetDrawableVertexPositions", "Float32Array2"),
        model_getter("csmGetDrawableIndices", "Uint16Array2"),
        model_getter("csmGetDrawableDynamicFlags", "Uint8Array"),
        model_getter("csmGetDrawableVertexCounts", "Int32Array"),
        model_getter("csmGetDrawableIndexCounts", "Int32Array"),
        Function::new("csmResetDrawableDynamicFlags").with_doc("Resets flags.").with_arg("model", "Model"),
    ];

    let mut model = ApiModel { funcs, ..ApiModel::default() };

    model.clsmap.insert(
        "parameters".to_string(),
        Class {
            props: vec![
                model_prop("ids", "StringArray", "csmGetParameterIds").with_length("csmGetParameterCount", None),
                model_prop("values", "Float32Array", "csmGetParameterValues").with_length("csmGetParameterCount", None),
            ],
            ..Class::default()
        },
    );
    model.clsmap.insert(
        "parts".to_string(),
        Class {
            props: vec![model_prop("opacities", "Float32Array", "csmGetPartOpacities").with_length("csmGetPartCount", None)],
            ..Class::default()
        },
    );
    model.clsmap.insert(
        "drawables".to_string(),
        Class {
            props: vec![
                model_prop("dynamicFlags", "Uint8Array", "csmGetDrawableDynamicFlags").with_length("csmGetDrawableCount", None),
                model_prop("vertexPositions", "Float32Array2", "csmGetDrawableVertexPositions")
                    .with_length("csmGetDrawableCount", None)
                    .with_length2("csmGetDrawableVertexCounts", Some("2")),
                model_prop("indices", "Uint16Array2", "csmGetDrawableIndices")
                    .with_length("csmGetDrawableCount", None)
                    .with_length2("csmGetDrawableIndexCounts", None),
            ],
            funcs: vec![Function::new("csmResetDrawableDynamicFlags").with_arg("model", "Model")],
            ..Class::default()
        },
    );
    model
}
