mod common;

use std::cell::Cell;

use cubism_bindgen::targets::{Csharp, Javascript};
use cubism_bindgen::{AssembleError, BindgenError, ContextAssembler, JsonDump, TargetKind};
use cubism_model::{ApiModel, Conventions, LoadError, ModelLoader, Options};
use serde_json::json;

/// Loader returning a fixed model and recording the options it saw.
struct FixedLoader {
    model: ApiModel,
    seen_yamlfiles: Cell<usize>,
}

impl FixedLoader {
    fn new(model: ApiModel) -> Self {
        Self { model, seen_yamlfiles: Cell::new(0) }
    }
}

impl ModelLoader for FixedLoader {
    fn load(&self, options: &Options) -> Result<ApiModel, LoadError> {
        self.seen_yamlfiles.set(options.yamlfiles.len());
        Ok(self.model.clone())
    }
}

#[test]
fn test_csharp_context_build() {
    let assembler = ContextAssembler::new(Csharp, Conventions::default());
    let context = assembler.build(&common::sample_model()).unwrap();

    assert_eq!(context.target, TargetKind::Csharp);
    assert_eq!(context.funcs.len(), 16);
    assert_eq!(context.entries.len(), 16);
    assert_eq!(context.views.len(), 4);

    let values = context.entry("csmGetParameterValues").unwrap();
    assert_eq!(values.return_call_type(), "float*");
    assert!(values.requires_unsafe);

    let version = &context.funcs[0];
    assert_eq!(version.call_name, "CubismCoreDll.GetVersion");
    assert_eq!(version.return_surface, "uint");
    let update = context.funcs.iter().find(|f| f.function.entry == "csmUpdateModel").unwrap();
    assert_eq!(update.return_surface, "void");

    let parameters = context.parameters().unwrap();
    assert_eq!(parameters.name.as_deref(), Some("Parameters"));
    assert_eq!(parameters.doc.as_deref(), Some("Cubism model parameters"));
    assert_eq!(context.parts().unwrap().name.as_deref(), Some("Parts"));
    assert_eq!(context.drawables().unwrap().doc.as_deref(), Some("Cubism model drawables"));

    let keys: Vec<_> = context.model_getter_classes().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["parameters", "parts", "drawables"]);
}

#[test]
fn test_csharp_flattened_context() {
    let assembler = ContextAssembler::new(Csharp, Conventions::default());
    let context = assembler.build(&common::sample_model()).unwrap();
    let data = assembler.flatten(&context);

    let values = &data["dllentries"][6];
    assert_eq!(values["entrypoint"], json!("csmGetParameterValues"));
    assert_eq!(values["funcname"], json!("GetParameterValues"));
    assert_eq!(values["args"], json!("IntPtr model"));
    assert_eq!(values["returntype"], json!("unsafe float*"));
    assert_eq!(values["unsafe"], json!(true));

    let update = &data["dllentries"][3];
    assert_eq!(update["returntype"], json!("void"));
    assert_eq!(update["unsafe"], json!(false));

    assert_eq!(data["funcs"][0]["funccsentry"], json!("CubismCoreDll.GetVersion"));
    assert_eq!(data["funcs"][6]["funccsreturntype"], json!("CubismUnmanagedFloatArrayView"));
    assert_eq!(data["arrayviews"][0], json!({ "Name": "Float", "type": "float" }));

    let positions = &data["clsmap"]["drawables"]["props"][1];
    assert_eq!(positions["propcstype"], json!("CubismUnmanagedFloatArrayView[]"));
    assert_eq!(positions["propcstype1d"], json!("CubismUnmanagedFloatArrayView"));
    assert_eq!(positions["propget"], json!("CubismCoreDll.GetDrawableVertexPositions"));
    assert_eq!(positions["propgetlength"], json!("CubismCoreDll.GetDrawableCount"));
    assert_eq!(positions["propgetlength2"], json!("CubismCoreDll.GetDrawableVertexCounts"));
    assert_eq!(positions["proplength2factor"], json!(" * 2"));
    assert!(positions.get("proplengthfactor").is_none());

    let flags = &data["clsmap"]["drawables"]["props"][0];
    assert!(flags.get("propcstype1d").is_none());
    assert!(flags.get("propgetlength2").is_none());

    assert_eq!(data["parameters"], data["clsmap"]["parameters"]);
    assert_eq!(data["parts"]["clsname"], json!("Parts"));
    assert!(data.get("ccalls").is_none());
}

#[test]
fn test_javascript_flattened_context() {
    let assembler = ContextAssembler::new(Javascript, Conventions::default());
    let context = assembler.build(&common::sample_model()).unwrap();
    let data = assembler.flatten(&context);

    let returning = data["ccalls"]["return"].as_array().unwrap();
    let void = data["ccalls"]["void"].as_array().unwrap();
    assert_eq!(returning.len(), 14);
    assert_eq!(void.len(), 2);
    assert_eq!(void[0]["name"], json!("updateModel"));
    assert!(void[0].get("returnType").is_none());
    assert_eq!(void[1]["entry"], json!("csmResetDrawableDynamicFlags"));

    let revive = &returning[1];
    assert_eq!(revive["name"], json!("reviveMocInPlace"));
    assert_eq!(revive["args"], json!("address: number, size: number"));
    assert_eq!(revive["argTypes"], json!("\"number\", \"number\""));
    assert_eq!(revive["argNames"], json!("address, size"));
    assert_eq!(revive["returnType"], json!("number"));

    let drawables = &data["clsmap"]["drawables"];
    assert_eq!(drawables["funcs"][0]["ccall"], json!("_csm.resetDrawableDynamicFlags"));
    assert_eq!(drawables["props"][1]["proptstype"], json!("Array<Float32Array>"));

    let flags = &drawables["scalararrayprops"][0];
    assert_eq!(flags["propname"], json!("dynamicFlags"));
    assert_eq!(flags["propemheapbuffer"], json!("_em.HEAPU8.buffer"));
    assert_eq!(flags["propget"], json!("_csm.getDrawableDynamicFlags"));

    let indices = &drawables["scalararray2props"][1];
    assert_eq!(indices["proparray1tstype"], json!("Uint16Array"));
    assert_eq!(indices["propemheapbuffer"], json!("_em.HEAPU16.buffer"));
    assert_eq!(indices["propgetlength2"], json!("_csm.getDrawableIndexCounts"));

    let getters = data["modelgetterclss"].as_array().unwrap();
    let names: Vec<_> = getters.iter().map(|c| c["clsname"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Parameters", "Parts", "Drawables"]);
    assert_eq!(getters[0]["clsdoc"], json!("Cubism model parameters"));
    assert_eq!(data["drawables"], data["clsmap"]["drawables"]);
    assert!(data.get("dllentries").is_none());
}

#[test]
fn test_missing_model_getter_class_fails() {
    let mut model = common::sample_model();
    model.clsmap.shift_remove("parts");

    let assembler = ContextAssembler::new(Csharp, Conventions::default());
    match assembler.build(&model) {
        Err(BindgenError::ShapeViolation { subject, .. }) => assert_eq!(subject, "parts"),
        other => panic!("Expected ShapeViolation, got {:?}", other),
    }
}

#[test]
fn test_shape_violation_aborts_build() {
    let mut model = common::sample_model();
    if let Some(parameters) = model.clsmap.get_mut("parameters") {
        parameters.props[1].args.push(cubism_model::Arg::new("index", "Int32"));
    }

    let assembler = ContextAssembler::new(Javascript, Conventions::default());
    assert!(matches!(assembler.build(&model), Err(BindgenError::ShapeViolation { .. })));
}

#[test]
fn test_custom_conventions() {
    let mut conventions = Conventions::default();
    conventions.model_getters.truncate(1);
    conventions.model_getters[0].name = "Params".to_string();

    let mut model = common::sample_model();
    model.clsmap.shift_remove("parts");
    model.clsmap.shift_remove("drawables");

    let assembler = ContextAssembler::new(Javascript, conventions);
    let context = assembler.build(&model).unwrap();
    assert_eq!(context.model_getters, vec!["parameters".to_string()]);
    let data = assembler.flatten(&context);
    assert_eq!(data["modelgetterclss"][0]["clsname"], json!("Params"));
    assert!(data.get("parts").is_none());
}

#[test]
fn test_assemble_patches_options_before_loading() {
    let loader = FixedLoader::new(common::sample_model());

    let mut options = Options::default();
    let assembler = ContextAssembler::new(Javascript, options.conventions.clone());
    assembler.assemble(&mut options, &loader).unwrap();
    assert_eq!(loader.seen_yamlfiles.get(), 2);
    assert_eq!(options.yamlfiles[1], "Live2DCubismCoreEMSCRIPTEN.yaml");
    assert_eq!(options.infiles.len(), 3);

    let mut options = Options::default();
    let assembler = ContextAssembler::new(Csharp, options.conventions.clone());
    assembler.assemble(&mut options, &loader).unwrap();
    assert_eq!(loader.seen_yamlfiles.get(), 1);
    assert_eq!(options.infiles.len(), 10);
    assert!(options.infiles[1].ends_with("CubismCoreDll.cs"));
    assert!(options.infiles[1].starts_with("cs"));
}

#[test]
fn test_run_writes_context_dump() {
    let dir = tempfile::tempdir().unwrap();
    let loader = FixedLoader::new(common::sample_model());
    let mut options = Options::new(dir.path().join("out"));

    let assembler = ContextAssembler::new(Csharp, Conventions::default());
    assembler.run(&mut options, &loader, &mut JsonDump::new(true)).unwrap();

    let text = std::fs::read_to_string(dir.path().join("out").join("cs.context.json")).unwrap();
    let written: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(written["target"], json!("cs"));
    assert_eq!(written["infiles"].as_array().unwrap().len(), 10);
    assert_eq!(written["context"]["dllentries"][0]["funcname"], json!("GetVersion"));
}

#[test]
fn test_run_does_not_write_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = common::sample_model();
    model.funcs[0].ret = Some(cubism_model::Return { ty: "Float64".to_string() });
    let loader = FixedLoader::new(model);
    let mut options = Options::new(dir.path().join("out"));

    let assembler = ContextAssembler::new(Csharp, Conventions::default());
    let err = assembler.run(&mut options, &loader, &mut JsonDump::default()).unwrap_err();
    assert!(matches!(err, AssembleError::Bindgen(BindgenError::UnmappedType(_))));
    assert!(!dir.path().join("out").exists());
}
