//! Assembly of the per-target binding context.

use std::fmt;

use cubism_model::{ApiModel, Conventions, Function, ModelLoader, NeutralType, Options, ScalarKind};
use indexmap::IndexMap;
use serde_json::Value;

use crate::entries::{build_entries, entry_symbol, EntryPoint};
use crate::error::{AssembleError, BindgenError, BindgenResult};
use crate::props::{normalize_class, ClassBinding};
use crate::render::Renderer;
use crate::types::TypeTable;
use crate::views::{synthesize_views, ViewWrapper};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Csharp,
    Javascript,
}

impl TargetKind {
    /// Short name used for output files and the CLI.
    pub fn name(self) -> &'static str {
        match self {
            TargetKind::Csharp => "cs",
            TargetKind::Javascript => "js",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A target language: its type table plus naming and renderer-boundary rules.
pub trait Target: TypeTable {
    const KIND: TargetKind;

    /// Appends the target's extra descriptors and template inputs.
    fn extend_options(&self, options: &mut Options);

    /// Fully-qualified name used to call `symbol` (an entry without its
    /// namespace prefix) from generated code.
    fn call_name(&self, symbol: &str) -> String;

    /// Display name of an entry point.
    fn display_name(&self, symbol: &str) -> String;

    /// One item of an entry point's argument list.
    fn format_arg(&self, name: &str, call_type: &str) -> String;

    fn view_wrapper(&self, element: ScalarKind) -> ViewWrapper;

    /// Flattens the context into the mapping the template engine consumes.
    fn flatten(&self, context: &BindingContext) -> Value;
}

/// A top-level function decorated with its call name and return surface type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionBinding {
    pub function: Function,
    pub call_name: String,
    /// `void` for void functions.
    pub return_surface: String,
}

/// The finished, read-only context of one target run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingContext {
    pub target: TargetKind,
    pub funcs: Vec<FunctionBinding>,
    pub entries: Vec<EntryPoint>,
    pub views: Vec<ViewWrapper>,
    pub classes: IndexMap<String, ClassBinding>,
    /// Model-getter class keys, in convention order.
    pub model_getters: Vec<String>,
}

impl BindingContext {
    pub fn class(&self, key: &str) -> Option<&ClassBinding> {
        self.classes.get(key)
    }

    pub fn parameters(&self) -> Option<&ClassBinding> {
        self.class("parameters")
    }

    pub fn parts(&self) -> Option<&ClassBinding> {
        self.class("parts")
    }

    pub fn drawables(&self) -> Option<&ClassBinding> {
        self.class("drawables")
    }

    pub fn model_getter_classes(&self) -> impl Iterator<Item = &ClassBinding> {
        self.model_getters.iter().filter_map(|key| self.classes.get(key))
    }

    pub fn entry(&self, entry: &str) -> Option<&EntryPoint> {
        self.entries.iter().find(|ep| ep.entry == entry)
    }
}

pub struct ContextAssembler<T: Target> {
    target: T,
    conventions: Conventions,
}

impl<T: Target> ContextAssembler<T> {
    pub fn new(target: T, conventions: Conventions) -> Self {
        Self { target, conventions }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn conventions(&self) -> &Conventions {
        &self.conventions
    }

    /// Builds the context from a loaded model.
    pub fn build(&self, model: &ApiModel) -> BindgenResult<BindingContext> {
        log::debug!("Building {} binding context", T::KIND);

        for getter in &self.conventions.model_getters {
            if !model.clsmap.contains_key(&getter.key) {
                return Err(BindgenError::shape(&getter.key, "model-getter class is missing from the class map"));
            }
        }

        let funcs = model
            .funcs
            .iter()
            .map(|func| self.decorate_function(func))
            .collect::<BindgenResult<Vec<_>>>()?;
        let entries = build_entries(&self.target, &self.conventions, &model.funcs)?;
        let views = synthesize_views(&self.target, &model.funcs)?;

        let mut classes = IndexMap::with_capacity(model.clsmap.len());
        for (key, class) in &model.clsmap {
            let mut binding = normalize_class(&self.target, &self.conventions, key, class)?;
            if let Some(getter) = self.conventions.model_getters.iter().find(|getter| &getter.key == key) {
                binding.doc = Some(getter.doc.clone());
                binding.name = Some(getter.name.clone());
            }
            classes.insert(key.clone(), binding);
        }

        log::info!(
            "{} context: {} entries, {} array views, {} classes",
            T::KIND,
            entries.len(),
            views.len(),
            classes.len()
        );

        Ok(BindingContext {
            target: T::KIND,
            funcs,
            entries,
            views,
            classes,
            model_getters: self.conventions.model_getters.iter().map(|getter| getter.key.clone()).collect(),
        })
    }

    fn decorate_function(&self, func: &Function) -> BindgenResult<FunctionBinding> {
        let symbol = entry_symbol(&self.conventions, &func.entry)?;
        let return_surface = match func.return_type() {
            Some(tag) => self.target.surface_of(NeutralType::parse(tag)?),
            None => "void".to_string(),
        };
        Ok(FunctionBinding {
            function: func.clone(),
            call_name: self.target.call_name(symbol),
            return_surface,
        })
    }

    /// Patches the options with the target extras, loads the model and builds.
    pub fn assemble(&self, options: &mut Options, loader: &dyn ModelLoader) -> Result<BindingContext, AssembleError> {
        self.target.extend_options(options);
        let model = loader.load(options)?;
        Ok(self.build(&model)?)
    }

    pub fn flatten(&self, context: &BindingContext) -> Value {
        self.target.flatten(context)
    }

    /// Runs a whole generation pass and hands the flattened context to
    /// `renderer`.
    pub fn run(
        &self,
        options: &mut Options,
        loader: &dyn ModelLoader,
        renderer: &mut dyn Renderer,
    ) -> Result<(), AssembleError> {
        let context = self.assemble(options, loader)?;
        let data = self.flatten(&context);
        renderer.render(T::KIND, &data, options)?;
        Ok(())
    }
}
