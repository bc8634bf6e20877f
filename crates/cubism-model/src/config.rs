use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default name of the options file looked up by the CLI.
pub const OPTIONS_FILE: &str = "bindgen.toml";

/// Options for one generator run.
///
/// Targets extend `yamlfiles` and `infiles` with their own extras before the
/// descriptors are loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Descriptor files, relative to `datadir`, merged in order.
    pub yamlfiles: Vec<String>,
    /// Extra template/support inputs, relative to `templatesdir`.
    pub infiles: Vec<PathBuf>,
    pub outdir: PathBuf,
    pub datadir: PathBuf,
    /// Defaults to `<datadir>/templates` when not set.
    pub templatesdir: Option<PathBuf>,
    pub conventions: Conventions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            yamlfiles: vec!["Live2DCubismCore.yaml".to_string()],
            infiles: Vec::new(),
            outdir: PathBuf::from("out"),
            datadir: PathBuf::from("data"),
            templatesdir: None,
            conventions: Conventions::default(),
        }
    }
}

impl Options {
    pub fn new(outdir: impl Into<PathBuf>) -> Self {
        Self { outdir: outdir.into(), ..Self::default() }
    }

    /// Reads options from a TOML file. Every key is optional.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let options: Options = toml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        log::debug!("Loaded options from {}: {:?}", path.display(), options);
        Ok(options)
    }

    pub fn templatesdir(&self) -> PathBuf {
        self.templatesdir
            .clone()
            .unwrap_or_else(|| self.datadir.join("templates"))
    }

    pub fn push_yaml(&mut self, file: impl Into<String>) {
        self.yamlfiles.push(file.into());
    }

    pub fn push_infile(&mut self, path: impl Into<PathBuf>) {
        self.infiles.push(path.into());
    }

    /// Descriptor paths resolved against the data directory.
    pub fn descriptor_paths(&self) -> Vec<PathBuf> {
        self.yamlfiles.iter().map(|file| self.datadir.join(file)).collect()
    }

    /// Extra inputs resolved against the templates directory.
    pub fn infile_paths(&self) -> Vec<PathBuf> {
        let templates = self.templatesdir();
        self.infiles.iter().map(|file| templates.join(file)).collect()
    }
}

/// Naming conventions of the native API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conventions {
    /// Symbol namespace prefix carried by every entry (`csm`).
    pub namespace: String,
    /// Classes whose every accessor takes exactly one model handle.
    pub model_getters: Vec<ModelGetter>,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            namespace: "csm".to_string(),
            model_getters: vec![
                ModelGetter::new("parameters", "Cubism model parameters", "Parameters"),
                ModelGetter::new("parts", "Cubism model parts", "Parts"),
                ModelGetter::new("drawables", "Cubism model drawables", "Drawables"),
            ],
        }
    }
}

impl Conventions {
    pub fn is_model_getter(&self, class: &str) -> bool {
        self.model_getters.iter().any(|getter| getter.key == class)
    }

    /// Strips the namespace prefix off an entry symbol.
    pub fn strip_namespace<'a>(&self, entry: &'a str) -> Option<&'a str> {
        entry.strip_prefix(self.namespace.as_str())
    }
}

/// A model-getter class key with its documentation label and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelGetter {
    pub key: String,
    pub doc: String,
    pub name: String,
}

impl ModelGetter {
    pub fn new(key: impl Into<String>, doc: impl Into<String>, name: impl Into<String>) -> Self {
        Self { key: key.into(), doc: doc.into(), name: name.into() }
    }
}
