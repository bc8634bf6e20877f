use std::path::Path;

use crate::config::Options;
use crate::error::LoadError;
use crate::model::ApiModel;

/// Produces the neutral API model for a run.
pub trait ModelLoader {
    fn load(&self, options: &Options) -> Result<ApiModel, LoadError>;
}

/// Loads YAML descriptors listed in [`Options::yamlfiles`].
///
/// Each file holds one model fragment (`funcs` and/or `clsmap`); fragments
/// are merged in file order so target descriptors extend the core one.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlLoader;

impl YamlLoader {
    pub fn load_file(path: &Path) -> Result<ApiModel, LoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    pub fn parse(contents: &str, path: &Path) -> Result<ApiModel, LoadError> {
        serde_yaml::from_str(contents).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl ModelLoader for YamlLoader {
    fn load(&self, options: &Options) -> Result<ApiModel, LoadError> {
        let paths = options.descriptor_paths();
        if paths.is_empty() {
            return Err(LoadError::NoDescriptors);
        }

        let mut model = ApiModel::default();
        for path in &paths {
            log::debug!("Loading descriptor {}", path.display());
            model.merge(Self::load_file(path)?);
        }
        log::info!(
            "Loaded {} functions and {} classes from {} descriptor(s)",
            model.funcs.len(),
            model.clsmap.len(),
            paths.len()
        );
        Ok(model)
    }
}
