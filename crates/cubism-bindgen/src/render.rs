//! The boundary to the template engine.

use std::path::PathBuf;

use cubism_model::Options;
use serde_json::Value;

use crate::context::TargetKind;
use crate::error::RenderError;

/// Consumes a flattened generation context.
pub trait Renderer {
    /// Renders `data` for `target`, returning the written paths.
    fn render(&mut self, target: TargetKind, data: &Value, options: &Options) -> Result<Vec<PathBuf>, RenderError>;
}

/// Writes the flattened context as `<outdir>/<target>.context.json` so an
/// external template engine can pick it up together with `infiles`.
#[derive(Debug, Default)]
pub struct JsonDump {
    pub pretty: bool,
}

impl JsonDump {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Renderer for JsonDump {
    fn render(&mut self, target: TargetKind, data: &Value, options: &Options) -> Result<Vec<PathBuf>, RenderError> {
        let mut document = serde_json::Map::new();
        document.insert("target".to_string(), Value::String(target.name().to_string()));
        document.insert(
            "templatesdir".to_string(),
            Value::String(options.templatesdir().display().to_string()),
        );
        document.insert(
            "infiles".to_string(),
            Value::Array(
                options
                    .infile_paths()
                    .iter()
                    .map(|path| Value::String(path.display().to_string()))
                    .collect(),
            ),
        );
        document.insert("context".to_string(), data.clone());
        let document = Value::Object(document);

        let text = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };

        std::fs::create_dir_all(&options.outdir).map_err(|source| RenderError::Io {
            path: options.outdir.clone(),
            source,
        })?;
        let path = options.outdir.join(format!("{}.context.json", target.name()));
        std::fs::write(&path, text).map_err(|source| RenderError::Io { path: path.clone(), source })?;
        log::info!("Wrote {}", path.display());
        Ok(vec![path])
    }
}
