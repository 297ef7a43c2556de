/*!
Serialization of the finished document.
*/

use crate::{
    error::{SwaggerError, SwaggerResult},
    specification::RootDocument,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Output formats for a root document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    /// Format implied by a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> SwaggerResult<Self> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(SwaggerError::export_error(format!(
                "Cannot infer export format from '{}'",
                path.as_ref().display()
            ))),
        }
    }
}

impl RootDocument {
    /// Export as JSON
    pub fn to_json(&self, pretty: bool) -> SwaggerResult<String> {
        if pretty {
            serde_json::to_string_pretty(self).map_err(SwaggerError::from)
        } else {
            serde_json::to_string(self).map_err(SwaggerError::from)
        }
    }

    /// Export as YAML
    pub fn to_yaml(&self) -> SwaggerResult<String> {
        serde_yaml::to_string(self).map_err(SwaggerError::from)
    }

    /// Render in the given format
    pub fn render(&self, format: ExportFormat) -> SwaggerResult<String> {
        match format {
            ExportFormat::Json => self.to_json(true),
            ExportFormat::Yaml => self.to_yaml(),
        }
    }

    /// Write the document to `path`, creating parent directories as needed
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P, format: ExportFormat) -> SwaggerResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.render(format)?)?;
        Ok(())
    }

    /// Parse a document previously exported as JSON
    pub fn from_json(content: &str) -> SwaggerResult<Self> {
        serde_json::from_str(content).map_err(SwaggerError::from)
    }
}
