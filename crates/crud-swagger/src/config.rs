use crate::{
    error::{SwaggerError, SwaggerResult},
    specification::{ApiInfo, RootDocument, SecurityScheme},
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Configuration for document synthesis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwaggerConfig {
    /// Pattern stripped (first match) from mount paths before deriving tags
    pub prefix: Option<String>,

    /// Pattern whose first match in the mount path becomes the tag's version suffix
    #[serde(alias = "versionPrefix")]
    pub version_prefix: Option<String>,

    /// Services to leave out of the document
    pub ignore: IgnoreConfig,

    /// Pagination of `find` results; `None` means plain arrays
    pub paginate: Option<PaginateConfig>,

    /// Security scheme every generated operation requires
    #[serde(alias = "securityScheme")]
    pub security_scheme: String,

    /// Document-level settings used to seed a new root document
    pub info: InfoConfig,
    pub host: Option<String>,
    #[serde(alias = "basePath")]
    pub base_path: Option<String>,
    pub schemes: Vec<String>,
    pub produces: Vec<String>,
    pub consumes: Vec<String>,
}

/// Ignore rules
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnoreConfig {
    /// Tags whose services contribute nothing
    pub tags: Vec<String>,
}

/// Pagination settings of the hosting framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginateConfig {
    /// Page size when the client sends no `$limit`
    pub default: u32,
    /// Largest page size honoured
    pub max: u32,
}

impl Default for PaginateConfig {
    fn default() -> Self {
        Self {
            default: 10,
            max: 50,
        }
    }
}

/// API information section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoConfig {
    pub title: String,
    pub description: Option<String>,
    pub version: String,
}

impl Default for InfoConfig {
    fn default() -> Self {
        Self {
            title: "API Documentation".to_string(),
            description: Some("Auto-generated API documentation".to_string()),
            version: "1.0.0".to_string(),
        }
    }
}

impl Default for SwaggerConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            version_prefix: None,
            ignore: IgnoreConfig::default(),
            paginate: None,
            security_scheme: "jwt".to_string(),
            info: InfoConfig::default(),
            host: None,
            base_path: None,
            schemes: vec!["http".to_string()],
            produces: vec!["application/json".to_string()],
            consumes: vec!["application/json".to_string()],
        }
    }
}

impl SwaggerConfig {
    /// Create a new configuration with custom API info
    pub fn new(title: &str, version: &str) -> Self {
        let mut config = Self::default();
        config.info.title = title.to_string();
        config.info.version = version.to_string();
        config
    }

    /// Parse a TOML configuration
    pub fn from_toml_str(content: &str) -> SwaggerResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> SwaggerResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Set the mount path prefix pattern
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    /// Set the version pattern
    pub fn with_version_prefix(mut self, pattern: &str) -> Self {
        self.version_prefix = Some(pattern.to_string());
        self
    }

    /// Ignore every service whose tag is `tag`
    pub fn ignore_tag(mut self, tag: &str) -> Self {
        self.ignore.tags.push(tag.to_string());
        self
    }

    /// Enable paginated list envelopes
    pub fn with_paginate(mut self, paginate: PaginateConfig) -> Self {
        self.paginate = Some(paginate);
        self
    }

    /// Check settings that cannot be caught by the type system
    pub fn validate(&self) -> SwaggerResult<()> {
        if self.security_scheme.trim().is_empty() {
            return Err(SwaggerError::config_error("security_scheme must not be empty"));
        }

        if self.info.title.trim().is_empty() {
            return Err(SwaggerError::config_error("info.title must not be empty"));
        }

        if let Some(paginate) = self.paginate {
            if paginate.default == 0 || paginate.default > paginate.max {
                return Err(SwaggerError::config_error(format!(
                    "paginate.default must be between 1 and paginate.max ({})",
                    paginate.max
                )));
            }
        }

        Ok(())
    }

    /// Validate and compile patterns for use during registration
    pub fn compile(&self) -> SwaggerResult<CompiledConfig> {
        self.validate()?;

        Ok(CompiledConfig {
            prefix: compile_pattern(self.prefix.as_deref())?,
            version_prefix: compile_pattern(self.version_prefix.as_deref())?,
            ignore_tags: self.ignore.tags.iter().cloned().collect(),
            paginate: self.paginate,
            security_scheme: self.security_scheme.clone(),
        })
    }

    /// A fresh root document carrying this configuration's document-level settings
    pub fn root_document(&self) -> RootDocument {
        let mut document = RootDocument::new(&self.info.title, &self.info.version);
        document.info = ApiInfo {
            title: self.info.title.clone(),
            description: self.info.description.clone(),
            terms_of_service: None,
            version: self.info.version.clone(),
        };
        document.host = self.host.clone();
        document.base_path = self.base_path.clone();
        document.schemes = self.schemes.clone();
        document.produces = self.produces.clone();
        document.consumes = self.consumes.clone();
        document.security_definitions.insert(
            self.security_scheme.clone(),
            SecurityScheme::ApiKey {
                name: "Authorization".to_string(),
                location: "header".to_string(),
                description: Some("Bearer token (JWT)".to_string()),
            },
        );
        document
    }
}

/// Configuration with its patterns compiled, used by every registration
#[derive(Debug, Clone)]
pub struct CompiledConfig {
    pub prefix: Option<Regex>,
    pub version_prefix: Option<Regex>,
    pub ignore_tags: HashSet<String>,
    pub paginate: Option<PaginateConfig>,
    pub security_scheme: String,
}

impl CompiledConfig {
    /// Whether services under `tag` are left out
    pub fn is_ignored(&self, tag: &str) -> bool {
        self.ignore_tags.contains(tag)
    }
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            version_prefix: None,
            ignore_tags: HashSet::new(),
            paginate: None,
            security_scheme: "jwt".to_string(),
        }
    }
}

fn compile_pattern(pattern: Option<&str>) -> SwaggerResult<Option<Regex>> {
    match pattern {
        Some(pattern) if !pattern.is_empty() => Regex::new(pattern)
            .map(Some)
            .map_err(|e| SwaggerError::pattern_error(pattern, e)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_compiles() {
        let compiled = SwaggerConfig::default().compile().unwrap();
        assert!(compiled.prefix.is_none());
        assert!(compiled.version_prefix.is_none());
        assert_eq!(compiled.security_scheme, "jwt");
    }

    #[test]
    fn test_empty_prefix_is_no_prefix() {
        let compiled = SwaggerConfig::default().with_prefix("").compile().unwrap();
        assert!(compiled.prefix.is_none());
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = SwaggerConfig::default()
            .with_version_prefix("v(\\d+")
            .compile()
            .unwrap_err();
        assert!(matches!(err, SwaggerError::Pattern { .. }));
    }

    #[test]
    fn test_paginate_validation() {
        let config = SwaggerConfig::default().with_paginate(PaginateConfig { default: 100, max: 50 });
        assert!(matches!(config.validate(), Err(SwaggerError::Config(_))));
    }

    #[test]
    fn test_from_toml_str() {
        let config = SwaggerConfig::from_toml_str(
            r#"
            prefix = "api/v\\d+/"
            versionPrefix = "v\\d+"
            security_scheme = "bearer"

            [ignore]
            tags = ["authentication"]

            [paginate]
            default = 25
            max = 100

            [info]
            title = "Widgets"
            version = "2.1.0"
            "#,
        )
        .unwrap();

        assert_eq!(config.prefix.as_deref(), Some("api/v\\d+/"));
        assert_eq!(config.version_prefix.as_deref(), Some("v\\d+"));
        assert_eq!(config.ignore.tags, vec!["authentication".to_string()]);
        assert_eq!(config.paginate, Some(PaginateConfig { default: 25, max: 100 }));

        let compiled = config.compile().unwrap();
        assert!(compiled.is_ignored("authentication"));
        assert!(!compiled.is_ignored("widgets"));
    }

    #[test]
    fn test_root_document_seeding() {
        let document = SwaggerConfig::new("Widgets", "3.0.0").root_document();
        assert_eq!(document.swagger, "2.0");
        assert_eq!(document.info.title, "Widgets");
        assert_eq!(document.produces, vec!["application/json".to_string()]);
        assert!(document.security_definitions.contains_key("jwt"));
        assert!(document.paths.is_empty());
    }
}
