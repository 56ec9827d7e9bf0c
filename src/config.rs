//! Configuration: table locations, output layout and ontology parameters
//!
//! Loaded from YAML. Every section has defaults, so an empty file (or no
//! file at all) is a valid configuration.

use crate::model::AopId;
use crate::pathway::OrderingStrategy;
use crate::turtle::{DEFAULT_MODEL_BASE, DEFAULT_MODEL_STATE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// File name looked up in the working directory
pub const LOCAL_CONFIG: &str = "aop-owl.yaml";

/// Placeholder replaced by the AOP id in output file names
pub const AOP_PLACEHOLDER: &str = "{aop}";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Locations of the three source tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TablesConfig {
    pub event_components: PathBuf,
    pub key_events: PathBuf,
    pub relationships: PathBuf,
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            event_components: PathBuf::from("aop_wiki_tables/aop_ke_ec.csv"),
            key_events: PathBuf::from("aop_wiki_tables/aop_ke_mie_ao.tsv"),
            relationships: PathBuf::from("aop_wiki_tables/aop_ke_ker.tsv"),
        }
    }
}

/// Where and how output files are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    /// File name per AOP; must contain `{aop}`
    pub file_pattern: String,
    /// Name of the run log inside `directory`
    pub log_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("output"),
            file_pattern: "aop_{aop}_model.ttl".to_string(),
            log_file: "log.txt".to_string(),
        }
    }
}

impl OutputConfig {
    /// Path of the Turtle file for one AOP
    pub fn model_path(&self, aop: AopId) -> PathBuf {
        self.directory
            .join(self.file_pattern.replace(AOP_PLACEHOLDER, &aop.to_string()))
    }

    pub fn log_path(&self) -> PathBuf {
        self.directory.join(&self.log_file)
    }
}

/// Parameters of the generated ontology header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OntologyConfig {
    pub model_base: String,
    pub model_state: String,
}

impl Default for OntologyConfig {
    fn default() -> Self {
        Self {
            model_base: DEFAULT_MODEL_BASE.to_string(),
            model_state: DEFAULT_MODEL_STATE.to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tables: TablesConfig,
    pub output: OutputConfig,
    pub ontology: OntologyConfig,
    pub ordering: OrderingStrategy,
    /// AOPs to process; empty means every AOP in the tables
    pub aops: Vec<AopId>,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        // An empty document deserializes to unit, not to a mapping
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load an explicit file, else the first default location found, else defaults
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            info!("Loading config from: {}", path.display());
            return Self::from_file(path);
        }

        let candidates = [
            Some(PathBuf::from(LOCAL_CONFIG)),
            dirs::config_dir().map(|p| p.join("aop-owl").join("config.yaml")),
        ];
        for path in candidates.into_iter().flatten() {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::from_file(&path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Check values that deserialize fine but cannot work
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.output.file_pattern.contains(AOP_PLACEHOLDER) {
            return Err(ConfigError::Invalid {
                field: "output.file_pattern",
                reason: format!("must contain {}", AOP_PLACEHOLDER),
            });
        }
        if self.output.log_file.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "output.log_file",
                reason: "must not be empty".to_string(),
            });
        }
        if self.ontology.model_base.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "ontology.model_base",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Render as YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
