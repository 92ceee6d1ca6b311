use std::path::{Path, PathBuf};

use frontmark_engine::{FenceConfig, Pipeline, PipelineConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid front matter fence in {config_path}: {field} must not be empty")]
    InvalidFence {
        config_path: PathBuf,
        field: &'static str,
    },
}

/// Pipeline settings, stored as TOML.
///
/// ```toml
/// [front_matter]
/// enabled = true
/// open = "---json"
/// close = "---"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub front_matter: FrontMatterSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatterSection {
    pub enabled: bool,
    #[serde(flatten)]
    pub fences: FenceConfig,
}

impl Default for FrontMatterSection {
    fn default() -> Self {
        Self {
            enabled: true,
            fences: FenceConfig::default(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.validate(config_path)?;
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/frontmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Extensions described by this configuration, in priority order.
    pub fn pipeline_config(&self) -> PipelineConfig {
        if self.front_matter.enabled {
            PipelineConfig::with_front_matter(self.front_matter.fences.clone())
        } else {
            PipelineConfig::empty()
        }
    }

    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(self.pipeline_config())
    }

    fn validate(&self, config_path: &Path) -> Result<(), ConfigError> {
        let fences = &self.front_matter.fences;
        let empty = if fences.open.is_empty() {
            Some("open")
        } else if fences.close.is_empty() {
            Some("close")
        } else {
            None
        };
        match empty {
            Some(field) => Err(ConfigError::InvalidFence {
                config_path: config_path.to_path_buf(),
                field,
            }),
            None => Ok(()),
        }
    }
}
