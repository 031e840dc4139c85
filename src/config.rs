//! Layer configuration for the lookup binary.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LookupConfig {
    #[serde(default)]
    pub global: GlobalConfig,
    #[serde(default)]
    pub layers: Vec<LayerConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GlobalConfig {
    /// HTTP timeout for remote layers
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Layer whose geometry bounds all other zones; hits whose center
    /// falls outside it are dropped
    pub region: Option<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            region: None,
        }
    }
}

fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LayerConfig {
    pub name: String,
    /// http(s) URL or file path
    pub source: String,
    pub label_property: Option<String>,
}

impl LayerConfig {
    /// Parse the `name=source` command-line form
    pub fn from_arg(arg: &str) -> Result<Self> {
        let (name, source) = arg
            .split_once('=')
            .filter(|(name, source)| !name.is_empty() && !source.is_empty())
            .with_context(|| format!("layer must look like name=source, got `{}`", arg))?;
        Ok(Self {
            name: name.to_string(),
            source: source.to_string(),
            label_property: None,
        })
    }
}

impl LookupConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: LookupConfig = toml::from_str(content).context("Failed to parse config file")?;
        Ok(config)
    }
}
