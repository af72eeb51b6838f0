use crate::domain::constants::DEFAULT_CURRENCY;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: ConfigGeneral,
}

#[derive(Debug, Deserialize)]
pub struct ConfigGeneral {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ConfigGeneral {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            json: false,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("config file not found: {0}")]
pub struct MissingConfig(pub String);

fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/esgform/config.toml"))
}

pub fn parse_config(raw: &str) -> anyhow::Result<ConfigFile> {
    Ok(toml::from_str(raw)?)
}

/// An explicit path must exist; the default location is optional.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<ConfigFile> {
    let path = match explicit {
        Some(p) if !p.exists() => {
            return Err(MissingConfig(p.to_string_lossy().to_string()).into());
        }
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(ConfigFile::default()),
        },
    };
    tracing::debug!(path = %path.display(), "loading config");
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&raw).with_context(|| format!("parsing config {}", path.display()))
}
