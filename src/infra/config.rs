//! Client configuration — environment first, YAML file fallback.
//!
//! The environment mirrors what the original deployment used
//! (`ALIYUN_REGION` plus access key pair); `~/.ecsx/config.yaml` covers the
//! same fields for interactive use. Environment always wins.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::error::ConfigError;

/// Default API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://ecs.aliyuncs.com";

/// Fully resolved client configuration.
#[derive(Debug, Clone)]
pub struct EcsConfig {
    /// Region injected into every outbound request.
    pub region: String,
    pub access_key_id: String,
    pub access_key_secret: String,
    pub endpoint: String,
}

/// On-disk shape of `~/.ecsx/config.yaml`. Every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
struct FileConfig {
    region: Option<String>,
    access_key_id: Option<String>,
    access_key_secret: Option<String>,
    endpoint: Option<String>,
}

impl EcsConfig {
    /// Resolve configuration from the process environment and the optional
    /// config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is unreadable/unparsable, or if
    /// region or credentials are configured nowhere.
    pub fn load() -> Result<Self> {
        let file = read_file_config_at(&config_path()?)?;
        Self::resolve(|key| std::env::var(key).ok(), &file)
    }

    fn resolve(env: impl Fn(&str) -> Option<String>, file: &FileConfig) -> Result<Self> {
        let region = env("ALIYUN_REGION")
            .or_else(|| file.region.clone())
            .ok_or(ConfigError::MissingRegion)?;
        let access_key_id = env("ALIYUN_ACCESS_KEY_ID")
            .or_else(|| file.access_key_id.clone())
            .ok_or(ConfigError::MissingCredentials)?;
        let access_key_secret = env("ALIYUN_ACCESS_KEY_SECRET")
            .or_else(|| file.access_key_secret.clone())
            .ok_or(ConfigError::MissingCredentials)?;
        let endpoint = env("ALIYUN_ECS_ENDPOINT")
            .or_else(|| file.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Ok(Self {
            region,
            access_key_id,
            access_key_secret,
            endpoint,
        })
    }
}

fn config_path() -> Result<PathBuf> {
    if let Ok(val) = std::env::var("ECSX_CONFIG") {
        return Ok(PathBuf::from(val));
    }
    let home =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
    Ok(home.join(".ecsx").join("config.yaml"))
}

fn read_file_config_at(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
}
