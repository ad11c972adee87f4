use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetcher::CurlOptions;

/// Environment variable that overrides `api_key` from the config file.
pub const API_KEY_ENV: &str = "BRANDFETCH_API_KEY";

/// Global configuration loaded from `~/.config/brandkit/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandkitConfig {
    /// Brand API base URL.
    pub api_base_url: String,
    /// Brand API key; `BRANDFETCH_API_KEY` takes precedence.
    #[serde(default)]
    pub api_key: Option<String>,
    /// TCP/TLS connect timeout for every request.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout for every request.
    pub request_timeout_secs: u64,
    /// Optional override of the browser user agent used for asset downloads.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Directory used by `quick --download-default`.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

impl Default for BrandkitConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.brandfetch.io".to_string(),
            api_key: None,
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
            user_agent: None,
            download_dir: None,
        }
    }
}

impl BrandkitConfig {
    pub fn curl_options(&self) -> CurlOptions {
        CurlOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    /// Resolves the API key from `env_value` (the environment) or the file.
    /// Empty values count as unset.
    pub fn resolve_api_key(&self, env_value: Option<String>) -> Result<String> {
        let key = env_value
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|k| !k.trim().is_empty()));
        match key {
            Some(k) => Ok(k.trim().to_string()),
            None => bail!(
                "no API key configured: set {} or api_key in {}",
                API_KEY_ENV,
                config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "config.toml".to_string())
            ),
        }
    }

    /// `resolve_api_key` reading `BRANDFETCH_API_KEY` from the process environment.
    pub fn api_key_from_env(&self) -> Result<String> {
        self.resolve_api_key(std::env::var(API_KEY_ENV).ok())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("brandkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BrandkitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BrandkitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: BrandkitConfig = toml::from_str(&data)?;
    Ok(cfg)
}
