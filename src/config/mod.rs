use crate::core::resolver::Rollover;
use crate::errors::{AppError, AppResult};
use crate::models::Zone;
use crate::provider::esolat::DEFAULT_PROVIDER_URL;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_zone")]
    pub zone: String,
    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,
    #[serde(default = "default_provider_url")]
    pub provider_url: String,
    #[serde(default = "default_icon_path")]
    pub icon_path: String,
    #[serde(default)]
    pub rollover: Rollover,
}

fn default_zone() -> String {
    "WLY01".to_string()
}
fn default_cache_dir() -> String {
    Config::config_dir()
        .join("cache")
        .to_string_lossy()
        .to_string()
}
fn default_provider_url() -> String {
    DEFAULT_PROVIDER_URL.to_string()
}
fn default_icon_path() -> String {
    "./mosque.png".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zone: default_zone(),
            cache_dir: default_cache_dir(),
            provider_url: default_provider_url(),
            icon_path: default_icon_path(),
            rollover: Rollover::default(),
        }
    }
}

impl Config {
    /// `~/.rsolat`, or `./.rsolat` when no home directory is known
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rsolat")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rsolat.conf")
    }

    /// Load `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn zone(&self) -> AppResult<Zone> {
        Zone::parse(&self.zone)
    }

    /// Cache directory with `~` expanded
    pub fn cache_path(&self) -> PathBuf {
        expand_tilde(&self.cache_dir)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write `self` to `path` and create the cache directory.
    ///
    /// An existing config file is left alone unless `force` is set; the
    /// return value tells whether the file was written.
    pub fn init_at(&self, path: &Path, force: bool) -> AppResult<bool> {
        fs::create_dir_all(self.cache_path())?;

        if path.exists() && !force {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(true)
    }
}
