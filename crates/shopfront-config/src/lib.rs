//! Configuration for the shopfront terminal client.
//!
//! One TOML file (catalog host + UI timing), layered with `SHOPFRONT_`
//! environment overrides, and translated into
//! `shopfront_core::CatalogConfig`. CLI flags are applied on top by the
//! binary.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use shopfront_core::CatalogConfig;
use shopfront_core::config::DEFAULT_HOST;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("config file already exists: {} (pass --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the catalog lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Catalog host base URL (e.g., "https://fakestoreapi.com").
    #[serde(default = "default_host")]
    pub host: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Event loop timing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Interval between `Tick` events (spinner animation).
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Interval between redraws.
    #[serde(default = "default_frame_rate")]
    pub frame_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            frame_rate_ms: default_frame_rate(),
        }
    }
}

impl UiSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn frame_rate(&self) -> Duration {
        Duration::from_millis(self.frame_rate_ms.max(1))
    }
}

fn default_host() -> String {
    DEFAULT_HOST.into()
}
fn default_timeout() -> u64 {
    30
}
fn default_tick_rate() -> u64 {
    250
}
fn default_frame_rate() -> u64 {
    33
}

// ── Translation ─────────────────────────────────────────────────────

impl Config {
    /// Build the runtime catalog settings, validating the host URL.
    pub fn to_catalog_config(&self) -> Result<CatalogConfig, ConfigError> {
        let url = parse_host(&self.catalog.host)?;
        if self.catalog.timeout_secs == 0 {
            return Err(ConfigError::Validation {
                field: "catalog.timeout_secs".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(CatalogConfig {
            url,
            timeout: Duration::from_secs(self.catalog.timeout_secs),
        })
    }
}

/// Parse a catalog host, accepting only http(s) URLs.
pub fn parse_host(host: &str) -> Result<Url, ConfigError> {
    let url: Url = host.parse().map_err(|e| ConfigError::Validation {
        field: "catalog.host".into(),
        reason: format!("invalid URL '{host}': {e}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            field: "catalog.host".into(),
            reason: format!("expected an http or https URL, got '{host}'"),
        });
    }
    Ok(url)
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "shopfront", "shopfront").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Log file location used when `--log-file` is not given.
pub fn default_log_path() -> PathBuf {
    ProjectDirs::from("com", "shopfront", "shopfront").map_or_else(
        || std::env::temp_dir().join("shopfront.log"),
        |dirs| dirs.cache_dir().join("shopfront.log"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("shopfront");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from `path` + environment. A missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SHOPFRONT_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Write the default config to the canonical path. An existing file is
/// left alone unless `force` is set.
pub fn init_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    init_config_at(&path, force)?;
    Ok(path)
}

/// [`init_config`] against an explicit path.
pub fn init_config_at(path: &Path, force: bool) -> Result<(), ConfigError> {
    if !force && path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    save_config_to(&Config::default(), path)
}

/// Serialize config to TOML and write it to `path`, creating parents.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
