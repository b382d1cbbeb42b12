use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding `api.key`.
pub const API_KEY_ENV: &str = "UNTAPPD_API_KEY";
/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "UNTAPPD_API_URL";

/// Upstream API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Application key sent with every request
    pub key: String,
    /// Root of the versioned API, e.g. `https://api.untappd.com/v3`
    pub base_url: String,
    /// Public site used for beer links in the report
    pub web_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            base_url: "https://api.untappd.com/v3".into(),
            web_url: "https://untappd.com".into(),
            timeout_secs: 30,
        }
    }
}

/// Static content of the generated page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub title: String,
    pub owner: String,
    pub owner_email: String,
    pub stylesheet: String,
    /// Directory holding `<code>.png` flag icons, relative to the page
    pub flag_icon_dir: String,
    pub copyright_since: i32,
    /// Prefix for brewery social handles
    pub social_url: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Beers I've already drunk".into(),
            owner: String::new(),
            owner_email: String::new(),
            stylesheet: "style.css".into(),
            flag_icon_dir: "images/icons/flags/png".into(),
            copyright_since: 2003,
            social_url: "https://twitter.com".into(),
        }
    }
}

/// Main configuration for xbeers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub report: ReportConfig,
}

impl Config {
    /// Load the config file at `path`, or the default location when `None`,
    /// then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => match Self::default_path() {
                Some(path) => Self::load_from(&path)?,
                None => Self::default(),
            },
        };
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Load config from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make every request fail.
    pub fn validate(&self) -> Result<()> {
        if self.api.timeout_secs == 0 {
            return Err(Error::Config("api.timeout_secs must be at least 1".into()));
        }
        Ok(())
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Overlay values taken from the environment. `lookup` is injected so
    /// tests don't touch the process environment.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.is_empty()) {
            self.api.key = key;
        }
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.is_empty()) {
            self.api.base_url = url;
        }
    }

    /// `<config dir>/xbeers/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("xbeers").join("config.toml"))
    }
}
