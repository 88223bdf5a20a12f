//! CLI configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use testboard_common::{DashboardEndpoint, DEFAULT_POLL_INTERVAL, DEFAULT_VIDEO_ROOT};

use crate::output::OutputFormat;

/// Settings read from `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Dashboard URL, e.g. `http://grid:4444/dashboard/`
    pub dashboard_url: Option<String>,

    /// Milliseconds between polls in watch mode
    pub poll_interval_ms: u64,

    /// Per-request timeout
    pub request_timeout_secs: u64,

    /// Directory videos are recorded under on the grid
    pub video_root: String,

    /// Default output format
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            dashboard_url: None,
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
            request_timeout_secs: 10,
            video_root: DEFAULT_VIDEO_ROOT.to_string(),
            format: OutputFormat::Table,
        }
    }
}

impl CliConfig {
    /// Load configuration from file, falling back to defaults if it is absent
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Combine with command-line overrides
    pub fn resolve(&self, url: Option<&str>, format: Option<OutputFormat>) -> Result<Settings> {
        let Some(raw) = url.or(self.dashboard_url.as_deref()) else {
            bail!("no dashboard URL given; pass --url or set dashboard_url in the config file");
        };

        Ok(Settings {
            endpoint: DashboardEndpoint::parse(raw)?,
            poll_interval: Duration::from_millis(self.poll_interval_ms.max(1)),
            request_timeout: Duration::from_secs(self.request_timeout_secs.max(1)),
            video_root: self.video_root.clone(),
            format: format.unwrap_or(self.format),
        })
    }
}

/// Effective settings for one invocation
#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint: DashboardEndpoint,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
    pub video_root: String,
    pub format: OutputFormat,
}

/// `~/.testboard/config.toml`
pub fn default_config_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".testboard")
        .join("config.toml")
}
