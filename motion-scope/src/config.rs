use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use common::constants::{DEFAULT_UPDATE_INTERVAL_MILLIS, HISTORY_CAPACITY};
use sampler_rs::{PhyphoxConfig, PhyphoxVariables, SamplerConfig};

/// Path of the JSON configuration file
pub(crate) const CONFIG_ENV: &str = "MOTION_SCOPE_CONFIG";
pub(crate) const SOURCE_ENV: &str = "MOTION_SCOPE_SOURCE";
pub(crate) const URL_ENV: &str = "MOTION_SCOPE_URL";

const DEFAULT_REFRESH_PERIOD_MILLIS: u64 = 200;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error reading config {0}")]
    Read(String),
    #[error("Error parsing config: {0}")]
    Parse(String),
}

/// Where device motion comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Phyphox,
    Synthetic,
    Replay,
}

impl FromStr for Source {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "phyphox" => Ok(Source::Phyphox),
            "synthetic" | "mock" => Ok(Source::Synthetic),
            "replay" => Ok(Source::Replay),
            other => Err(ConfigError::Parse(format!("Unknown source {}", other))),
        }
    }
}

/// How the chart is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    #[default]
    Gnuplot,
    Text,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: Source,
    pub base_url: String,
    pub tag: String,
    pub update_interval_millis: u64,
    pub history_capacity: usize,
    pub refresh_period_millis: u64,
    pub add_sensor_noise: bool,
    pub replay_path: PathBuf,
    pub phyphox_variables: PhyphoxVariables,
    pub renderer: RendererKind,
    /// Start sampling without waiting for the `start` command.
    pub autostart: bool,
    /// Go to background after this long. Runs until Ctrl+C or `quit` if unset.
    pub run_for_millis: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let phyphox = PhyphoxConfig::default();
        Self {
            source: Source::default(),
            base_url: phyphox.base_url,
            tag: phyphox.tag,
            update_interval_millis: DEFAULT_UPDATE_INTERVAL_MILLIS,
            history_capacity: HISTORY_CAPACITY,
            refresh_period_millis: DEFAULT_REFRESH_PERIOD_MILLIS,
            add_sensor_noise: false,
            replay_path: PathBuf::from("motion_readings.csv"),
            phyphox_variables: phyphox.variables,
            renderer: RendererKind::default(),
            autostart: false,
            run_for_millis: None,
        }
    }
}

impl AppConfig {
    /// Reads the file named by `MOTION_SCOPE_CONFIG` if set, then applies the
    /// `MOTION_SCOPE_SOURCE` and `MOTION_SCOPE_URL` overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(env::var(SOURCE_ENV).ok(), env::var(URL_ENV).ok())?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub(crate) fn apply_overrides(
        &mut self,
        source: Option<String>,
        base_url: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(source) = source {
            self.source = source.parse()?;
        }
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        Ok(())
    }

    pub fn sampler_config(&self) -> SamplerConfig {
        SamplerConfig {
            update_interval_millis: self.update_interval_millis,
            history_capacity: self.history_capacity,
        }
    }

    pub fn phyphox_config(&self) -> PhyphoxConfig {
        PhyphoxConfig {
            base_url: self.base_url.clone(),
            tag: self.tag.clone(),
            variables: self.phyphox_variables.clone(),
        }
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_millis(self.refresh_period_millis.max(1))
    }
}
