//! Optional RON settings file for the console.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use engine_logging::engine_info;
use media_extract_engine::{ExtractorSettings, SettingsError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid settings in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: SettingsError,
    },
}

/// File representation; every field may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub min_latency_ms: u64,
    pub max_latency_ms: u64,
    pub download_latency_ms: u64,
    pub glitch_enabled: bool,
    pub glitch_period_ms: u64,
    pub glitch_pulse_ms: u64,
    pub thumbnail_endpoint: String,
    pub thumbnail_width: u32,
    pub thumbnail_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        let settings = ExtractorSettings::default();
        Self {
            min_latency_ms: millis(settings.min_latency),
            max_latency_ms: millis(settings.max_latency),
            download_latency_ms: millis(settings.download_latency),
            glitch_enabled: true,
            glitch_period_ms: millis(settings.glitch_period),
            glitch_pulse_ms: millis(settings.glitch_pulse),
            thumbnail_endpoint: settings.thumbnail_endpoint,
            thumbnail_width: settings.thumbnail_width,
            thumbnail_height: settings.thumbnail_height,
        }
    }
}

impl AppConfig {
    pub fn to_settings(&self) -> ExtractorSettings {
        ExtractorSettings {
            min_latency: Duration::from_millis(self.min_latency_ms),
            max_latency: Duration::from_millis(self.max_latency_ms),
            download_latency: Duration::from_millis(self.download_latency_ms),
            glitch_period: Duration::from_millis(self.glitch_period_ms),
            glitch_pulse: Duration::from_millis(self.glitch_pulse_ms),
            thumbnail_endpoint: self.thumbnail_endpoint.clone(),
            thumbnail_width: self.thumbnail_width,
            thumbnail_height: self.thumbnail_height,
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Load `path`, falling back to defaults when the file does not exist.
pub(crate) fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            engine_info!("No config at {:?}; using defaults", path);
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config: AppConfig = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config
        .to_settings()
        .validate()
        .map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;

    engine_info!("Loaded config from {:?}", path);
    Ok(config)
}
