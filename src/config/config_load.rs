// src/config/config_load.rs
//
// loading to config.toml

use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::config_types::{default_savers, DebugConfig, SaverConfig, TimingConfig, WindowConfig};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub debug: DebugConfig,
    #[serde(default = "default_savers")]
    pub savers: Vec<SaverConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            timing: TimingConfig::default(),
            debug: DebugConfig::default(),
            savers: default_savers(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("window size must be non-zero, got {width}x{height}")]
    EmptyWindow { width: u32, height: u32 },
    #[error("timing.max_framerate must be at least 1")]
    ZeroFramerate,
    #[error("saver #{index} has non-positive radius {radius}")]
    InvalidRadius { index: usize, radius: f32 },
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_dir) = Self::exe_dir() {
            if exe_dir.join(CONFIG_FILE).exists() {
                return Self::load_from_dir(&exe_dir);
            }
        }

        // Fallback to loading from the current working directory
        Self::load_from_dir(Path::new("."))
    }

    /// Loads `config.toml` from `dir`, or the built-in defaults when the file is missing.
    pub fn load_from_dir(dir: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = dir.join(CONFIG_FILE);
        match fs::read_to_string(&config_path) {
            Ok(content) => {
                let config = Self::from_toml_str(&content)?;
                info!("Loaded config from {}", config_path.display());
                Ok(config)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(
                    "No {} found in {}, using built-in defaults",
                    CONFIG_FILE,
                    dir.display()
                );
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::EmptyWindow {
                width: self.window.width,
                height: self.window.height,
            });
        }
        if self.timing.max_framerate == 0 {
            return Err(ConfigError::ZeroFramerate);
        }
        for (index, saver) in self.savers.iter().enumerate() {
            let radius = saver.radius();
            if radius.is_nan() || radius <= 0.0 {
                return Err(ConfigError::InvalidRadius { index, radius });
            }
        }
        Ok(())
    }

    fn exe_dir() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        exe_path.parent().map(Path::to_path_buf)
    }
}
