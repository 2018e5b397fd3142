//! Game settings, read from an optional `snake.json` in the working directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "snake.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Side of the square playfield, in pixels.
    pub canvas_size: u16,
    /// Cells per side.
    pub grid_size: i32,
    /// Milliseconds between snake moves.
    pub tick_ms: u64,
    /// Food RNG seed; taken from the clock when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_size: 400,
            grid_size: 20,
            tick_ms: 100,
            seed: None,
        }
    }
}

impl Config {
    /// Falls back to defaults on a missing or broken file.
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            log::debug!("no {} found, using default config", CONFIG_FILE);
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size <= 0 {
            return Err(ConfigError::Invalid(format!(
                "grid_size must be positive, got {}",
                self.grid_size
            )));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::Invalid("tick_ms must be positive".into()));
        }
        if i32::from(self.canvas_size) % self.grid_size != 0
            || i32::from(self.canvas_size) < self.grid_size
        {
            return Err(ConfigError::Invalid(format!(
                "canvas_size {} is not a multiple of grid_size {}",
                self.canvas_size, self.grid_size
            )));
        }
        Ok(())
    }

    pub fn cell_size(&self) -> u32 {
        (i32::from(self.canvas_size) / self.grid_size) as u32
    }

    pub fn tick_interval(&self) -> f64 {
        self.tick_ms as f64 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_board() {
        let config = Config::default();
        assert_eq!(config.canvas_size, 400);
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.cell_size(), 20);
        assert_eq!(config.tick_interval(), 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_overrides_defaults() {
        let config = Config::parse(r#"{ "grid_size": 10, "seed": 7 }"#).unwrap();
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.canvas_size, 400);
        assert_eq!(config.cell_size(), 40);
    }

    #[test]
    fn rejects_uneven_grid() {
        let err = Config::parse(r#"{ "grid_size": 21 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_zero_tick() {
        let err = Config::parse(r#"{ "tick_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_bad_json() {
        let err = Config::parse("{ grid_size: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::from_file(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
