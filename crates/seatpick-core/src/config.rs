//! Application configuration management.
//!
//! This module handles loading and saving the application configuration:
//! the room layout, an optional data-directory override for chart and
//! roster files, and the bell schedule used for period detection.
//!
//! Configuration is stored at `~/.config/seatpick/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::layout::RoomLayout;
use crate::schedule::BellSchedule;

/// Application name used for the config directory path
const APP_NAME: &str = "seatpick";

/// Config file name
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub layout: RoomLayout,
    /// Where chart, roster, and attendance files live. Defaults to the
    /// user's documents directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub schedule: BellSchedule,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Resolved directory for chart/roster/export files: the configured
    /// override, else the documents directory, else the working directory.
    pub fn data_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.data_dir {
            return dir.clone();
        }
        dirs::document_dir().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.layout, config.layout);
        assert_eq!(back.schedule, config.schedule);
        assert_eq!(back.data_dir, None);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let back: Config = serde_json::from_str(r#"{"data_dir":"/tmp/charts"}"#).unwrap();
        assert_eq!(back.data_dir, Some(PathBuf::from("/tmp/charts")));
        assert_eq!(back.layout, RoomLayout::default());
        assert_eq!(back.schedule, BellSchedule::default());
    }
}
