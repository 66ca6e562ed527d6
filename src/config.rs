//! Startup configuration
//!
//! Read once from `assets/config/game.json`. Every field has a default, so a
//! partial file is fine and a missing or broken file just means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const CONFIG_PATH: &str = "assets/config/game.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_title: String,
    pub fps: u32,
    pub music_volume: f32,
    pub sound_enabled: bool,
    pub assets_dir: PathBuf,
    /// Overrides the save file location
    pub save_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_title: "CYBER BARSIK 2045".to_string(),
            fps: 60,
            music_volume: 0.5,
            sound_enabled: true,
            assets_dir: PathBuf::from("assets"),
            save_file: None,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        Ok(config.sanitized())
    }

    /// Loads the config, falling back to defaults on any failure.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return GameConfig::default();
        }

        match GameConfig::load_from_file(path) {
            Ok(config) => {
                info!(path = %path.display(), "config loaded");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "config unreadable, using defaults");
                GameConfig::default()
            }
        }
    }

    /// Where the progression record lives.
    ///
    /// `~/.cyber_barsik/save.json` unless overridden; `./save.json` if there
    /// is no home directory.
    pub fn save_path(&self) -> PathBuf {
        if let Some(path) = &self.save_file {
            return path.clone();
        }
        dirs::home_dir()
            .map(|home| home.join(".cyber_barsik"))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("save.json")
    }

    fn sanitized(mut self) -> Self {
        self.fps = self.fps.clamp(1, 240);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self
    }
}
