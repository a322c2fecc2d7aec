use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const CONFIG_PATH: &str = "snake_config.json";

static SHARED: OnceLock<GameConfig> = OnceLock::new();

/// Optional user settings. Every field has a default, so a partial file is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub save_path: PathBuf,
    /// Preferred cell size in pixels; shrunk to fit small windows.
    pub cell_size: f32,
    pub sound_volume: f32,
    pub fullscreen: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from("snake_save.json"),
            cell_size: 24.0,
            sound_volume: 1.0,
            fullscreen: false,
        }
    }
}

impl GameConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let mut config: GameConfig =
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
        config.sound_volume = config.sound_volume.clamp(0.0, 1.0);
        config.cell_size = config.cell_size.max(4.0);
        Ok(config)
    }

    /// Falls back to defaults when the file is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded config");
                config
            }
            Err(err) => {
                warn!("using default config: {err:#}");
                Self::default()
            }
        }
    }
}

/// Reads the config on first call and hands out the same value afterwards.
/// Later calls ignore `path`.
pub fn shared(path: &Path) -> &'static GameConfig {
    SHARED.get_or_init(|| GameConfig::load_or_default(path))
}
