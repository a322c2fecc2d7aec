//! High score storage.
//!
//! The save file is a JSON object that keeps the score under
//! `"snake-highscore"` as a decimal string. Anything unreadable counts as a
//! score of zero.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub trait HighScoreStore {
    fn load(&mut self) -> u32;
    fn save(&mut self, high_score: u32) -> anyhow::Result<()>;
}

#[derive(Serialize, Deserialize, Default)]
struct SaveData {
    #[serde(rename = "snake-highscore", default, skip_serializing_if = "Option::is_none")]
    high_score: Option<String>,
}

/// Non-numeric or negative values are treated as absent.
pub fn parse_high_score(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> anyhow::Result<SaveData> {
        if !self.path.exists() {
            return Ok(SaveData::default());
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let data = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(data)
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&mut self) -> u32 {
        match self.read() {
            Ok(data) => data.high_score.as_deref().map(parse_high_score).unwrap_or(0),
            Err(err) => {
                warn!("ignoring save file: {err:#}");
                0
            }
        }
    }

    fn save(&mut self, high_score: u32) -> anyhow::Result<()> {
        let data = SaveData {
            high_score: Some(high_score.to_string()),
        };
        let text = serde_json::to_string_pretty(&data)?;
        fs::write(&self.path, text).with_context(|| format!("writing {}", self.path.display()))?;
        debug!(high_score, path = %self.path.display(), "high score saved");
        Ok(())
    }
}

/// Keeps the score for the lifetime of the process only.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub value: u32,
    pub saves: usize,
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> u32 {
        self.value
    }

    fn save(&mut self, high_score: u32) -> anyhow::Result<()> {
        self.value = high_score;
        self.saves += 1;
        Ok(())
    }
}
