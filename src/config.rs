//! Game settings read from `config.json` in the data directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{day::DayIndex, share::GlyphTable};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Name printed at the start of a share message.
    pub share_name: String,
    /// Day index of puzzle number zero.
    pub first_day: DayIndex,
    pub max_guesses: u32,
    pub word_len: usize,
    pub hard_mode: bool,
    pub glyphs: GlyphTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            share_name: "Wordle".to_string(),
            first_day: 18_797, // 2021-06-19
            max_guesses: 6,
            word_len: 5,
            hard_mode: false,
            glyphs: GlyphTable::default(),
        }
    }
}

impl GameConfig {
    /// Read settings from `path`, falling back to defaults if the file is
    /// missing or malformed.
    pub fn load(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => {
                info!("No config at {}, using defaults", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str::<Self>(&text) {
            Ok(config) if config.max_guesses > 0 && config.word_len > 0 => config,
            Ok(_) => {
                warn!("Config {} has zero limits, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("Failed to parse config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Platform data directory for this application.
pub fn default_data_dir() -> Result<PathBuf> {
    let mut path = dirs::data_dir().context("Unable to determine data directory for your platform")?;
    path.push("wordle-ledger");
    Ok(path)
}
