//! Flat-file persistence for [`StatsRecord`].
//!
//! The file is a single JSON object. Loading is tolerant: every field is read
//! on its own and falls back to its default when missing or mistyped, and an
//! unreadable file yields an all-default record. Saving always writes every
//! field.

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::{record::StatsRecord, streak::apply_streak_policy};
use crate::day::DayIndex;

pub const STATS_FILE_NAME: &str = "stats.json";

/// Get the path to the stats file inside `data_dir`, creating the directory if needed.
pub fn stats_path(data_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;
    Ok(data_dir.join(STATS_FILE_NAME))
}

/// Read a record from `path` without applying any day rules.
pub fn load(path: &Path) -> StatsRecord {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            info!("No stats loaded from {}: {}", path.display(), e);
            return StatsRecord::default();
        }
    };

    let json: Value = match serde_json::from_str(&text) {
        Ok(json) => json,
        Err(e) => {
            warn!("Stats file {} is not valid JSON: {}", path.display(), e);
            return StatsRecord::default();
        }
    };

    match json.as_object() {
        Some(fields) => record_from_fields(fields),
        None => {
            warn!("Stats file {} does not hold an object", path.display());
            StatsRecord::default()
        }
    }
}

/// Read a record and bring its streak and board up to date for `today`.
pub fn load_for_day(path: &Path, today: DayIndex) -> StatsRecord {
    let mut record = load(path);
    apply_streak_policy(&mut record, today);
    record
}

/// Write the full record to `path`. Returns `false` if the file could not be
/// opened or not every byte was written.
pub fn save(record: &StatsRecord, path: &Path) -> bool {
    match write_record(record, path) {
        Ok(()) => {
            info!("Stats saved to {}", path.display());
            true
        }
        Err(e) => {
            warn!("Failed to save stats: {:#}", e);
            false
        }
    }
}

fn write_record(record: &StatsRecord, path: &Path) -> Result<()> {
    let dump = serde_json::to_string(record).context("Failed to serialize stats")?;

    let mut file = File::create(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;
    file.write_all(dump.as_bytes())
        .with_context(|| format!("Short write to {}", path.display()))?;
    file.flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    Ok(())
}

fn record_from_fields(fields: &Map<String, Value>) -> StatsRecord {
    let last_played = int_field(fields, "lastPlayed").unwrap_or(0);

    StatsRecord {
        guess_counts: array_field(fields, "guessCounts", |item| {
            item.as_u64().and_then(|n| u32::try_from(n).ok())
        }),
        board_state: array_field(fields, "boardState", |item| {
            item.as_str().map(str::to_string)
        }),
        streak: count_field(fields, "streak"),
        max_streak: count_field(fields, "maxStreak"),
        games_played: count_field(fields, "gamesPlayed"),
        last_played,
        // Older files never stored lastWon; their last game stands in for it.
        last_won: int_field(fields, "lastWon").unwrap_or(last_played),
    }
}

fn array_field<T>(
    fields: &Map<String, Value>,
    key: &str,
    item: impl Fn(&Value) -> Option<T>,
) -> Vec<T> {
    match fields.get(key) {
        Some(Value::Array(items)) => items.iter().filter_map(item).collect(),
        Some(other) => {
            debug!("Ignoring {}: expected array, found {}", key, other);
            Vec::new()
        }
        None => Vec::new(),
    }
}

fn int_field(fields: &Map<String, Value>, key: &str) -> Option<i64> {
    let value = fields.get(key)?;
    let parsed = value
        .as_i64()
        .or_else(|| value.as_f64().filter(|f| f.is_finite()).map(|f| f as i64));
    if parsed.is_none() {
        debug!("Ignoring {}: expected number, found {}", key, value);
    }
    parsed
}

fn count_field(fields: &Map<String, Value>, key: &str) -> u32 {
    int_field(fields, key)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}
