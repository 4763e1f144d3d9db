//! Flat-file persistence of session progress.
//!
//! The save file is line-oriented `key=value` text (see [`crate::kv`]):
//! `player_name`, `current_level`, `experience`, `completed_levels`, and one
//! `inventory_item` line per earned reward, in order. Values are written
//! verbatim; there is no escaping and no versioning.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::kv;

pub const DEFAULT_SAVE_FILE: &str = "quest_progress.save";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedGame {
    pub player_name: String,
    pub current_level: usize,
    pub experience: f64,
    pub completed_levels: usize,
    pub inventory: Vec<String>,
}

pub fn save_progress(path: &Path, progress: &SavedGame) -> Result<()> {
    let mut out = String::from("# Code Quest save file\n");
    out.push_str(&kv::line("player_name", &progress.player_name));
    out.push('\n');
    out.push_str(&kv::line("current_level", progress.current_level));
    out.push('\n');
    out.push_str(&kv::line("experience", progress.experience));
    out.push('\n');
    out.push_str(&kv::line("completed_levels", progress.completed_levels));
    out.push('\n');
    out.push_str("# Inventory items\n");
    for item in &progress.inventory {
        out.push_str(&kv::line("inventory_item", item));
        out.push('\n');
    }
    std::fs::write(path, out).with_context(|| format!("writing save file {}", path.display()))
}

/// Load progress from `path`. A missing file is `Ok(None)`; an unreadable
/// file is an error. Malformed numeric fields fall back to their defaults
/// with a warning rather than failing the whole load.
pub fn load_progress(path: &Path) -> Result<Option<SavedGame>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading save file {}", path.display()))?;

    let mut progress = SavedGame::default();
    for (key, value) in kv::parse(&content) {
        match key {
            "player_name" => progress.player_name = value.to_string(),
            "current_level" => progress.current_level = parse_field(key, value),
            "experience" => progress.experience = parse_field(key, value),
            "completed_levels" => progress.completed_levels = parse_field(key, value),
            "inventory_item" => progress.inventory.push(value.to_string()),
            other => debug!(key = other, "ignoring unknown save key"),
        }
    }
    Ok(Some(progress))
}

fn parse_field<T: FromStr + Default>(key: &str, value: &str) -> T {
    match value.parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!(key, value, "malformed field in save file, using default");
            T::default()
        }
    }
}
