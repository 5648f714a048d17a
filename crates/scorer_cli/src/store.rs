//! Match state file storage.
//!
//! One JSON snapshot per match. Writes go to a temp file that is renamed
//! over the target, so a failed write never leaves a half-written state.

use anyhow::{Context, Result};
use cricket_core::MatchState;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub fn load_state(path: &Path) -> Result<MatchState> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read match state: {}", path.display()))?;
    let state = MatchState::from_json(&json)
        .with_context(|| format!("Failed to parse match state: {}", path.display()))?;
    log::debug!("Loaded {} bytes from {:?}", json.len(), path);
    Ok(state)
}

pub fn save_state(path: &Path, state: &MatchState) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let json = serde_json::to_string_pretty(state).context("Failed to serialize match state")?;
    let temp_path = path.with_extension("tmp");
    {
        let mut file = File::create(&temp_path)
            .with_context(|| format!("Failed to create {}", temp_path.display()))?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        file.sync_all()?;
    }
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to move state into place: {}", path.display()))?;

    log::debug!("Saved {} bytes to {:?}", json.len(), path);
    Ok(())
}

/// Load, apply one engine operation, store only if it succeeded.
pub fn update_state<T, F>(path: &Path, op: F) -> Result<T>
where
    F: FnOnce(&mut MatchState) -> cricket_core::Result<T>,
{
    let mut state = load_state(path)?;
    let value = op(&mut state)?;
    save_state(path, &state)?;
    log::info!("Match state updated: {}", path.display());
    Ok(value)
}
