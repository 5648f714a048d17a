//! Scorer CLI Library
//!
//! Match state file store and terminal rendering for the `scorer` binary.

pub mod report;
pub mod store;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub use report::{render_crease, render_player_stats, render_scorecard, render_summary};
pub use store::{load_state, save_state, update_state};

/// Read a team sheet: one player per line, blank lines ignored.
pub fn read_team_sheet(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read team sheet: {}", path.display()))?;
    let players: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    log::debug!("Read {} players from {:?}", players.len(), path);
    Ok(players)
}
