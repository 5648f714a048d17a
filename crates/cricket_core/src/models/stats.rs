//! Per-player batting and bowling records.
//!
//! Entries are created lazily on first involvement (selection at the crease,
//! selection as bowler, arriving as a replacement batter) and are never
//! removed for the life of a match.

use super::player::PlayerId;
use super::score::{overs_str, runs_per_over};
use crate::error::{Result, ScoringError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatterStats {
    pub runs: u32,
    pub balls_faced: u32,
    pub fours: u32,
    pub sixes: u32,
    /// How the batter was dismissed; `None` while not out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissal: Option<String>,
}

impl BatterStats {
    /// Runs per 100 balls faced.
    pub fn strike_rate(&self) -> f64 {
        if self.balls_faced == 0 {
            return 0.0;
        }
        self.runs as f64 * 100.0 / self.balls_faced as f64
    }

    pub fn is_out(&self) -> bool {
        self.dismissal.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlerStats {
    pub balls_bowled: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
}

impl BowlerStats {
    pub fn overs_display(&self) -> String {
        overs_str(self.balls_bowled)
    }

    /// Runs conceded per over.
    pub fn economy(&self) -> f64 {
        runs_per_over(self.runs_conceded, self.balls_bowled)
    }
}

/// Combined record returned by [`StatsBook::get_stats`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player: PlayerId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batting: Option<BatterStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bowling: Option<BowlerStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsBook {
    pub batters: BTreeMap<PlayerId, BatterStats>,
    pub bowlers: BTreeMap<PlayerId, BowlerStats>,
}

impl StatsBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Batting record, inserted empty on first use.
    pub fn batter_mut(&mut self, player: &PlayerId) -> &mut BatterStats {
        self.batters.entry(player.clone()).or_default()
    }

    /// Bowling record, inserted empty on first use.
    pub fn bowler_mut(&mut self, player: &PlayerId) -> &mut BowlerStats {
        self.bowlers.entry(player.clone()).or_default()
    }

    pub fn batter(&self, player: &PlayerId) -> Option<&BatterStats> {
        self.batters.get(player)
    }

    pub fn bowler(&self, player: &PlayerId) -> Option<&BowlerStats> {
        self.bowlers.get(player)
    }

    pub fn get_stats(&self, player: &PlayerId) -> Result<PlayerStats> {
        let batting = self.batter(player).cloned();
        let bowling = self.bowler(player).cloned();
        if batting.is_none() && bowling.is_none() {
            return Err(ScoringError::NotFound(format!("no statistics recorded for {}", player)));
        }
        Ok(PlayerStats { player: player.clone(), batting, bowling })
    }
}
