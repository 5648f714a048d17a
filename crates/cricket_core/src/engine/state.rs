//! Match state aggregate.
//!
//! `MatchState` is the single value a scorer session owns. It is created once
//! per match and mutated only through the engine operations in this module's
//! siblings (`bowling`, `ball`, `lifecycle`). The caller owns storage: load a
//! snapshot, apply one operation, store the result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::config::ScoringConfig;
use crate::error::{Result, ScoringError};
use crate::models::{
    FeedEntry, FeedTag, InningsScore, MatchInfo, MatchSetup, PlayerId, StatsBook, TeamScores,
    TeamSide, Teams, BALLS_PER_OVER,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Innings1,
    Innings2,
    Completed,
}

/// First-innings total, frozen when the innings closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningsSummary {
    pub batting_team: TeamSide,
    pub score: InningsScore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub(crate) info: MatchInfo,
    pub(crate) status: MatchStatus,
    pub(crate) innings_number: u8,
    pub(crate) overs_limit: u32,
    pub(crate) batting_team: TeamSide,
    pub(crate) bowling_team: TeamSide,
    pub(crate) teams: Teams,
    pub(crate) score: TeamScores,

    // Batting rotation
    pub(crate) batting_order: Vec<PlayerId>,
    pub(crate) next_batter_index: usize,
    pub(crate) striker: Option<PlayerId>,
    pub(crate) non_striker: Option<PlayerId>,
    /// Batters dismissed in the current innings
    #[serde(default)]
    pub(crate) dismissed: Vec<PlayerId>,

    // Bowling rotation
    pub(crate) current_bowler: Option<PlayerId>,
    pub(crate) last_over_bowler: Option<PlayerId>,
    pub(crate) over_in_progress: bool,
    /// Legal-ball count at which the last over ended; stops a boundary firing twice
    #[serde(default)]
    pub(crate) over_boundary_at: Option<u32>,
    /// Overs ended this innings, natural or forced
    #[serde(default)]
    pub(crate) overs_ended: u32,

    #[serde(default)]
    pub(crate) first_innings: Option<InningsSummary>,
    pub(crate) stats: StatsBook,
    /// Newest first
    pub(crate) feed: VecDeque<FeedEntry>,
}

/// Create a match with the default configuration.
pub fn create_match(setup: &MatchSetup) -> Result<MatchState> {
    MatchState::new(setup, &ScoringConfig::default())
}

impl MatchState {
    pub fn new(setup: &MatchSetup, config: &ScoringConfig) -> Result<Self> {
        Self::new_at(setup, config, Utc::now())
    }

    pub fn new_at(setup: &MatchSetup, config: &ScoringConfig, at: DateTime<Utc>) -> Result<Self> {
        setup.validate_with(config)?;
        let teams = setup.teams()?;
        let info = MatchInfo::from_setup(setup, at);
        let batting_team = info.batting_first;

        tracing::info!(
            match_id = %info.match_id,
            title = %info.title,
            overs = setup.overs_limit,
            batting_first = %batting_team,
            "match created"
        );

        Ok(Self {
            status: MatchStatus::Innings1,
            innings_number: 1,
            overs_limit: setup.overs_limit,
            batting_team,
            bowling_team: batting_team.opponent(),
            batting_order: teams.roster(batting_team).players().to_vec(),
            teams,
            score: TeamScores::default(),
            next_batter_index: 0,
            striker: None,
            non_striker: None,
            dismissed: Vec::new(),
            current_bowler: None,
            last_over_bowler: None,
            over_in_progress: false,
            over_boundary_at: None,
            overs_ended: 0,
            first_innings: None,
            stats: StatsBook::new(),
            feed: VecDeque::new(),
            info,
        })
    }

    // ========================
    // Read access
    // ========================

    pub fn info(&self) -> &MatchInfo {
        &self.info
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    pub fn innings_number(&self) -> u8 {
        self.innings_number
    }

    pub fn overs_limit(&self) -> u32 {
        self.overs_limit
    }

    pub fn batting_team(&self) -> TeamSide {
        self.batting_team
    }

    pub fn bowling_team(&self) -> TeamSide {
        self.bowling_team
    }

    pub fn teams(&self) -> &Teams {
        &self.teams
    }

    pub fn score(&self, side: TeamSide) -> &InningsScore {
        self.score.get(side)
    }

    /// Score of the side currently batting.
    pub fn current_score(&self) -> &InningsScore {
        self.score.get(self.batting_team)
    }

    pub fn batting_order(&self) -> &[PlayerId] {
        &self.batting_order
    }

    pub fn striker(&self) -> Option<&PlayerId> {
        self.striker.as_ref()
    }

    pub fn non_striker(&self) -> Option<&PlayerId> {
        self.non_striker.as_ref()
    }

    pub fn current_bowler(&self) -> Option<&PlayerId> {
        self.current_bowler.as_ref()
    }

    pub fn last_over_bowler(&self) -> Option<&PlayerId> {
        self.last_over_bowler.as_ref()
    }

    pub fn over_in_progress(&self) -> bool {
        self.over_in_progress
    }

    pub fn first_innings(&self) -> Option<&InningsSummary> {
        self.first_innings.as_ref()
    }

    pub fn stats(&self) -> &StatsBook {
        &self.stats
    }

    pub fn is_dismissed(&self, player: &PlayerId) -> bool {
        self.dismissed.contains(player)
    }

    /// Legal balls allowed per innings.
    pub fn innings_ball_limit(&self) -> u32 {
        self.overs_limit * BALLS_PER_OVER
    }

    /// Up to `limit` feed entries, newest first.
    pub fn feed(&self, limit: usize) -> Vec<&FeedEntry> {
        self.feed.iter().take(limit).collect()
    }

    pub fn feed_len(&self) -> usize {
        self.feed.len()
    }

    pub(crate) fn ensure_not_completed(&self) -> Result<()> {
        if self.is_completed() {
            return Err(ScoringError::Precondition("match already completed".to_string()));
        }
        Ok(())
    }

    /// Feed entry positioned at the current legal-ball count.
    pub(crate) fn push_lifecycle_entry(
        &mut self,
        tag: FeedTag,
        description: String,
        at: DateTime<Utc>,
    ) {
        let balls = self.current_score().legal_balls;
        self.feed.push_front(FeedEntry {
            timestamp: at,
            over_number: balls / BALLS_PER_OVER,
            ball_in_over: balls % BALLS_PER_OVER,
            tag,
            description,
        });
    }

    /// Snapshot as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_new_match_initial_state() {
        let state = new_match(20);
        assert_eq!(state.status(), MatchStatus::Innings1);
        assert_eq!(state.innings_number(), 1);
        assert_eq!(state.batting_team(), TeamSide::TeamA);
        assert_eq!(state.bowling_team(), TeamSide::TeamB);
        assert_eq!(state.batting_order().len(), 4);
        assert!(!state.over_in_progress());
        assert!(state.striker().is_none());
        assert_eq!(state.feed_len(), 0);
        assert!(state.stats().batters.is_empty());
        assert_eq!(state.innings_ball_limit(), 120);
    }

    #[test]
    fn test_batting_first_team_b_uses_team_b_order() {
        let setup = MatchSetup::new("T", 5, names(&["A1", "A2"]), names(&["B1", "B2", "B3"]))
            .with_batting_first(TeamSide::TeamB);
        let state = create_match(&setup).unwrap();
        assert_eq!(state.batting_team(), TeamSide::TeamB);
        assert_eq!(state.batting_order(), &[pid("B1"), pid("B2"), pid("B3")]);
    }

    #[test]
    fn test_create_match_rejects_invalid_setup() {
        let setup = MatchSetup::new("T", 0, names(&["A1", "A2"]), names(&["B1", "B2"]));
        assert!(create_match(&setup).unwrap_err().is_validation());
    }

    #[test]
    fn test_json_snapshot_roundtrip_preserves_state() {
        let mut state = started_match(2);
        state.record_ball_at(crate::models::BallOutcome::runs(4), fixed_time()).unwrap();

        let restored = MatchState::from_json(&state.to_json().unwrap()).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_status_serializes_like_scoreboard() {
        assert_eq!(serde_json::to_string(&MatchStatus::Innings2).unwrap(), "\"INNINGS2\"");
    }
}
