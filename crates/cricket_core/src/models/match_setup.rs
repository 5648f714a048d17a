//! Match creation input and match metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::player::Roster;
use super::team::{TeamSide, Teams};
use crate::config::ScoringConfig;
use crate::error::{Result, ScoringError};

fn validate_not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Everything the scorer enters on the "create match" form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchSetup {
    #[validate(custom = "validate_not_blank")]
    pub title: String,
    #[serde(default)]
    pub venue: String,
    #[validate(range(min = 1))]
    pub overs_limit: u32,
    #[serde(default)]
    pub toss_winner: Option<TeamSide>,
    /// `None` means "decide later"; Team A bats first in that case.
    #[serde(default)]
    pub batting_first: Option<TeamSide>,
    #[validate(length(min = 2))]
    pub team_a: Vec<String>,
    #[validate(length(min = 2))]
    pub team_b: Vec<String>,
}

impl MatchSetup {
    pub fn new(
        title: impl Into<String>,
        overs_limit: u32,
        team_a: Vec<String>,
        team_b: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            venue: String::new(),
            overs_limit,
            toss_winner: None,
            batting_first: None,
            team_a,
            team_b,
        }
    }

    pub fn with_batting_first(mut self, side: TeamSide) -> Self {
        self.batting_first = Some(side);
        self
    }

    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = venue.into();
        self
    }

    pub fn batting_first_or_default(&self) -> TeamSide {
        self.batting_first.unwrap_or(TeamSide::TeamA)
    }

    /// Field checks plus the configured overs ceiling.
    pub fn validate_with(&self, config: &ScoringConfig) -> Result<()> {
        self.validate()?;
        if self.overs_limit > config.max_overs {
            return Err(ScoringError::Validation(format!(
                "overs per innings must be 1-{}, got {}",
                config.max_overs, self.overs_limit
            )));
        }
        Ok(())
    }

    /// Parse both team sheets into rosters.
    pub fn teams(&self) -> Result<Teams> {
        let team_a = Roster::from_names(&self.team_a).map_err(|e| roster_error(TeamSide::TeamA, e))?;
        let team_b = Roster::from_names(&self.team_b).map_err(|e| roster_error(TeamSide::TeamB, e))?;
        Ok(Teams::new(team_a, team_b))
    }
}

fn roster_error(side: TeamSide, err: ScoringError) -> ScoringError {
    match err {
        ScoringError::Validation(msg) => ScoringError::Validation(format!("{}: {}", side, msg)),
        other => other,
    }
}

/// Descriptive metadata carried with the match state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchInfo {
    pub match_id: String,
    pub title: String,
    pub venue: String,
    pub overs_limit: u32,
    pub toss_winner: Option<TeamSide>,
    pub batting_first: TeamSide,
    pub created_at: DateTime<Utc>,
}

impl MatchInfo {
    pub fn from_setup(setup: &MatchSetup, created_at: DateTime<Utc>) -> Self {
        Self {
            match_id: generate_match_id(created_at),
            title: setup.title.trim().to_string(),
            venue: setup.venue.trim().to_string(),
            overs_limit: setup.overs_limit,
            toss_winner: setup.toss_winner,
            batting_first: setup.batting_first_or_default(),
            created_at,
        }
    }
}

/// `YYYYMMDD-XXXXXX`: creation date plus six upper-case hex digits.
pub fn generate_match_id(created_at: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string()[..6].to_uppercase();
    format!("{}-{}", created_at.format("%Y%m%d"), suffix)
}
