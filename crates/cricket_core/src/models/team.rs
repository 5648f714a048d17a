use super::player::Roster;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    #[serde(rename = "Team A")]
    TeamA,
    #[serde(rename = "Team B")]
    TeamB,
}

impl TeamSide {
    pub fn opponent(self) -> TeamSide {
        match self {
            TeamSide::TeamA => TeamSide::TeamB,
            TeamSide::TeamB => TeamSide::TeamA,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TeamSide::TeamA => "Team A",
            TeamSide::TeamB => "Team B",
        }
    }

    /// Parse a team selector as typed by a scorer ("Team A", "a", "B", ...).
    pub fn parse(s: &str) -> Option<TeamSide> {
        match s.trim().to_ascii_lowercase().as_str() {
            "team a" | "a" | "team_a" | "teama" => Some(TeamSide::TeamA),
            "team b" | "b" | "team_b" | "teamb" => Some(TeamSide::TeamB),
            _ => None,
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two team sheets, fixed at match creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teams {
    pub team_a: Roster,
    pub team_b: Roster,
}

impl Teams {
    pub fn new(team_a: Roster, team_b: Roster) -> Self {
        Self { team_a, team_b }
    }

    pub fn roster(&self, side: TeamSide) -> &Roster {
        match side {
            TeamSide::TeamA => &self.team_a,
            TeamSide::TeamB => &self.team_b,
        }
    }
}
