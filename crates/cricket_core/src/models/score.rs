use super::team::TeamSide;
use serde::{Deserialize, Serialize};

/// Legal deliveries per over.
pub const BALLS_PER_OVER: u32 = 6;

/// Format a legal-ball count as cricket overs notation ("3.4").
pub fn overs_str(legal_balls: u32) -> String {
    format!("{}.{}", legal_balls / BALLS_PER_OVER, legal_balls % BALLS_PER_OVER)
}

/// Runs per over for `runs` scored off `legal_balls` deliveries.
pub fn runs_per_over(runs: u32, legal_balls: u32) -> f64 {
    if legal_balls == 0 {
        return 0.0;
    }
    runs as f64 * BALLS_PER_OVER as f64 / legal_balls as f64
}

/// Cumulative score of one team's innings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningsScore {
    pub runs: u32,
    pub wickets: u32,
    pub legal_balls: u32,
}

impl InningsScore {
    pub fn overs_completed(&self) -> u32 {
        self.legal_balls / BALLS_PER_OVER
    }

    pub fn balls_in_over(&self) -> u32 {
        self.legal_balls % BALLS_PER_OVER
    }

    pub fn overs_display(&self) -> String {
        overs_str(self.legal_balls)
    }

    pub fn run_rate(&self) -> f64 {
        runs_per_over(self.runs, self.legal_balls)
    }

    /// "runs/wickets" as shown on the scoreboard.
    pub fn display(&self) -> String {
        format!("{}/{}", self.runs, self.wickets)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScores {
    pub team_a: InningsScore,
    pub team_b: InningsScore,
}

impl TeamScores {
    pub fn get(&self, side: TeamSide) -> &InningsScore {
        match side {
            TeamSide::TeamA => &self.team_a,
            TeamSide::TeamB => &self.team_b,
        }
    }

    pub fn get_mut(&mut self, side: TeamSide) -> &mut InningsScore {
        match side {
            TeamSide::TeamA => &mut self.team_a,
            TeamSide::TeamB => &mut self.team_b,
        }
    }
}
