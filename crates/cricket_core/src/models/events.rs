use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};

/// Upper bound for any run count entered with a delivery.
pub const MAX_RUNS_PER_BALL: u8 = 6;

/// What happened on one delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BallOutcome {
    /// Runs off the bat: 0 (dot), 1, 2, 3, 4 or 6
    Runs { runs: u8 },
    /// Striker dismissed
    Wicket {
        #[serde(default)]
        dismissal: String,
    },
    /// One penalty run plus any runs taken off the wide
    Wide {
        #[serde(default)]
        extra_runs: u8,
    },
    /// One penalty run plus runs off the bat
    NoBall {
        #[serde(default)]
        runs_off_bat: u8,
    },
    LegBye { runs: u8 },
    Bye { runs: u8 },
}

impl BallOutcome {
    pub fn dot() -> Self {
        BallOutcome::Runs { runs: 0 }
    }

    pub fn runs(runs: u8) -> Self {
        BallOutcome::Runs { runs }
    }

    pub fn wicket(dismissal: impl Into<String>) -> Self {
        BallOutcome::Wicket { dismissal: dismissal.into() }
    }

    pub fn wide(extra_runs: u8) -> Self {
        BallOutcome::Wide { extra_runs }
    }

    pub fn no_ball(runs_off_bat: u8) -> Self {
        BallOutcome::NoBall { runs_off_bat }
    }

    pub fn leg_bye(runs: u8) -> Self {
        BallOutcome::LegBye { runs }
    }

    pub fn bye(runs: u8) -> Self {
        BallOutcome::Bye { runs }
    }

    /// Build an outcome from the scorer's button label and its parameter.
    ///
    /// `param` is the run count for wide/no-ball/bye/leg-bye and is ignored
    /// for plain runs. `dismissal` is only used for a wicket.
    pub fn from_label(label: &str, param: u8, dismissal: &str) -> Result<Self> {
        let outcome = match label.trim() {
            "0" | "1" | "2" | "3" | "4" | "6" => {
                // Checked by the match arm above
                let runs = label.trim().parse::<u8>().unwrap_or_default();
                BallOutcome::Runs { runs }
            }
            "Wicket" => BallOutcome::wicket(dismissal.trim()),
            "Wide" => BallOutcome::Wide { extra_runs: param },
            "No-Ball" => BallOutcome::NoBall { runs_off_bat: param },
            "Leg Bye" => BallOutcome::LegBye { runs: param },
            "Bye" => BallOutcome::Bye { runs: param },
            other => {
                return Err(ScoringError::Validation(format!("unknown ball outcome: '{}'", other)))
            }
        };
        outcome.validate()?;
        Ok(outcome)
    }

    /// Range checks on the outcome parameters.
    pub fn validate(&self) -> Result<()> {
        let (what, value) = match self {
            BallOutcome::Runs { runs } => {
                if *runs == 5 {
                    return Err(ScoringError::Validation(
                        "5 runs off the bat is not a scoring option".to_string(),
                    ));
                }
                ("runs off the bat", *runs)
            }
            BallOutcome::Wicket { .. } => return Ok(()),
            BallOutcome::Wide { extra_runs } => ("extra runs on a wide", *extra_runs),
            BallOutcome::NoBall { runs_off_bat } => ("runs off bat on a no-ball", *runs_off_bat),
            BallOutcome::LegBye { runs } => ("leg-bye runs", *runs),
            BallOutcome::Bye { runs } => ("bye runs", *runs),
        };

        if value > MAX_RUNS_PER_BALL {
            return Err(ScoringError::Validation(format!(
                "{} must be 0-{}, got {}",
                what, MAX_RUNS_PER_BALL, value
            )));
        }
        Ok(())
    }

    /// Counts toward the six-ball over.
    pub fn is_legal(&self) -> bool {
        !matches!(self, BallOutcome::Wide { .. } | BallOutcome::NoBall { .. })
    }

    /// Runs the batters physically ran or hit; its parity decides strike rotation.
    pub fn run_component(&self) -> u32 {
        match self {
            BallOutcome::Runs { runs } => *runs as u32,
            BallOutcome::Wicket { .. } => 0,
            BallOutcome::Wide { extra_runs } => *extra_runs as u32,
            BallOutcome::NoBall { runs_off_bat } => *runs_off_bat as u32,
            BallOutcome::LegBye { runs } | BallOutcome::Bye { runs } => *runs as u32,
        }
    }

    /// Total runs added to the batting side.
    pub fn team_runs(&self) -> u32 {
        match self {
            BallOutcome::Wide { .. } | BallOutcome::NoBall { .. } => 1 + self.run_component(),
            _ => self.run_component(),
        }
    }

    /// Scorer button label.
    pub fn label(&self) -> String {
        match self {
            BallOutcome::Runs { runs } => runs.to_string(),
            BallOutcome::Wicket { .. } => "Wicket".to_string(),
            BallOutcome::Wide { .. } => "Wide".to_string(),
            BallOutcome::NoBall { .. } => "No-Ball".to_string(),
            BallOutcome::LegBye { .. } => "Leg Bye".to_string(),
            BallOutcome::Bye { .. } => "Bye".to_string(),
        }
    }

    /// Short commentary highlight.
    pub fn highlight(&self) -> String {
        match self {
            BallOutcome::Runs { runs: 0 } => "dot ball".to_string(),
            BallOutcome::Runs { runs } => format!("{} run(s)", runs),
            BallOutcome::Wicket { dismissal } => format!("WICKET! {}", dismissal).trim().to_string(),
            BallOutcome::Wide { .. } => format!("Wide (+{})", self.team_runs()),
            BallOutcome::NoBall { .. } => format!("No-Ball (+{})", self.team_runs()),
            BallOutcome::LegBye { runs } => format!("Leg Bye ({})", runs),
            BallOutcome::Bye { runs } => format!("Bye ({})", runs),
        }
    }

    pub fn tag(&self) -> FeedTag {
        match self {
            BallOutcome::Runs { .. } => FeedTag::Run,
            BallOutcome::Wicket { .. } => FeedTag::Wicket,
            BallOutcome::Wide { .. } => FeedTag::Wide,
            BallOutcome::NoBall { .. } => FeedTag::NoBall,
            BallOutcome::LegBye { .. } | BallOutcome::Bye { .. } => FeedTag::Bye,
        }
    }
}

/// Display classification of a feed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedTag {
    Run,
    Wicket,
    Wide,
    NoBall,
    Bye,
    OverComplete,
    InningsComplete,
    MatchCompleted,
}

impl FeedTag {
    pub fn is_ball(self) -> bool {
        matches!(
            self,
            FeedTag::Run | FeedTag::Wicket | FeedTag::Wide | FeedTag::NoBall | FeedTag::Bye
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub timestamp: DateTime<Utc>,
    pub over_number: u32,
    pub ball_in_over: u32,
    pub tag: FeedTag,
    pub description: String,
}

impl FeedEntry {
    /// Commentary line: "HH:MM:SS — description".
    pub fn render(&self) -> String {
        format!("{} — {}", self.timestamp.format("%H:%M:%S"), self.description)
    }

    /// Ball position in overs notation ("4.2").
    pub fn ball_label(&self) -> String {
        format!("{}.{}", self.over_number, self.ball_in_over)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_validate_ranges() {
        assert!(BallOutcome::runs(6).validate().is_ok());
        assert!(BallOutcome::runs(5).validate().unwrap_err().is_validation());
        assert!(BallOutcome::runs(7).validate().is_err());
        assert!(BallOutcome::no_ball(7).validate().is_err());
        assert!(BallOutcome::wide(6).validate().is_ok());
        assert!(BallOutcome::bye(9).validate().is_err());
    }

    #[test]
    fn test_from_label_matches_scorer_buttons() {
        assert_eq!(BallOutcome::from_label("4", 0, "").unwrap(), BallOutcome::runs(4));
        assert_eq!(BallOutcome::from_label("No-Ball", 2, "").unwrap(), BallOutcome::no_ball(2));
        assert_eq!(BallOutcome::from_label("Leg Bye", 1, "").unwrap(), BallOutcome::leg_bye(1));
        assert_eq!(
            BallOutcome::from_label("Wicket", 0, " Bowled ").unwrap(),
            BallOutcome::wicket("Bowled")
        );
        assert!(BallOutcome::from_label("5", 0, "").is_err());
        assert!(BallOutcome::from_label("Dead ball", 0, "").is_err());
    }

    #[test]
    fn test_run_accounting() {
        assert_eq!(BallOutcome::wide(0).team_runs(), 1);
        assert_eq!(BallOutcome::wide(2).team_runs(), 3);
        assert_eq!(BallOutcome::no_ball(4).team_runs(), 5);
        assert_eq!(BallOutcome::leg_bye(3).team_runs(), 3);
        assert_eq!(BallOutcome::wicket("Bowled").team_runs(), 0);
        assert!(!BallOutcome::no_ball(0).is_legal());
        assert!(BallOutcome::bye(1).is_legal());
    }

    #[test]
    fn test_highlights() {
        assert_eq!(BallOutcome::dot().highlight(), "dot ball");
        assert_eq!(BallOutcome::runs(2).highlight(), "2 run(s)");
        assert_eq!(BallOutcome::wicket("").highlight(), "WICKET!");
        assert_eq!(BallOutcome::no_ball(0).highlight(), "No-Ball (+1)");
    }

    #[test]
    fn test_outcome_serde_shape() {
        let json = serde_json::to_value(BallOutcome::no_ball(2)).unwrap();
        assert_eq!(json, serde_json::json!({"outcome": "no_ball", "runs_off_bat": 2}));

        let wide: BallOutcome = serde_json::from_str(r#"{"outcome":"wide"}"#).unwrap();
        assert_eq!(wide, BallOutcome::wide(0));
    }

    #[test]
    fn test_feed_entry_render() {
        let entry = FeedEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap(),
            over_number: 4,
            ball_in_over: 2,
            tag: FeedTag::Run,
            description: "1 — A vs B: 1 run(s)".to_string(),
        };
        assert_eq!(entry.render(), "14:05:07 — 1 — A vs B: 1 run(s)");
        assert_eq!(entry.ball_label(), "4.2");
    }
}
