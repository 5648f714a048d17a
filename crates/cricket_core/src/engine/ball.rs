//! Ball event processing.
//!
//! One delivery is one atomic transition: score, rotation and statistics are
//! updated together and exactly one feed entry describes the ball. An over
//! summary entry follows when the delivery completes an over.

use chrono::{DateTime, Utc};

use super::state::MatchState;
use crate::error::{Result, ScoringError};
use crate::models::{BallOutcome, FeedEntry, PlayerId, BALLS_PER_OVER};

impl MatchState {
    /// Record a delivery stamped with the current time.
    pub fn record_ball(&mut self, outcome: BallOutcome) -> Result<FeedEntry> {
        self.record_ball_at(outcome, Utc::now())
    }

    /// Record a delivery with an explicit timestamp (deterministic replay).
    ///
    /// Either the ball and every transition it triggers are applied, or the
    /// call is rejected with the state untouched. The ball that reaches the
    /// overs limit also closes the innings, or completes the match in the
    /// second innings.
    pub fn record_ball_at(&mut self, outcome: BallOutcome, at: DateTime<Utc>) -> Result<FeedEntry> {
        self.ensure_not_completed()?;
        outcome.validate()?;

        let (striker, non_striker, bowler) = match self.ball_participants() {
            Ok(participants) => participants,
            Err(err) => {
                tracing::warn!(outcome = %outcome.label(), error = %err, "ball rejected");
                return Err(err);
            }
        };

        let entry = self.apply_ball(&outcome, striker, non_striker, bowler, at);

        if outcome.is_legal() {
            self.check_over_boundary(at);
            self.check_innings_boundary(at);
        }
        Ok(entry)
    }

    fn ball_participants(&self) -> Result<(PlayerId, PlayerId, PlayerId)> {
        if !self.over_in_progress {
            return Err(ScoringError::Sequence(
                "no over in progress; select the bowler for the next over first".to_string(),
            ));
        }

        match (&self.striker, &self.non_striker, &self.current_bowler) {
            (Some(s), Some(n), Some(b)) => Ok((s.clone(), n.clone(), b.clone())),
            (None, _, _) => Err(ScoringError::Precondition("striker not set".to_string())),
            (_, None, _) => Err(ScoringError::Precondition("non-striker not set".to_string())),
            (_, _, None) => Err(ScoringError::Precondition("bowler not set".to_string())),
        }
    }

    fn apply_ball(
        &mut self,
        outcome: &BallOutcome,
        striker: PlayerId,
        non_striker: PlayerId,
        bowler: PlayerId,
        at: DateTime<Utc>,
    ) -> FeedEntry {
        let balls_before = self.current_score().legal_balls;
        let mut aftermath = String::new();

        self.stats.batter_mut(&striker);
        self.stats.batter_mut(&non_striker);
        self.stats.bowler_mut(&bowler);

        match outcome {
            BallOutcome::Runs { runs } => {
                let runs = *runs as u32;
                let batter = self.stats.batter_mut(&striker);
                batter.runs += runs;
                batter.balls_faced += 1;
                count_boundary(batter, runs);
                let figures = self.stats.bowler_mut(&bowler);
                figures.balls_bowled += 1;
                figures.runs_conceded += runs;
            }
            BallOutcome::Wicket { dismissal } => {
                let how_out = if dismissal.trim().is_empty() {
                    format!("b {}", bowler)
                } else {
                    dismissal.trim().to_string()
                };
                let batter = self.stats.batter_mut(&striker);
                batter.balls_faced += 1;
                batter.dismissal = Some(how_out);
                let figures = self.stats.bowler_mut(&bowler);
                figures.balls_bowled += 1;
                figures.wickets += 1;

                self.score.get_mut(self.batting_team).wickets += 1;
                self.dismissed.push(striker.clone());
                aftermath = match self.replace_dismissed_striker() {
                    Some(incoming) => format!("; {} comes in", incoming),
                    None => "; no batter remaining".to_string(),
                };
            }
            BallOutcome::Wide { .. } => {
                self.stats.bowler_mut(&bowler).runs_conceded += outcome.team_runs();
            }
            BallOutcome::NoBall { runs_off_bat } => {
                let runs = *runs_off_bat as u32;
                self.stats.bowler_mut(&bowler).runs_conceded += outcome.team_runs();
                let batter = self.stats.batter_mut(&striker);
                batter.runs += runs;
                count_boundary(batter, runs);
            }
            BallOutcome::LegBye { .. } | BallOutcome::Bye { .. } => {
                self.stats.batter_mut(&striker).balls_faced += 1;
                self.stats.bowler_mut(&bowler).balls_bowled += 1;
            }
        }

        let score = self.score.get_mut(self.batting_team);
        score.runs += outcome.team_runs();
        if outcome.is_legal() {
            score.legal_balls += 1;
        }

        let is_wicket = matches!(outcome, BallOutcome::Wicket { .. });
        if !is_wicket && outcome.run_component() % 2 == 1 {
            self.swap_strike();
        }

        let entry = FeedEntry {
            timestamp: at,
            over_number: balls_before / BALLS_PER_OVER,
            ball_in_over: balls_before % BALLS_PER_OVER + 1,
            tag: outcome.tag(),
            description: format!(
                "{} — {} vs {}: {}{}",
                outcome.label(),
                striker,
                bowler,
                outcome.highlight(),
                aftermath
            ),
        };
        self.feed.push_front(entry.clone());

        tracing::debug!(
            ball = %entry.ball_label(),
            outcome = %outcome.label(),
            %striker,
            %bowler,
            runs = outcome.team_runs(),
            total = %self.current_score().display(),
            "ball recorded"
        );
        entry
    }
}

fn count_boundary(batter: &mut crate::models::BatterStats, runs: u32) {
    match runs {
        4 => batter.fours += 1,
        6 => batter.sixes += 1,
        _ => {}
    }
}
