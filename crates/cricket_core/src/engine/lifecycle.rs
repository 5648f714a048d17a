//! Over and innings lifecycle.
//!
//! Both boundaries are checked after every legal delivery: the ball that
//! completes the sixth legal ball ends the over, and the ball that reaches the
//! overs limit closes the innings or completes the match. The administrative
//! `force_*` operations run the same transitions out of band.

use chrono::{DateTime, Utc};

use super::state::{InningsSummary, MatchState, MatchStatus};
use super::summary::describe_outcome;
use crate::error::{Result, ScoringError};
use crate::models::{FeedTag, BALLS_PER_OVER};

impl MatchState {
    /// End the over when the last legal delivery completed a new multiple of six.
    pub(crate) fn check_over_boundary(&mut self, at: DateTime<Utc>) -> bool {
        let balls = self.current_score().legal_balls;
        if balls == 0 || balls % BALLS_PER_OVER != 0 || self.over_boundary_at == Some(balls) {
            return false;
        }
        self.end_over(at);
        true
    }

    /// Close the innings (or the match) once the overs limit is reached.
    pub(crate) fn check_innings_boundary(&mut self, at: DateTime<Utc>) -> bool {
        if self.is_completed() || self.current_score().legal_balls < self.innings_ball_limit() {
            return false;
        }
        self.end_innings(at);
        true
    }

    /// Administrative: end the current over regardless of the ball count.
    pub fn force_end_over(&mut self) -> Result<()> {
        self.force_end_over_at(Utc::now())
    }

    pub fn force_end_over_at(&mut self, at: DateTime<Utc>) -> Result<()> {
        self.ensure_not_completed()?;
        if !self.over_in_progress {
            return Err(ScoringError::Sequence("no over in progress to end".to_string()));
        }
        tracing::warn!(
            balls = self.current_score().legal_balls,
            bowler = ?self.current_bowler,
            "over ended by override"
        );
        self.end_over(at);
        Ok(())
    }

    /// Administrative: end the current innings regardless of the ball count.
    pub fn force_end_innings(&mut self) -> Result<()> {
        self.force_end_innings_at(Utc::now())
    }

    pub fn force_end_innings_at(&mut self, at: DateTime<Utc>) -> Result<()> {
        self.ensure_not_completed()?;
        tracing::warn!(
            innings = self.innings_number,
            balls = self.current_score().legal_balls,
            "innings ended by override"
        );
        self.end_innings(at);
        Ok(())
    }

    fn end_over(&mut self, at: DateTime<Utc>) {
        let score = *self.current_score();
        self.overs_ended += 1;
        let over_label = self.overs_ended;

        let bowler_figures = self
            .current_bowler
            .as_ref()
            .and_then(|b| self.stats.bowler(b).map(|f| (b, f)))
            .map(|(b, f)| {
                format!(" ({} {}-{}-{})", b, f.overs_display(), f.runs_conceded, f.wickets)
            })
            .unwrap_or_default();

        self.swap_strike();
        self.last_over_bowler = self.current_bowler.take();
        self.over_in_progress = false;
        self.over_boundary_at = Some(score.legal_balls);

        let description = format!(
            "End of over {}: {} {} ({} ov){}",
            over_label,
            self.batting_team,
            score.display(),
            score.overs_display(),
            bowler_figures
        );
        self.push_lifecycle_entry(FeedTag::OverComplete, description, at);

        tracing::info!(
            over = over_label,
            team = %self.batting_team,
            score = %score.display(),
            "over complete"
        );
    }

    fn end_innings(&mut self, at: DateTime<Utc>) {
        let score = *self.current_score();

        if self.innings_number == 1 {
            let description = format!(
                "Innings 1 complete: {} {} ({} ov). {} need {} to win",
                self.batting_team,
                score.display(),
                score.overs_display(),
                self.bowling_team,
                score.runs + 1
            );
            self.push_lifecycle_entry(FeedTag::InningsComplete, description, at);

            self.first_innings = Some(InningsSummary { batting_team: self.batting_team, score });
            std::mem::swap(&mut self.batting_team, &mut self.bowling_team);
            self.reset_batting_for(self.batting_team);
            self.current_bowler = None;
            self.last_over_bowler = None;
            self.over_in_progress = false;
            self.over_boundary_at = None;
            self.overs_ended = 0;
            self.innings_number = 2;
            self.status = MatchStatus::Innings2;

            tracing::info!(
                first_innings = %score.display(),
                now_batting = %self.batting_team,
                "innings complete"
            );
        } else {
            self.status = MatchStatus::Completed;
            self.over_in_progress = false;
            let result = self
                .result()
                .map(|outcome| describe_outcome(&outcome))
                .unwrap_or_else(|| "result pending".to_string());
            let description = format!(
                "Match completed: {} {} ({} ov). {}",
                self.batting_team,
                score.display(),
                score.overs_display(),
                result
            );
            self.push_lifecycle_entry(FeedTag::MatchCompleted, description, at);

            tracing::info!(result = %result, "match completed");
        }
    }
}
