//! Over selection and the no-consecutive-overs rule.

use chrono::{DateTime, Utc};

use super::state::MatchState;
use crate::error::{Result, ScoringError};
use crate::models::PlayerId;

impl MatchState {
    /// Set striker, non-striker and bowler and open the over.
    ///
    /// On a new over the bowler must differ from whoever bowled the previous
    /// one. A call while an over is already running updates the selection
    /// without that check.
    pub fn select_over(
        &mut self,
        striker: &PlayerId,
        non_striker: &PlayerId,
        bowler: &PlayerId,
    ) -> Result<()> {
        self.select_over_at(striker, non_striker, bowler, Utc::now())
    }

    pub fn select_over_at(
        &mut self,
        striker: &PlayerId,
        non_striker: &PlayerId,
        bowler: &PlayerId,
        at: DateTime<Utc>,
    ) -> Result<()> {
        self.ensure_not_completed()?;

        if let Err(err) = self.validate_selection(striker, non_striker, bowler) {
            tracing::warn!(%striker, %non_striker, %bowler, error = %err, "over selection rejected");
            return Err(err);
        }

        let new_over = !self.over_in_progress;
        self.striker = Some(striker.clone());
        self.non_striker = Some(non_striker.clone());
        self.current_bowler = Some(bowler.clone());
        self.over_in_progress = true;

        self.stats.batter_mut(striker);
        self.stats.batter_mut(non_striker);
        self.stats.bowler_mut(bowler);

        tracing::debug!(
            %striker,
            %non_striker,
            %bowler,
            new_over,
            innings = self.innings_number,
            %at,
            "over selection set"
        );
        Ok(())
    }

    fn validate_selection(
        &self,
        striker: &PlayerId,
        non_striker: &PlayerId,
        bowler: &PlayerId,
    ) -> Result<()> {
        if striker == non_striker {
            return Err(ScoringError::Validation(
                "striker and non-striker must be different players".to_string(),
            ));
        }

        let batting = self.teams.roster(self.batting_team);
        for batter in [striker, non_striker] {
            if !batting.contains(batter) {
                return Err(ScoringError::Validation(format!(
                    "{} is not in the {} batting roster",
                    batter, self.batting_team
                )));
            }
            if self.dismissed.contains(batter) {
                return Err(ScoringError::Validation(format!(
                    "{} is already out this innings",
                    batter
                )));
            }
        }

        if !self.teams.roster(self.bowling_team).contains(bowler) {
            return Err(ScoringError::Validation(format!(
                "{} is not in the {} bowling roster",
                bowler, self.bowling_team
            )));
        }

        if !self.over_in_progress && self.last_over_bowler.as_ref() == Some(bowler) {
            return Err(ScoringError::BowlerRepeat { bowler: bowler.to_string() });
        }

        Ok(())
    }
}
