//! Match Scoring Engine.
//!
//! `MatchState` methods mutate in place. The free functions below are the
//! value-in/value-out form: they never touch the input snapshot, so a
//! rejected operation leaves the caller's state exactly as it was.

pub mod ball;
pub mod batting;
pub mod bowling;
pub mod lifecycle;
pub mod state;
pub mod summary;


pub use state::{create_match, InningsSummary, MatchState, MatchStatus};
pub use summary::{
    describe_outcome, BattingRow, BowlingRow, InningsCard, MatchOutcome, ScoreSummary, Scorecard,
};

use crate::error::Result;
use crate::models::{BallOutcome, FeedEntry, PlayerId};

pub fn select_over(
    state: &MatchState,
    striker: &PlayerId,
    non_striker: &PlayerId,
    bowler: &PlayerId,
) -> Result<MatchState> {
    let mut next = state.clone();
    next.select_over(striker, non_striker, bowler)?;
    Ok(next)
}

pub fn record_ball(state: &MatchState, outcome: BallOutcome) -> Result<(MatchState, FeedEntry)> {
    let mut next = state.clone();
    let entry = next.record_ball(outcome)?;
    Ok((next, entry))
}

pub fn force_end_over(state: &MatchState) -> Result<MatchState> {
    let mut next = state.clone();
    next.force_end_over()?;
    Ok(next)
}

pub fn force_end_innings(state: &MatchState) -> Result<MatchState> {
    let mut next = state.clone();
    next.force_end_innings()?;
    Ok(next)
}

pub fn get_score_summary(state: &MatchState) -> ScoreSummary {
    state.score_summary()
}

pub fn get_feed(state: &MatchState, limit: usize) -> Vec<FeedEntry> {
    state.feed(limit).into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::state::test_support::*;
    use super::*;
    use crate::error::ScoringError;

    #[test]
    fn test_functional_api_leaves_input_untouched_on_error() {
        let state = started_match(2);
        let mut current = state.clone();
        for _ in 0..6 {
            current = record_ball(&current, BallOutcome::dot()).unwrap().0;
        }

        let err = record_ball(&current, BallOutcome::dot()).unwrap_err();
        assert!(matches!(err, ScoringError::Sequence(_)));
        let err = select_over(&current, &pid("A2"), &pid("A1"), &pid("B1")).unwrap_err();
        assert!(matches!(err, ScoringError::BowlerRepeat { .. }));
        assert_eq!(current.feed_len(), 7);
        assert!(state.feed(1).is_empty());
    }

    #[test]
    fn test_functional_api_plays_match_to_completion() {
        let mut current = started_match(1);
        for _ in 0..6 {
            current = record_ball(&current, BallOutcome::runs(1)).unwrap().0;
        }
        assert_eq!(current.status(), MatchStatus::Innings2);

        current = select_over(&current, &pid("B1"), &pid("B2"), &pid("A1")).unwrap();
        for _ in 0..6 {
            current = record_ball(&current, BallOutcome::dot()).unwrap().0;
        }
        assert_eq!(current.status(), MatchStatus::Completed);
        assert_eq!(current.feed(1)[0].tag, crate::models::FeedTag::MatchCompleted);
        assert!(current.result().is_some());

        let err = record_ball(&current, BallOutcome::dot()).unwrap_err();
        assert!(matches!(err, ScoringError::Precondition(_)));
        let err = select_over(&current, &pid("B1"), &pid("B2"), &pid("A2")).unwrap_err();
        assert!(matches!(err, ScoringError::Precondition(_)));
    }

    #[test]
    fn test_get_feed_is_newest_first_and_limited() {
        let mut state = started_match(2);
        for runs in [1u8, 2, 3] {
            state = record_ball(&state, BallOutcome::runs(runs)).unwrap().0;
        }
        let feed = get_feed(&state, 2);
        assert_eq!(feed.len(), 2);
        assert!(feed[0].description.starts_with("3 —"));
        assert!(feed[1].description.starts_with("2 —"));
        assert_eq!(get_feed(&state, 50).len(), 3);
    }

    #[test]
    fn test_force_end_helpers() {
        let state = started_match(2);
        let ended = force_end_over(&state).unwrap();
        assert!(!ended.over_in_progress());
        assert!(state.over_in_progress());

        let switched = force_end_innings(&ended).unwrap();
        assert_eq!(get_score_summary(&switched).innings_number, 2);
    }
}
