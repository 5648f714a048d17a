//! Read-only views over a match: live summary, scorecard and result.

use serde::{Deserialize, Serialize};

use super::state::{MatchState, MatchStatus};
use crate::error::Result;
use crate::models::{PlayerId, PlayerStats, TeamSide};

/// Live scoreboard line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub batting_team: TeamSide,
    pub runs: u32,
    pub wickets: u32,
    pub overs_completed: u32,
    pub balls_in_over: u32,
    /// Overs notation, e.g. "7.3"
    pub overs: String,
    pub run_rate: f64,
    pub innings_number: u8,
    pub status: MatchStatus,
    /// Runs needed to win, second innings only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattingRow {
    pub player: PlayerId,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub strike_rate: f64,
    pub how_out: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BowlingRow {
    pub player: PlayerId,
    pub overs: String,
    pub runs: u32,
    pub wickets: u32,
    pub economy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InningsCard {
    pub innings_number: u8,
    pub batting_team: TeamSide,
    pub total: String,
    pub overs: String,
    pub batting: Vec<BattingRow>,
    pub bowling: Vec<BowlingRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    pub title: String,
    pub innings: Vec<InningsCard>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchOutcome {
    WonByRuns { winner: TeamSide, runs: u32 },
    WonByWickets { winner: TeamSide, wickets: u32 },
    Tie,
}

pub fn describe_outcome(outcome: &MatchOutcome) -> String {
    match outcome {
        MatchOutcome::WonByRuns { winner, runs } => format!("{} won by {} runs", winner, runs),
        MatchOutcome::WonByWickets { winner, wickets } => {
            format!("{} won by {} wickets", winner, wickets)
        }
        MatchOutcome::Tie => "Match tied".to_string(),
    }
}

impl MatchState {
    pub fn score_summary(&self) -> ScoreSummary {
        let score = self.current_score();
        let target = match (self.innings_number, &self.first_innings) {
            (2, Some(first)) => Some(first.score.runs + 1),
            _ => None,
        };

        ScoreSummary {
            batting_team: self.batting_team,
            runs: score.runs,
            wickets: score.wickets,
            overs_completed: score.overs_completed(),
            balls_in_over: score.balls_in_over(),
            overs: score.overs_display(),
            run_rate: score.run_rate(),
            innings_number: self.innings_number,
            status: self.status,
            target,
        }
    }

    pub fn get_stats(&self, player: &PlayerId) -> Result<PlayerStats> {
        self.stats.get_stats(player)
    }

    /// Winner once the match is completed. Decided on runs only; the innings
    /// itself always ends on the overs limit.
    pub fn result(&self) -> Option<MatchOutcome> {
        if self.status != MatchStatus::Completed {
            return None;
        }
        let first = self.first_innings?;
        let chasing = self.score.get(first.batting_team.opponent());

        let outcome = if chasing.runs > first.score.runs {
            let batters = self.teams.roster(first.batting_team.opponent()).len() as u32;
            MatchOutcome::WonByWickets {
                winner: first.batting_team.opponent(),
                wickets: batters.saturating_sub(1).saturating_sub(chasing.wickets),
            }
        } else if chasing.runs < first.score.runs {
            MatchOutcome::WonByRuns {
                winner: first.batting_team,
                runs: first.score.runs - chasing.runs,
            }
        } else {
            MatchOutcome::Tie
        };
        Some(outcome)
    }

    pub fn scorecard(&self) -> Scorecard {
        let first_side = self.info.batting_first;
        let mut innings = vec![self.innings_card(1, first_side)];
        if self.innings_number == 2 {
            innings.push(self.innings_card(2, first_side.opponent()));
        }
        Scorecard { title: self.info.title.clone(), innings }
    }

    fn innings_card(&self, innings_number: u8, side: TeamSide) -> InningsCard {
        let score = self.score.get(side);

        let batting = self
            .teams
            .roster(side)
            .players()
            .iter()
            .filter_map(|player| {
                let stats = self.stats.batter(player)?;
                let how_out = match &stats.dismissal {
                    Some(how) => how.clone(),
                    None => "not out".to_string(),
                };
                Some(BattingRow {
                    player: player.clone(),
                    runs: stats.runs,
                    balls: stats.balls_faced,
                    fours: stats.fours,
                    sixes: stats.sixes,
                    strike_rate: stats.strike_rate(),
                    how_out,
                })
            })
            .collect();

        let bowling = self
            .teams
            .roster(side.opponent())
            .players()
            .iter()
            .filter_map(|player| {
                let stats = self.stats.bowler(player)?;
                Some(BowlingRow {
                    player: player.clone(),
                    overs: stats.overs_display(),
                    runs: stats.runs_conceded,
                    wickets: stats.wickets,
                    economy: stats.economy(),
                })
            })
            .collect();

        InningsCard {
            innings_number,
            batting_team: side,
            total: score.display(),
            overs: score.overs_display(),
            batting,
            bowling,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::state::test_support::*;
    use crate::engine::{MatchOutcome, MatchState, MatchStatus};
    use crate::models::{BallOutcome, TeamSide};
    use insta::assert_json_snapshot;

    fn ball(state: &mut MatchState, outcome: BallOutcome) {
        state.record_ball_at(outcome, fixed_time()).unwrap();
    }

    #[test]
    fn test_score_summary_snapshot() {
        let mut state = started_match(2);
        for runs in [1u8, 4, 0, 6, 2, 2] {
            ball(&mut state, BallOutcome::runs(runs));
        }
        state.select_over_at(&pid("A1"), &pid("A2"), &pid("B2"), fixed_time()).unwrap();
        ball(&mut state, BallOutcome::wicket("Bowled"));
        ball(&mut state, BallOutcome::wide(0));
        ball(&mut state, BallOutcome::runs(1));

        assert_json_snapshot!(state.score_summary(), @r###"
        {
          "batting_team": "Team A",
          "runs": 17,
          "wickets": 1,
          "overs_completed": 1,
          "balls_in_over": 2,
          "overs": "1.2",
          "run_rate": 12.75,
          "innings_number": 1,
          "status": "INNINGS1"
        }
        "###);
    }

    #[test]
    fn test_target_in_second_innings() {
        let mut state = started_match(1);
        ball(&mut state, BallOutcome::runs(4));
        state.force_end_innings_at(fixed_time()).unwrap();

        let summary = state.score_summary();
        assert_eq!(summary.batting_team, TeamSide::TeamB);
        assert_eq!(summary.target, Some(5));
        assert_eq!(summary.runs, 0);
        assert_eq!(summary.run_rate, 0.0);
    }

    #[test]
    fn test_result_chasing_side_wins_by_wickets() {
        let mut state = started_match(1);
        ball(&mut state, BallOutcome::runs(1));
        state.force_end_innings_at(fixed_time()).unwrap();
        state.select_over_at(&pid("B1"), &pid("B2"), &pid("A1"), fixed_time()).unwrap();
        ball(&mut state, BallOutcome::wicket("Run out"));
        ball(&mut state, BallOutcome::runs(4));
        assert!(state.result().is_none());

        state.force_end_innings_at(fixed_time()).unwrap();
        assert_eq!(state.status(), MatchStatus::Completed);
        assert_eq!(
            state.result(),
            Some(MatchOutcome::WonByWickets { winner: TeamSide::TeamB, wickets: 2 })
        );
    }

    #[test]
    fn test_scorecard_rows_follow_roster_order() {
        let mut state = started_match(2);
        ball(&mut state, BallOutcome::runs(4));
        ball(&mut state, BallOutcome::wicket("Caught by B4"));

        let card = state.scorecard();
        assert_eq!(card.innings.len(), 1);
        let first = &card.innings[0];
        assert_eq!(first.total, "4/1");
        assert_eq!(first.overs, "0.2");

        let batters: Vec<&str> = first.batting.iter().map(|r| r.player.as_str()).collect();
        assert_eq!(batters, vec!["A1", "A2", "A3"]);
        assert_eq!(first.batting[0].how_out, "Caught by B4");
        assert_eq!(first.batting[0].strike_rate, 200.0);
        assert_eq!(first.batting[2].how_out, "not out");

        assert_eq!(first.bowling.len(), 1);
        assert_eq!(first.bowling[0].overs, "0.2");
        assert_eq!(first.bowling[0].wickets, 1);
    }

    #[test]
    fn test_get_stats_for_unknown_player() {
        let state = started_match(2);
        assert!(state.get_stats(&pid("A4")).is_err());
        let stats = state.get_stats(&pid("B1")).unwrap();
        assert!(stats.batting.is_none());
        assert!(stats.bowling.is_some());
    }
}
