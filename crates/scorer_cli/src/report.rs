//! Plain-text rendering for the terminal.

use cricket_core::engine::describe_outcome;
use cricket_core::{MatchState, PlayerStats, ScoreSummary, Scorecard};

pub fn render_summary(summary: &ScoreSummary) -> String {
    let mut line = format!(
        "{} {}/{} ({} ov, RR {:.2})",
        summary.batting_team, summary.runs, summary.wickets, summary.overs, summary.run_rate
    );
    if let Some(target) = summary.target {
        let needed = target.saturating_sub(summary.runs);
        line.push_str(&format!(" | target {}, need {}", target, needed));
    }
    line
}

/// Current batters and bowler, or the prompt for the next over.
pub fn render_crease(state: &MatchState) -> String {
    if state.is_completed() {
        return match state.result() {
            Some(outcome) => format!("Match completed: {}", describe_outcome(&outcome)),
            None => "Match completed".to_string(),
        };
    }
    if !state.over_in_progress() {
        return "Over not started: select striker, non-striker and bowler".to_string();
    }
    let name = |p: Option<&cricket_core::PlayerId>| {
        p.map(|p| p.as_str().to_string()).unwrap_or_else(|| "-".to_string())
    };
    format!(
        "{}* & {} | bowling: {}",
        name(state.striker()),
        name(state.non_striker()),
        name(state.current_bowler())
    )
}

pub fn render_scorecard(card: &Scorecard) -> Vec<String> {
    let mut lines = vec![card.title.clone()];
    for innings in &card.innings {
        lines.push(String::new());
        lines.push(format!(
            "Innings {}: {} {} ({} ov)",
            innings.innings_number, innings.batting_team, innings.total, innings.overs
        ));
        lines.push(format!("{:<20} {:>4} {:>4} {:>3} {:>3} {:>7}", "Batter", "R", "B", "4s", "6s", "SR"));
        for row in &innings.batting {
            lines.push(format!(
                "{:<20} {:>4} {:>4} {:>3} {:>3} {:>7.2}  {}",
                row.player.as_str(),
                row.runs,
                row.balls,
                row.fours,
                row.sixes,
                row.strike_rate,
                row.how_out
            ));
        }
        lines.push(format!("{:<20} {:>5} {:>4} {:>3} {:>6}", "Bowler", "O", "R", "W", "Econ"));
        for row in &innings.bowling {
            lines.push(format!(
                "{:<20} {:>5} {:>4} {:>3} {:>6.2}",
                row.player.as_str(),
                row.overs,
                row.runs,
                row.wickets,
                row.economy
            ));
        }
    }
    lines
}

pub fn render_player_stats(stats: &PlayerStats) -> Vec<String> {
    let mut lines = vec![stats.player.to_string()];
    if let Some(bat) = &stats.batting {
        let status = bat.dismissal.as_deref().unwrap_or("not out");
        lines.push(format!(
            "  Batting: {} ({}) 4s:{} 6s:{} SR {:.2}, {}",
            bat.runs,
            bat.balls_faced,
            bat.fours,
            bat.sixes,
            bat.strike_rate(),
            status
        ));
    }
    if let Some(bowl) = &stats.bowling {
        lines.push(format!(
            "  Bowling: {}-{}-{} Econ {:.2}",
            bowl.overs_display(),
            bowl.runs_conceded,
            bowl.wickets,
            bowl.economy()
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use cricket_core::{BallOutcome, MatchSetup, PlayerId};

    fn pid(name: &str) -> PlayerId {
        PlayerId::new(name).unwrap()
    }

    fn started() -> MatchState {
        let setup = MatchSetup::new(
            "Report test",
            1,
            vec!["A1".into(), "A2".into(), "A3".into()],
            vec!["B1".into(), "B2".into()],
        );
        let mut state = cricket_core::create_match(&setup).unwrap();
        state.select_over(&pid("A1"), &pid("A2"), &pid("B1")).unwrap();
        state
    }

    #[test]
    fn test_render_summary_and_crease() {
        let mut state = started();
        state.record_ball(BallOutcome::runs(1)).unwrap();

        assert_eq!(render_summary(&state.score_summary()), "Team A 1/0 (0.1 ov, RR 6.00)");
        assert_eq!(render_crease(&state), "A2* & A1 | bowling: B1");
    }

    #[test]
    fn test_render_summary_with_target() {
        let mut state = started();
        state.record_ball(BallOutcome::runs(6)).unwrap();
        state.force_end_innings().unwrap();

        let line = render_summary(&state.score_summary());
        assert!(line.ends_with("target 7, need 7"), "{line}");
        assert!(render_crease(&state).starts_with("Over not started"));
    }

    #[test]
    fn test_render_scorecard_and_stats() {
        let mut state = started();
        state.record_ball(BallOutcome::runs(4)).unwrap();
        state.record_ball(BallOutcome::wicket("Bowled")).unwrap();

        let lines = render_scorecard(&state.scorecard());
        assert_eq!(lines[0], "Report test");
        assert!(lines.iter().any(|l| l.starts_with("Innings 1: Team A 4/1 (0.2 ov)")));
        assert!(lines.iter().any(|l| l.starts_with("A1") && l.ends_with("Bowled")));

        let stats = render_player_stats(&state.get_stats(&pid("B1")).unwrap());
        assert_eq!(stats[1], "  Bowling: 0.2-4-1 Econ 12.00");
    }
}
