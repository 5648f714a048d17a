//! Batting rotation: strike changes and incoming batters.

use super::state::MatchState;
use crate::models::{PlayerId, TeamSide};

impl MatchState {
    pub(crate) fn swap_strike(&mut self) {
        std::mem::swap(&mut self.striker, &mut self.non_striker);
    }

    /// Walk the batting-order cursor for the next batter, skipping whoever is
    /// at the crease and anyone already out. Leaves the striker slot empty
    /// when the order is exhausted.
    pub(crate) fn replace_dismissed_striker(&mut self) -> Option<PlayerId> {
        let mut idx = self.next_batter_index;
        let mut incoming = None;

        while idx < self.batting_order.len() {
            let candidate = &self.batting_order[idx];
            idx += 1;
            let at_crease = self.striker.as_ref() == Some(candidate)
                || self.non_striker.as_ref() == Some(candidate);
            if !at_crease && !self.dismissed.contains(candidate) {
                incoming = Some(candidate.clone());
                break;
            }
        }

        self.next_batter_index = idx;
        self.striker = incoming.clone();
        if let Some(player) = &incoming {
            self.stats.batter_mut(player);
        }
        incoming
    }

    /// Fresh batting order and empty crease for `side`.
    pub(crate) fn reset_batting_for(&mut self, side: TeamSide) {
        self.batting_order = self.teams.roster(side).players().to_vec();
        self.next_batter_index = 0;
        self.striker = None;
        self.non_striker = None;
        self.dismissed.clear();
    }
}
