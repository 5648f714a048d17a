pub mod events;
pub mod match_setup;
pub mod player;
pub mod score;
pub mod stats;
pub mod team;

pub use events::{BallOutcome, FeedEntry, FeedTag, MAX_RUNS_PER_BALL};
pub use match_setup::{generate_match_id, MatchInfo, MatchSetup};
pub use player::{PlayerId, Roster, MIN_ROSTER_SIZE};
pub use score::{overs_str, InningsScore, TeamScores, BALLS_PER_OVER};
pub use stats::{BatterStats, BowlerStats, PlayerStats, StatsBook};
pub use team::{TeamSide, Teams};
