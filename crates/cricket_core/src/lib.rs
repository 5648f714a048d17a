//! # cricket_core - Ball-by-Ball Cricket Scoring Engine
//!
//! A deterministic state machine that records a limited-overs match one
//! delivery at a time and derives the live score, overs, run rate, batting
//! and bowling figures and a newest-first commentary feed.
//!
//! ## Features
//! - Strike rotation, over completion and extras per the Laws
//! - No bowler may deliver consecutive overs
//! - Innings switch and match completion on the ball that reaches the overs limit
//! - Snapshot in, snapshot out: the caller owns storage
//! - JSON API for front-ends

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;

pub use api::{
    create_match_json, feed_json, force_end_innings_json, force_end_over_json, record_ball_json,
    score_summary_json, select_over_json,
};
pub use config::{config_from_env, ConfigError, ScoringConfig};
pub use engine::{
    create_match, force_end_innings, force_end_over, get_feed, get_score_summary, record_ball,
    select_over, MatchOutcome, MatchState, MatchStatus, ScoreSummary, Scorecard,
};
pub use error::{Result, ScoringError};
pub use models::{
    BallOutcome, BatterStats, BowlerStats, FeedEntry, FeedTag, MatchSetup, PlayerId, PlayerStats,
    Roster, TeamSide,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = api::API_SCHEMA_VERSION;
