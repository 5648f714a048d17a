pub mod json_api;

pub use json_api::{
    create_match_json, feed_json, force_end_innings_json, force_end_over_json, record_ball_json,
    score_summary_json, select_over_json, CreateMatchRequest, FeedRequest, FeedResponse,
    RecordBallRequest, SelectOverRequest, StateRequest, StateResponse, API_SCHEMA_VERSION,
};
