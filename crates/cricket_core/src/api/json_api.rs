use serde::{Deserialize, Serialize};

use crate::config::{config_from_env, ScoringConfig};
use crate::engine::{MatchState, ScoreSummary};
use crate::error::{error_codes, ScoringError};
use crate::models::{BallOutcome, FeedEntry, MatchSetup, PlayerId};

pub const API_SCHEMA_VERSION: u8 = 1;

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

fn scoring_err(err: ScoringError) -> String {
    err_code(err.error_code(), err)
}

fn check_schema(version: u8) -> Result<(), String> {
    if version != API_SCHEMA_VERSION {
        return Err(err_code(
            error_codes::SCHEMA,
            format!("unsupported schema version: {version}"),
        ));
    }
    Ok(())
}

fn parse<'a, T: Deserialize<'a>>(json: &'a str) -> Result<T, String> {
    serde_json::from_str(json)
        .map_err(|e| err_code(error_codes::JSON, format!("invalid JSON request: {e}")))
}

fn load_config() -> Result<ScoringConfig, String> {
    config_from_env().map_err(|e| err_code(error_codes::VALIDATION, e))
}

#[derive(Debug, Deserialize)]
pub struct CreateMatchRequest {
    pub schema_version: u8,
    #[serde(flatten)]
    pub setup: MatchSetup,
}

#[derive(Debug, Deserialize)]
pub struct SelectOverRequest {
    pub schema_version: u8,
    pub state: MatchState,
    pub striker: PlayerId,
    pub non_striker: PlayerId,
    pub bowler: PlayerId,
}

#[derive(Debug, Deserialize)]
pub struct RecordBallRequest {
    pub schema_version: u8,
    pub state: MatchState,
    pub ball: BallOutcome,
}

/// Request carrying only a state snapshot (overrides, summary).
#[derive(Debug, Deserialize)]
pub struct StateRequest {
    pub schema_version: u8,
    pub state: MatchState,
}

#[derive(Debug, Deserialize)]
pub struct FeedRequest {
    pub schema_version: u8,
    pub state: MatchState,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Result of every mutating call: the new snapshot to store plus the live summary.
#[derive(Debug, Serialize, Deserialize)]
pub struct StateResponse {
    pub schema_version: u8,
    pub state: MatchState,
    pub summary: ScoreSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<FeedEntry>,
}

impl StateResponse {
    fn new(state: MatchState, entry: Option<FeedEntry>) -> Self {
        Self {
            schema_version: API_SCHEMA_VERSION,
            summary: state.score_summary(),
            state,
            entry,
        }
    }

    fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| err_code(error_codes::JSON, e))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedResponse {
    pub schema_version: u8,
    pub entries: Vec<FeedEntry>,
    /// Rendered commentary lines, newest first
    pub lines: Vec<String>,
}

pub fn create_match_json(request_json: &str) -> Result<String, String> {
    let request: CreateMatchRequest = parse(request_json)?;
    check_schema(request.schema_version)?;
    let config = load_config()?;

    let state = MatchState::new(&request.setup, &config).map_err(scoring_err)?;
    StateResponse::new(state, None).to_json()
}

pub fn select_over_json(request_json: &str) -> Result<String, String> {
    let request: SelectOverRequest = parse(request_json)?;
    check_schema(request.schema_version)?;

    let mut state = request.state;
    state
        .select_over(&request.striker, &request.non_striker, &request.bowler)
        .map_err(scoring_err)?;
    StateResponse::new(state, None).to_json()
}

pub fn record_ball_json(request_json: &str) -> Result<String, String> {
    let request: RecordBallRequest = parse(request_json)?;
    check_schema(request.schema_version)?;

    let mut state = request.state;
    let entry = state.record_ball(request.ball).map_err(scoring_err)?;
    StateResponse::new(state, Some(entry)).to_json()
}

pub fn force_end_over_json(request_json: &str) -> Result<String, String> {
    let request: StateRequest = parse(request_json)?;
    check_schema(request.schema_version)?;

    let mut state = request.state;
    state.force_end_over().map_err(scoring_err)?;
    StateResponse::new(state, None).to_json()
}

pub fn force_end_innings_json(request_json: &str) -> Result<String, String> {
    let request: StateRequest = parse(request_json)?;
    check_schema(request.schema_version)?;

    let mut state = request.state;
    state.force_end_innings().map_err(scoring_err)?;
    StateResponse::new(state, None).to_json()
}

pub fn score_summary_json(request_json: &str) -> Result<String, String> {
    let request: StateRequest = parse(request_json)?;
    check_schema(request.schema_version)?;

    serde_json::to_string(&request.state.score_summary()).map_err(|e| err_code(error_codes::JSON, e))
}

pub fn feed_json(request_json: &str) -> Result<String, String> {
    let request: FeedRequest = parse(request_json)?;
    check_schema(request.schema_version)?;

    let limit = match request.limit {
        Some(limit) => limit,
        None => load_config()?.feed_display_limit,
    };
    let entries: Vec<FeedEntry> = request.state.feed(limit).into_iter().cloned().collect();
    let lines = entries.iter().map(FeedEntry::render).collect();
    let response = FeedResponse { schema_version: API_SCHEMA_VERSION, entries, lines };
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::JSON, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn create() -> Value {
        create_with_overs(2)
    }

    fn create_with_overs(overs: u32) -> Value {
        let request = json!({
            "schema_version": 1,
            "title": "MPGB A vs MPGB B",
            "venue": "Sagar",
            "overs_limit": overs,
            "batting_first": "Team B",
            "team_a": ["A1", "A2", "A3"],
            "team_b": ["B1", "B2", "B3"]
        });
        serde_json::from_str(&create_match_json(&request.to_string()).unwrap()).unwrap()
    }

    fn select(state: &Value, striker: &str, non_striker: &str, bowler: &str) -> Result<Value, String> {
        let request = json!({
            "schema_version": 1,
            "state": state,
            "striker": striker,
            "non_striker": non_striker,
            "bowler": bowler
        });
        select_over_json(&request.to_string()).map(|s| serde_json::from_str(&s).unwrap())
    }

    fn ball(state: &Value, ball: Value) -> Result<Value, String> {
        let request = json!({ "schema_version": 1, "state": state, "ball": ball });
        record_ball_json(&request.to_string()).map(|s| serde_json::from_str(&s).unwrap())
    }

    #[test]
    fn test_create_match_json() {
        let response = create();
        assert_eq!(response["summary"]["batting_team"], "Team B");
        assert_eq!(response["summary"]["status"], "INNINGS1");
        assert_eq!(response["state"]["info"]["venue"], "Sagar");
    }

    #[test]
    fn test_load_mutate_store_cycle() {
        let created = create();
        let selected = select(&created["state"], "B1", "B2", "A1").unwrap();
        let after = ball(&selected["state"], json!({"outcome": "runs", "runs": 4})).unwrap();

        assert_eq!(after["summary"]["runs"], 4);
        assert_eq!(after["summary"]["overs"], "0.1");
        assert_eq!(after["entry"]["tag"], "run");
        assert_eq!(after["entry"]["description"], "4 — B1 vs A1: 4 run(s)");
    }

    #[test]
    fn test_error_codes_surface() {
        let created = create();
        let err = ball(&created["state"], json!({"outcome": "runs", "runs": 1})).unwrap_err();
        assert!(err.starts_with("E_SEQUENCE:"), "{err}");

        let selected = select(&created["state"], "B1", "B2", "A1").unwrap();
        let err = ball(&selected["state"], json!({"outcome": "no_ball", "runs_off_bat": 8})).unwrap_err();
        assert!(err.starts_with("E_VALIDATION:"), "{err}");

        let err = select(&created["state"], "B1", "B1", "A1").unwrap_err();
        assert!(err.starts_with("E_VALIDATION:"), "{err}");
    }

    #[test]
    fn test_bowler_repeat_code() {
        let mut current = select(&create()["state"], "B1", "B2", "A1").unwrap();
        for _ in 0..6 {
            current = ball(&current["state"], json!({"outcome": "runs", "runs": 0})).unwrap();
        }
        let err = select(&current["state"], "B2", "B1", "A1").unwrap_err();
        assert!(err.starts_with("E_BOWLER_REPEAT:"), "{err}");
    }

    #[test]
    fn test_schema_version_checked() {
        let request = json!({
            "schema_version": 9,
            "title": "T",
            "overs_limit": 2,
            "team_a": ["A1", "A2"],
            "team_b": ["B1", "B2"]
        });
        let err = create_match_json(&request.to_string()).unwrap_err();
        assert!(err.starts_with("E_SCHEMA:"));
        assert!(create_match_json("{not json").unwrap_err().starts_with("E_JSON:"));
    }

    #[test]
    fn test_feed_and_summary_json() {
        let mut current = select(&create()["state"], "B1", "B2", "A1").unwrap();
        current = ball(&current["state"], json!({"outcome": "wide", "extra_runs": 0})).unwrap();
        current = ball(&current["state"], json!({"outcome": "wicket", "dismissal": "Bowled"})).unwrap();

        let request = json!({ "schema_version": 1, "state": current["state"], "limit": 1 });
        let feed: Value = serde_json::from_str(&feed_json(&request.to_string()).unwrap()).unwrap();
        assert_eq!(feed["entries"].as_array().unwrap().len(), 1);
        assert_eq!(feed["entries"][0]["tag"], "wicket");
        assert!(feed["lines"][0].as_str().unwrap().contains("WICKET! Bowled; B3 comes in"));

        let request = json!({ "schema_version": 1, "state": current["state"] });
        let summary: Value =
            serde_json::from_str(&score_summary_json(&request.to_string()).unwrap()).unwrap();
        assert_eq!(summary["runs"], 1);
        assert_eq!(summary["wickets"], 1);
    }

    #[test]
    fn test_overrides_json() {
        let selected = select(&create()["state"], "B1", "B2", "A1").unwrap();
        let request = json!({ "schema_version": 1, "state": selected["state"] });
        let ended: Value =
            serde_json::from_str(&force_end_over_json(&request.to_string()).unwrap()).unwrap();
        assert_eq!(ended["state"]["over_in_progress"], false);

        let request = json!({ "schema_version": 1, "state": ended["state"] });
        let switched: Value =
            serde_json::from_str(&force_end_innings_json(&request.to_string()).unwrap()).unwrap();
        assert_eq!(switched["summary"]["batting_team"], "Team A");
        assert_eq!(switched["summary"]["target"], 1);
    }

    #[test]
    fn test_match_reaches_completion_through_json() {
        let mut current = select(&create_with_overs(1)["state"], "B1", "B2", "A1").unwrap();
        for _ in 0..6 {
            current = ball(&current["state"], json!({"outcome": "runs", "runs": 1})).unwrap();
        }
        assert_eq!(current["state"]["status"], "INNINGS2");
        assert_eq!(current["summary"]["batting_team"], "Team A");
        assert_eq!(current["summary"]["target"], 7);

        current = select(&current["state"], "A1", "A2", "B1").unwrap();
        for _ in 0..6 {
            current = ball(&current["state"], json!({"outcome": "runs", "runs": 0})).unwrap();
        }
        assert_eq!(current["state"]["status"], "COMPLETED");
        assert_eq!(current["summary"]["status"], "COMPLETED");

        let request = json!({ "schema_version": 1, "state": current["state"], "limit": 1 });
        let feed: Value = serde_json::from_str(&feed_json(&request.to_string()).unwrap()).unwrap();
        assert_eq!(feed["entries"][0]["tag"], "match_completed");
        assert!(feed["lines"][0].as_str().unwrap().contains("Team B won by 6 runs"));

        let err = ball(&current["state"], json!({"outcome": "runs", "runs": 1})).unwrap_err();
        assert!(err.starts_with("E_PRECONDITION:"), "{err}");
    }
}
