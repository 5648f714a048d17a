use thiserror::Error;

/// Rejection reasons for scoring operations.
///
/// A rejected operation never records a ball, a selection or a statistic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// Malformed or out-of-range input (runs outside 0..=6, unknown player, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation attempted out of the required order
    #[error("Sequence error: {0}")]
    Sequence(String),

    /// Same bowler selected for consecutive overs
    #[error("Bowler {bowler} bowled the previous over")]
    BowlerRepeat { bowler: String },

    /// Missing striker/bowler, or match already completed
    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ScoringError {
    /// Stable code prefix used by the JSON API.
    pub fn error_code(&self) -> &'static str {
        match self {
            ScoringError::Validation(_) => error_codes::VALIDATION,
            ScoringError::Sequence(_) => error_codes::SEQUENCE,
            ScoringError::BowlerRepeat { .. } => error_codes::BOWLER_REPEAT,
            ScoringError::Precondition(_) => error_codes::PRECONDITION,
            ScoringError::NotFound(_) => error_codes::NOT_FOUND,
            ScoringError::Serialization(_) => error_codes::JSON,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ScoringError::Validation(_))
    }
}

pub mod error_codes {
    pub const VALIDATION: &str = "E_VALIDATION";
    pub const SEQUENCE: &str = "E_SEQUENCE";
    pub const BOWLER_REPEAT: &str = "E_BOWLER_REPEAT";
    pub const PRECONDITION: &str = "E_PRECONDITION";
    pub const NOT_FOUND: &str = "E_NOT_FOUND";
    pub const JSON: &str = "E_JSON";
    pub const SCHEMA: &str = "E_SCHEMA";
}

impl From<serde_json::Error> for ScoringError {
    fn from(err: serde_json::Error) -> Self {
        ScoringError::Serialization(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ScoringError {
    fn from(errs: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errs
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let codes: Vec<&str> = errors.iter().map(|e| e.code.as_ref()).collect();
                format!("{} ({})", field, codes.join(", "))
            })
            .collect();
        fields.sort();
        ScoringError::Validation(format!("invalid fields: {}", fields.join("; ")))
    }
}

pub type Result<T> = std::result::Result<T, ScoringError>;
