use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{Result, ScoringError};

/// Minimum roster size: a batting pair must be able to take the crease.
pub const MIN_ROSTER_SIZE: usize = 2;

/// Player identifier (the name as entered on the team sheet).
///
/// Always trimmed and non-empty. Stats, selections and the batting order are
/// all keyed by this type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ScoringError::Validation("player name must not be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerId {
    type Error = ScoringError;

    fn try_from(value: String) -> Result<Self> {
        PlayerId::new(value)
    }
}

impl From<PlayerId> for String {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered team sheet. Order doubles as the default batting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PlayerId>", into = "Vec<PlayerId>")]
pub struct Roster(Vec<PlayerId>);

impl Roster {
    pub fn new(players: Vec<PlayerId>) -> Result<Self> {
        if players.len() < MIN_ROSTER_SIZE {
            return Err(ScoringError::Validation(format!(
                "roster needs at least {} players, found {}",
                MIN_ROSTER_SIZE,
                players.len()
            )));
        }

        let mut seen = HashSet::new();
        for player in &players {
            if !seen.insert(player) {
                return Err(ScoringError::Validation(format!(
                    "duplicate player in roster: {}",
                    player
                )));
            }
        }

        Ok(Self(players))
    }

    /// Build a roster from raw names, skipping blank lines the way the team
    /// sheet text area is read.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let players = names
            .into_iter()
            .filter(|n| !n.as_ref().trim().is_empty())
            .map(PlayerId::new)
            .collect::<Result<Vec<_>>>()?;
        Self::new(players)
    }

    /// Parse one player per line.
    pub fn from_lines(text: &str) -> Result<Self> {
        Self::from_names(text.lines())
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.0
    }

    pub fn contains(&self, player: &PlayerId) -> bool {
        self.0.contains(player)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<PlayerId>> for Roster {
    type Error = ScoringError;

    fn try_from(value: Vec<PlayerId>) -> Result<Self> {
        Roster::new(value)
    }
}

impl From<Roster> for Vec<PlayerId> {
    fn from(roster: Roster) -> Self {
        roster.0
    }
}
