//! Game resolution status

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Error;

/// Resolution state of a dispute game, as reported by the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// The game is ongoing; claims may still be made and countered.
    InProgress,
    /// Resolved in favor of the challenger: the root claim was wrong.
    ChallengerWins,
    /// Resolved in favor of the defender: the root claim stands.
    DefenderWins,
}

impl GameStatus {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl TryFrom<u8> for GameStatus {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        match value {
            0 => Ok(GameStatus::InProgress),
            1 => Ok(GameStatus::ChallengerWins),
            2 => Ok(GameStatus::DefenderWins),
            other => Err(Error::UnknownGameStatus(other)),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in_progress"),
            GameStatus::ChallengerWins => write!(f, "challenger_wins"),
            GameStatus::DefenderWins => write!(f, "defender_wins"),
        }
    }
}
