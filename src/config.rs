//! Game settings chosen before a game starts
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::BoardNumber;
use crate::error::ConfigError;

/// elapsed-time units per second of time limit; the elapsed counter advances every 10 ms
pub const TIME_UNITS_PER_SECOND: u16 = 100;

/// Time limit per player
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// no time limit
    #[default]
    Easy,
    /// 90 seconds each
    Medium,
    /// 45 seconds each
    Hard,
}

impl Difficulty {
    /// seconds each player may use, or None when unlimited
    pub fn seconds(&self) -> Option<u16> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(90),
            Difficulty::Hard => Some(45),
        }
    }

    /// the elapsed-time count at which a player runs out of time
    pub fn time_limit(&self) -> Option<u16> {
        self.seconds().map(|s| s * TIME_UNITS_PER_SECOND)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Settings the engine starts with. Everything here can also be changed from
/// the setup screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// layout selected when a new game is set up
    pub board: BoardNumber,
    #[allow(missing_docs)]
    pub difficulty: Difficulty,
    /// player 2 sits out when set
    pub single_player: bool,
    /// start with audio muted
    pub muted: bool,
    /// seed for the dice until the first roll reseeds from the clock
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board: BoardNumber::One,
            difficulty: Difficulty::Easy,
            single_player: true,
            muted: false,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Loads settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
