use serde::{Deserialize, Serialize};
use std::fmt;

pub const ANONYMOUS: &str = "Anonymous";
pub const ANONYMOUS_OPPONENT: &str = "Anonymous Opponent";

/// Display name of a roll participant. Any string is accepted; names that
/// differ only by case are distinct leaderboard keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    /// Missing or empty input becomes the anonymous sentinel.
    pub fn resolve(raw: Option<String>) -> Self {
        Self::or_fallback(raw, ANONYMOUS)
    }

    pub fn resolve_opponent(raw: Option<String>) -> Self {
        Self::or_fallback(raw, ANONYMOUS_OPPONENT)
    }

    fn or_fallback(raw: Option<String>, fallback: &str) -> Self {
        match raw {
            Some(name) if !name.is_empty() => Self(name),
            _ => Self(fallback.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Single,
    BestOfThree,
    Battle,
}

impl GameMode {
    /// Unrecognized or absent mode parameters fall back to a single roll.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("bestof3") => GameMode::BestOfThree,
            Some("battle") => GameMode::Battle,
            _ => GameMode::Single,
        }
    }
}

/// Annotation on the extreme faces of a single roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollEvent {
    Jackpot,
    CriticalFail,
}

impl RollEvent {
    pub fn describe(&self, player: &PlayerName) -> String {
        match self {
            RollEvent::Jackpot => format!("{player} hit the jackpot! 🎉"),
            RollEvent::CriticalFail => format!("{player} rolled a critical fail! 😢"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player,
    Opponent,
    Tie,
}
