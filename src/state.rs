use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::game::PlayerName;
use crate::telemetry::RollCounter;

/// Best roll ever seen per player. One exclusive lock; every operation is a
/// single short critical section, never held across the logbook lock,
/// randomness or formatting.
#[derive(Debug, Default)]
pub struct LeaderboardStore {
    entries: Mutex<HashMap<PlayerName, u8>>,
}

impl LeaderboardStore {
    /// Records `roll` for `player` iff it strictly beats the stored best.
    /// A player with no entry behaves as if their best were 0.
    pub async fn update_if_greater(&self, player: &PlayerName, roll: u8) {
        let mut entries = self.entries.lock().await;
        let current = entries.get(player).copied().unwrap_or(0);
        if roll > current {
            entries.insert(player.clone(), roll);
        }
    }

    /// Read-consistent copy of all entries. Iteration order is unspecified.
    pub async fn snapshot(&self) -> Vec<(PlayerName, u8)> {
        let entries = self.entries.lock().await;
        entries.iter().map(|(player, best)| (player.clone(), *best)).collect()
    }

    pub async fn reset(&self) {
        self.entries.lock().await.clear();
    }
}

/// Append-only record of formatted roll events, in arrival order. Guarded
/// independently from the leaderboard; the two locks are never nested, so an
/// observer may see one store updated before the other.
#[derive(Debug, Default)]
pub struct LogStore {
    lines: Mutex<Vec<String>>,
}

impl LogStore {
    pub async fn append(&self, line: String) {
        self.lines.lock().await.push(line);
    }

    pub async fn read_all(&self) -> Vec<String> {
        self.lines.lock().await.clone()
    }
}

pub struct AppState {
    pub leaderboard: LeaderboardStore,
    pub logbook: LogStore,
    pub roll_counter: RollCounter,
    pub config: Arc<Config>,
}

pub type SharedState = Arc<AppState>;
