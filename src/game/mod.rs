pub mod modes;
pub mod roller;
pub mod types;

pub use modes::{play_battle, play_best_of_three, play_single, RollOutcome};
pub use types::{GameMode, PlayerName, RollEvent, Winner};
