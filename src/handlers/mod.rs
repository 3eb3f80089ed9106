pub mod rest;

pub use rest::{
    leaderboard_handler, reset_metrics_handler, roll_handler, roll_with_player_handler,
    view_logs_handler,
};
