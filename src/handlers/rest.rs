use axum::extract::{Path, Query, State};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    error::AppError,
    game::{modes, roller::ThreadRngRoller, GameMode, PlayerName, RollOutcome},
    state::SharedState,
};

// ==============================================================================
// === REST API Handlers
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct RollParams {
    pub player: Option<String>,
    pub mode: Option<String>,
    pub opponent: Option<String>,
}

#[instrument(skip(state))]
pub async fn roll_handler(
    State(state): State<SharedState>,
    Query(params): Query<RollParams>,
) -> String {
    play_roll(params, None, &state).await
}

/// Same as `roll_handler`, except the path segment supplies the player name
/// when the `player` query parameter is absent.
#[instrument(skip(state))]
pub async fn roll_with_player_handler(
    State(state): State<SharedState>,
    Path(player): Path<String>,
    Query(params): Query<RollParams>,
) -> String {
    play_roll(params, Some(player), &state).await
}

async fn play_roll(params: RollParams, path_player: Option<String>, state: &SharedState) -> String {
    let player = PlayerName::resolve(params.player.or(path_player));
    let mode = GameMode::from_param(params.mode.as_deref());

    let outcome = {
        let mut roller = ThreadRngRoller::new();
        match mode {
            GameMode::Single => modes::play_single(player, &mut roller),
            GameMode::BestOfThree => modes::play_best_of_three(player, &mut roller),
            GameMode::Battle => {
                let opponent = PlayerName::resolve_opponent(params.opponent);
                modes::play_battle(player, opponent, &mut roller)
            }
        }
    };

    finish_roll(&outcome, state).await;
    outcome.response_text()
}

/// Telemetry first, exactly once per completed evaluation, then the two
/// stores. Each store lock is taken on its own; nothing else runs under it.
async fn finish_roll(outcome: &RollOutcome, state: &SharedState) {
    state.roll_counter.record(outcome);

    let roll_id = Uuid::new_v4();
    tracing::info!(roll_id = %roll_id, "{}", outcome.log_line());

    for (player, roll) in outcome.scores() {
        state.leaderboard.update_if_greater(player, roll).await;
    }
    if state.config.features.logbook {
        state.logbook.append(outcome.log_line()).await;
    }
}

#[instrument(skip(state))]
pub async fn leaderboard_handler(State(state): State<SharedState>) -> String {
    let entries = state.leaderboard.snapshot().await;

    let mut body = String::from("Leaderboard:\n");
    for (player, score) in entries {
        body.push_str(&format!("{player}: {score}\n"));
    }
    body
}

#[instrument(skip(state))]
pub async fn view_logs_handler(State(state): State<SharedState>) -> Result<String, AppError> {
    if !state.config.features.logbook {
        return Err(AppError::FeatureDisabled("logbook"));
    }

    let lines = state.logbook.read_all().await;
    let mut body = String::new();
    for line in lines {
        body.push_str(&line);
        body.push('\n');
    }
    Ok(body)
}

#[instrument(skip(state))]
pub async fn reset_metrics_handler(State(state): State<SharedState>) -> String {
    state.leaderboard.reset().await;
    tracing::info!("leaderboard reset");

    "Metrics have been reset!\n".to_string()
}
