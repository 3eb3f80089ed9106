pub mod config;
pub mod error;
pub mod game;
pub mod handlers;
pub mod state;
pub mod telemetry;

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use config::Config;
use handlers::rest;
use state::{AppState, LeaderboardStore, LogStore};
use std::sync::Arc;
use telemetry::MetricsRegistry;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

pub fn create_app(config: Config) -> Router {
    let mut registry = MetricsRegistry::default();
    let roll_counter = registry
        .roll_counter("dice.rolls", "The number of dice rolls by value")
        .expect("Failed to register the dice roll counter");

    let state = Arc::new(AppState {
        leaderboard: LeaderboardStore::default(),
        logbook: LogStore::default(),
        roll_counter,
        config: Arc::new(config),
    });

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/rolldice", get(rest::roll_handler))
        .route("/rolldice/{player}", get(rest::roll_with_player_handler))
        .route("/leaderboard", get(rest::leaderboard_handler))
        .route("/logs", get(rest::view_logs_handler))
        .route("/metrics/reset", post(rest::reset_metrics_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default().include_headers(true)))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FeatureConfig, LoggingConfig, ServerConfig};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tower::ServiceExt;

    fn test_config(logbook: bool) -> Config {
        Config {
            server: ServerConfig { addr: "0.0.0.0:0".to_string() },
            logging: LoggingConfig { level: "info".to_string() },
            features: FeatureConfig { logbook },
        }
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn get(app: &Router, uri: &str) -> Response {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_route() {
        let app = create_app(test_config(true));

        let response = get(&app, "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "OK");
    }

    #[tokio::test]
    async fn test_roll_then_leaderboard_round_trip() {
        let app = create_app(test_config(true));

        let response = get(&app, "/rolldice?player=Alice").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        let first_line = body.lines().next().unwrap();
        let roll: u8 = first_line
            .strip_prefix("Hi Alice, your dice roll is: ")
            .unwrap()
            .parse()
            .unwrap();
        assert!((1..=6).contains(&roll));

        let leaderboard = body_string(get(&app, "/leaderboard").await).await;
        assert!(leaderboard.starts_with("Leaderboard:\n"));
        assert!(leaderboard.contains(&format!("Alice: {roll}\n")));
    }

    #[tokio::test]
    async fn test_battle_round_trip() {
        let app = create_app(test_config(true));

        let body =
            body_string(get(&app, "/rolldice?player=Alice&mode=battle&opponent=Bob").await).await;

        assert!(body.starts_with("Alice vs Bob: "));
        assert!(body.ends_with(" wins 🎲\n"));
    }

    #[tokio::test]
    async fn test_reset_round_trip() {
        let app = create_app(test_config(true));
        let _ = get(&app, "/rolldice?player=Alice").await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/metrics/reset")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "Metrics have been reset!\n");

        let leaderboard = body_string(get(&app, "/leaderboard").await).await;
        assert_eq!(leaderboard, "Leaderboard:\n");
    }

    #[tokio::test]
    async fn test_logs_route_respects_the_feature_toggle() {
        let app = create_app(test_config(true));
        let _ = get(&app, "/rolldice?player=Alice").await;
        let response = get(&app, "/logs").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("Alice rolled a "));

        let app = create_app(test_config(false));
        let response = get(&app, "/logs").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
