use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("the {0} feature is disabled")]
    FeatureDisabled(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::FeatureDisabled(feature) => {
                tracing::debug!(feature, "request for disabled feature");
                (StatusCode::NOT_FOUND, format!("the {feature} feature is disabled"))
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
