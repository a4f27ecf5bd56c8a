use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServerError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ServerError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let message = match self {
            ServerError::Unauthorized => "unauthorized".to_string(),
            ServerError::Upstream(msg) | ServerError::Configuration(msg) => msg,
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<reqwest::Error> for ServerError {
    fn from(err: reqwest::Error) -> Self {
        ServerError::Upstream(format!("Backfill request failed: {}", err))
    }
}
