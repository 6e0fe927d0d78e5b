use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Request-level failures surfaced to the caller as 4xx with a short
/// human-readable message. Storage failures are the only 5xx source.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    MissingField(String),

    #[error("Invalid date format. Use YYYY-MM-DD.")]
    InvalidDateFormat,

    #[error("Invalid day.")]
    InvalidDay,

    #[error("Bus not found.")]
    BusNotFound,

    #[error("Bus does not operate on this day.")]
    BusNotScheduled,

    #[error("Not enough seats available.")]
    InsufficientCapacity,

    #[error("{0}")]
    NoMatch(String),

    #[error("Database error")]
    Database(#[from] DbErr),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField(_)
            | AppError::InvalidDateFormat
            | AppError::InvalidDay
            | AppError::BusNotScheduled
            | AppError::InsufficientCapacity => StatusCode::BAD_REQUEST,
            AppError::BusNotFound | AppError::NoMatch(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Database(ref e) = self {
            tracing::error!("Database error: {}", e);
        }

        let status = self.status_code();
        let message = match self {
            // Never leak storage internals to the client
            AppError::Database(_) => "Internal server error.".to_string(),
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
