use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable entity: {0}")]
    Unprocessable(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed text sent to clients; the detail string stays in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "Bad Request",
            AppError::NotFound(_) => "Resource Not Found",
            AppError::Unprocessable(_) => "Unprocessable Entity",
            AppError::MethodNotAllowed(_) => "Method Not Allowed",
            AppError::Database(_) => "Internal Server Error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref e) => tracing::error!("Database error: {:?}", e),
            ref other => tracing::debug!("Request failed: {}", other),
        }

        let status = self.status();
        let body = Json(ErrorResponse::new(status.as_u16(), self.public_message()));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Collapses every failure of a step into the single error kind an endpoint reports.
pub trait ResultExt<T> {
    fn or_bad_request(self) -> Result<T>;
    fn or_not_found(self) -> Result<T>;
    fn or_unprocessable(self) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::fmt::Display,
{
    fn or_bad_request(self) -> Result<T> {
        self.map_err(|e| AppError::BadRequest(e.to_string()))
    }

    fn or_not_found(self) -> Result<T> {
        self.map_err(|e| AppError::NotFound(e.to_string()))
    }

    fn or_unprocessable(self) -> Result<T> {
        self.map_err(|e| AppError::Unprocessable(e.to_string()))
    }
}
