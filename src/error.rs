// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::Envelope;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Too many requests, please try again later.")]
    RateLimited,
    #[error("record store unavailable")]
    StoreUnavailable,
    #[error("text provider failure: {0}")]
    Provider(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),
            // Internal causes are logged, never sent to the client.
            AppError::StoreUnavailable | AppError::Provider(_) => {
                tracing::error!(error = %self, "chat request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };
        (status, Json(Envelope::failure(message))).into_response()
    }
}
