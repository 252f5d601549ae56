// src/routes/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::leads::LeadError;

/// Anything a handler cannot turn into a normal page or fragment.
/// Clients only ever see a bare 500; details go to the log.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Lead(#[from] LeadError),

    #[error("template error: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Request failed: {:?}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        )
            .into_response()
    }
}
