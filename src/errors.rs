//! Error taxonomy for the puzzle API, mapped onto HTTP responses.
//!
//! User-correctable problems (bad submission, submit before generate) come
//! back as 400 with a JSON `error` message; generation failures are the
//! server's fault and come back as 500, logged at error level.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::generator::GenerateError;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("Invalid answer. Must provide a whole number.")]
    InvalidAnswerFormat,
    #[error("No puzzle available. Please generate a puzzle first.")]
    NoActivePuzzle,
    #[error("Failed to generate puzzle: {0}")]
    Generation(#[from] GenerateError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for PuzzleError {
    fn into_response(self) -> Response {
        let status = match self {
            PuzzleError::InvalidAnswerFormat | PuzzleError::NoActivePuzzle => {
                StatusCode::BAD_REQUEST
            }
            PuzzleError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(target: "puzzle", error = %self, "Request failed");
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
