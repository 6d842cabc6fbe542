use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use numclass_core::input::InputError;
use serde_json::json;

/// Message returned for every failure that is not the caller's fault
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Trivia provider returned HTTP {0}")]
    UpstreamStatus(u16),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        // Callers only ever see the two fixed payloads below.
        let body = match &self {
            Error::InvalidInput(err) => {
                log::debug!("Rejected request: {err}");
                json!({ "number": "Alphabet", "error": true })
            }
            err => {
                log::error!("{err}");
                json!({ "error": UNEXPECTED_ERROR })
            }
        };

        (status, Json(body)).into_response()
    }
}
