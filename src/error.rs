use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error as ThisError;

/// Message prefix carried by every database-originated error envelope.
pub const DB_MESSAGE_PREFIX: &str = "[MongoBD] ";

/// Driver text reported when a lookup matches no document.
const NO_DOCUMENTS: &str = "mongo: no documents in result";

#[derive(Debug, ThisError)]
pub enum TrainerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("No trainer named {name:?}")]
    NotFound { name: String },

    #[error("binding json error")]
    InvalidBody,
}

impl TrainerError {
    pub fn status(&self) -> StatusCode {
        match self {
            TrainerError::NotFound { .. } | TrainerError::InvalidBody => StatusCode::BAD_REQUEST,
            TrainerError::Database(_) | TrainerError::Io(_) | TrainerError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Caller-facing message placed in the envelope.
    pub fn message(&self) -> String {
        match self {
            TrainerError::Database(e) => format!("{DB_MESSAGE_PREFIX}{e}"),
            TrainerError::NotFound { .. } => format!("{DB_MESSAGE_PREFIX}{NO_DOCUMENTS}"),
            TrainerError::InvalidBody => "binding json error".to_string(),
            TrainerError::Io(_) | TrainerError::Config(_) => {
                "An internal server error occurred.".to_string()
            }
        }
    }
}

impl IntoResponse for TrainerError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = ApiErrorBody {
            code: status.as_u16(),
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Error envelope: `{code, message}` with `code` echoing the HTTP status.
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: u16,
    pub message: String,
}
