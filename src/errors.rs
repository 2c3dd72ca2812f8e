// src/errors.rs

use astra::Response;
use crate::domain::ledger::LedgerError;
use crate::forms::FieldErrors;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB).
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// Form input rejected before any mutation was attempted.
    #[error("Validation failed: {}", .0.summary())]
    Validation(FieldErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl From<LedgerError> for ServerError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::RoomNotFree { .. } => ServerError::Conflict(err.to_string()),
            other => ServerError::BadRequest(other.to_string()),
        }
    }
}

impl From<rusqlite::Error> for ServerError {
    fn from(err: rusqlite::Error) -> Self {
        ServerError::DbError(err.to_string())
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::DbError(format!("document encoding failed: {err}"))
    }
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) | ServerError::Validation(_) => 400,
            ServerError::Conflict(_) => 409,
            ServerError::DbError(_) | ServerError::XlsxError(_) | ServerError::InternalError => 500,
        }
    }
}
