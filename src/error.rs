use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeisterError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response from the API (HTTP {0})")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("{0}")]
    Api(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Authentication key is required\nHint: export MEISTERTASK='authentication-key-here'")]
    MissingToken,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl MeisterError {
    pub fn to_error_code(&self) -> &'static str {
        match self {
            MeisterError::Http(_) | MeisterError::UnexpectedStatus(_) => "TRANSPORT_ERROR",
            MeisterError::Api(_) => "API_ERROR",
            MeisterError::NotFound(_) => "NOT_FOUND",
            MeisterError::InvalidInput(_) => "INVALID_INPUT",
            MeisterError::MissingToken => "MISSING_TOKEN",
            _ => "INTERNAL_ERROR",
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            code: self.to_error_code().to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MeisterError>;
