use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use eldview::{session, trip};
use serde::Serialize;
use thiserror::Error;

use crate::config;

pub const GENERIC_PROVIDER_ERROR: &str = "An error occurred";

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] trip::Error),
    /// The trip provider refused or failed. `status` is the provider's own
    /// HTTP status when it answered at all.
    #[error("{message}")]
    Provider { status: Option<u16>, message: String },
    #[error(transparent)]
    Configuration(#[from] config::Error),
    #[error(transparent)]
    Session(#[from] session::Error),
    #[error("No trip found for session {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
    pub kind: &'static str,
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Provider { .. } => "provider",
            Self::Configuration(_) => "configuration",
            Self::Session(session::Error::Busy) => "busy",
            Self::Session(_) => "session",
            Self::NotFound(_) => "not_found",
            Self::Io(_) => "io",
            Self::HttpClient(_) => "http_client",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Provider { status, .. } => status
                .and_then(|code| StatusCode::from_u16(code).ok())
                .filter(StatusCode::is_client_error)
                .unwrap_or(StatusCode::BAD_GATEWAY),
            Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Session(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Io(_) | Self::HttpClient(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
            kind: self.kind(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
