use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration error: {0} not set")]
    MissingEnv(&'static str),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Provider error: {message}")]
    ProviderUnavailable {
        status: Option<u16>,
        message: String,
    },

    #[error("The provider returned an empty response.")]
    EmptyProviderResponse,

    #[error("The provider returned invalid JSON. Please try again.")]
    MalformedProviderJson,

    #[error("The provider response is missing 'mood' or 'playlist' data: {0}")]
    InvalidProviderSchema(String),

    #[error("The provider did not suggest any usable tracks. Please try again.")]
    NoValidTracks,

    /// A failed call to the playlist service, carrying the user-facing message.
    #[error("{0}")]
    Service(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl AppError {
    /// HTTP status used when this error crosses the request boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::ProviderUnavailable {
                status: Some(code), ..
            } => StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed ({}): {}", status, self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
