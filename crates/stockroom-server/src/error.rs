use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use stockroom_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A path segment that cannot parse as a record id addresses nothing.
    #[error("{0:?} does not address any record")]
    InvalidId(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::Engine(EngineError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Engine(EngineError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Engine(EngineError::EmptyUpdate) => StatusCode::BAD_REQUEST,
            Self::Engine(EngineError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::InvalidId(_) => StatusCode::NOT_FOUND,
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
