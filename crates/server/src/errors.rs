use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use supportrag::{ErrorKind, PipelineError};
use tracing::error;

/// A custom error type for the server application.
///
/// Every variant is rendered as a structured JSON body of the form
/// `{"error": {"kind": "...", "message": "..."}}` with a matching status code.
#[derive(Debug)]
pub enum AppError {
    /// Errors originating from the answer pipeline.
    Pipeline(PipelineError),
    /// The inbound request body could not be read as a query.
    Input(String),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

/// Conversion from `PipelineError` to `AppError`.
impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        AppError::Pipeline(err)
    }
}

/// Conversion from `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, kind, message) = match self {
            AppError::Pipeline(err) => {
                // Log the original error for debugging purposes
                error!("PipelineError: {:?}", err);
                let kind = err.kind();
                let status = match kind {
                    ErrorKind::UpstreamTransport | ErrorKind::UpstreamResponse => {
                        StatusCode::BAD_GATEWAY
                    }
                    ErrorKind::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
                };
                let message = match kind {
                    ErrorKind::Configuration => "Server is not configured correctly.".to_string(),
                    _ => err.to_string(),
                };
                (status, kind.as_str(), message)
            }
            AppError::Input(msg) => {
                error!("Invalid request: {}", msg);
                (StatusCode::BAD_REQUEST, "input", msg)
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal",
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "kind": kind,
                "message": message,
            }
        }));

        (status_code, body).into_response()
    }
}
