use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use prbot_core::BotError;

// ---------------------------------------------------------------------------
// Internal sentinel for explicit 400 Bad Request errors
// ---------------------------------------------------------------------------

/// Private sentinel error type used to carry an explicit HTTP 400 through
/// the `anyhow::Error` chain without touching the `BotError` enum.
#[derive(Debug)]
struct PayloadError(String);

impl std::fmt::Display for PayloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for PayloadError {}

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Construct a 400 Bad Request error with the given message.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self(PayloadError(msg.into()).into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(p) = self.0.downcast_ref::<PayloadError>() {
            let body = serde_json::json!({ "error": p.0.clone() });
            return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
        }

        let status = if let Some(e) = self.0.downcast_ref::<BotError>() {
            match e {
                // Dispatch and configuration faults stay server errors.
                BotError::UnrecognizedEvent
                | BotError::MissingNumber
                | BotError::UnknownRule(_) => StatusCode::INTERNAL_SERVER_ERROR,
                // Faults of the hosting platform surface as 502 rather than
                // crashing the handler.
                BotError::RemoteStatus { .. } | BotError::Http(_) | BotError::Json(_) => {
                    StatusCode::BAD_GATEWAY
                }
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
