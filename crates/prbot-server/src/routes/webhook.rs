use axum::body::Bytes;
use axum::extract::State;

use crate::error::AppError;
use crate::state::AppState;
use prbot_core::event::Event;

/// POST /github/payload — webhook receiver for GitHub pull-request events.
///
/// Parsing is tolerant: malformed JSON, an empty body, and an empty JSON
/// object all count as a missing payload and get a 400 instead of a hard
/// parse error.
pub async fn github_payload(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<&'static str, AppError> {
    let event = match serde_json::from_slice::<Event>(&body) {
        Ok(event) if !event.is_empty() => event,
        _ => return Err(AppError::bad_request("no payload")),
    };

    let outcome = app.dispatcher.dispatch(&event).await?;
    tracing::info!(?outcome, "handled webhook delivery");

    Ok("beep boop")
}
