pub mod embed;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;

use prbot_core::config::Config;

/// Build the axum Router with the webhook route and the static landing page.
/// Used by `serve()` and available for integration testing.
pub fn build_router(state: state::AppState) -> Router {
    Router::new()
        .route("/github/payload", post(routes::webhook::github_payload))
        .fallback(embed::static_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the webhook listener.
pub async fn serve(config: Config, port: u16) -> anyhow::Result<()> {
    let state = state::AppState::new(config)?;
    let app = build_router(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("prbot listening on http://localhost:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Start the webhook listener on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so
/// the caller can read the actual port before starting (useful when
/// `port = 0` and the OS picks a free port).
pub async fn serve_on(config: Config, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let state = state::AppState::new(config)?;
    let app = build_router(state);

    tracing::info!("prbot listening on http://localhost:{actual_port}");

    axum::serve(listener, app).await?;
    Ok(())
}
