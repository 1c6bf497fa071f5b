//! Connect Four bot server.
//!
//! Exposes the session controller over HTTP the way a bot server would:
//! one `POST` per inbound chat message, answered with the messages the bot
//! delivered in response.

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod delivery;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

/// Builds the full application router.
pub fn app(state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/bots", routes::bots::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
