//! Bot endpoint: one inbound chat message per request.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use connect_four_core::messaging::OutboundMessage;
use connect_four_game::domain::commands::InboundMessage;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// The chat message as delivered by the transport. Other fields are
/// ignored.
#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    /// Message text.
    pub content: String,
    /// Identity of the sender.
    pub sender_email: String,
}

/// Request body for POST /bots/connect_four.
#[derive(Debug, Deserialize)]
pub struct BotRequest {
    /// The inbound message.
    pub message: ChatMessage,
}

/// Response body: every message the bot delivered, in order.
#[derive(Debug, Serialize)]
pub struct BotResponse {
    /// Delivered messages.
    pub messages: Vec<OutboundMessage>,
}

/// POST /bots/connect_four
#[instrument(skip(state, request), fields(sender = %request.message.sender_email))]
async fn connect_four(
    State(state): State<AppState>,
    Json(request): Json<BotRequest>,
) -> Result<Json<BotResponse>, ApiError> {
    let message = InboundMessage::new(
        &*state.context,
        request.message.sender_email,
        request.message.content,
    );

    info!(correlation_id = %message.correlation_id, "handling inbound message");

    let messages = state.controller.handle(&message).await?;

    Ok(Json(BotResponse { messages }))
}

/// Returns the router for bot endpoints.
pub fn router() -> Router<AppState> {
    Router::new().route("/connect_four", post(connect_four))
}
