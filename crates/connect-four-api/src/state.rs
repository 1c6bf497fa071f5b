//! Shared application state.

use std::sync::Arc;

use connect_four_game::application::controller::SessionController;

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The session controller.
    pub controller: Arc<SessionController>,
    /// Storage key every inbound message is handled against.
    pub context: Arc<str>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(controller: Arc<SessionController>, context: impl Into<Arc<str>>) -> Self {
        Self {
            controller,
            context: context.into(),
        }
    }
}
