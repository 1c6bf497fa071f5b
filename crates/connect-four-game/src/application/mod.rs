//! Application layer for the game session context.

pub mod controller;
pub mod game_creator;
pub mod game_handler;
pub mod invitation_handler;
pub mod outbox;
pub mod query_handlers;
