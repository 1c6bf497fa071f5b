//! Domain layer for the game session context.

pub mod board;
pub mod commands;
pub mod messages;
pub mod permissions;
pub mod rejection;
pub mod session;
pub mod strategy;
