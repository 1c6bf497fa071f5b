//! Route modules.

pub mod bots;
pub mod health;
