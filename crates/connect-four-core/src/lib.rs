//! Connect Four Core: shared abstractions.
//!
//! This crate defines the traits and types the game context and its
//! infrastructure adapters depend on. It contains no game rules.

pub mod command;
pub mod error;
pub mod messaging;
pub mod repository;
pub mod rng;
