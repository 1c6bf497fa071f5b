//! Connect Four bot: game session bounded context.
//!
//! Responsible for the session state machine (waiting, inviting, playing),
//! command authorization, the board rules, and the computer opponent.

pub mod application;
pub mod domain;
