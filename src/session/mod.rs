//! Session: the authoritative state machine for one game.
//!
//! Hosts feed [`GameAction`](crate::core::GameAction)s into
//! [`Session::handle_action`] one at a time and forward the returned events
//! to clients. Every action is validated before anything is mutated, so a
//! [`Rejection`] leaves the session exactly as it was.
//!
//! ## Key Types
//!
//! - `Session`: owns players, board, phases, combat and log
//! - `PhaseController`: phase and turn bookkeeping
//! - `Outcome` / `Rejection`: result of one action
//! - `Table`: what a card may touch while it resolves

mod game;
mod outcome;
mod phase;
mod table;

pub use game::Session;
pub use outcome::{Outcome, Rejection};
pub use phase::{Phase, PhaseController};
pub use table::Table;
