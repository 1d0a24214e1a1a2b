//! Rules seams between the session and game implementations.
//!
//! Games implement the collaborator traits in [`participant`] to supply
//! cards, units and players, and may plug in the strategies in [`engine`]
//! to define combat results and victory.
//!
//! The session calls into these traits but never interprets
//! game-specific concepts directly.

pub mod engine;
pub mod participant;

pub use engine::{CombatContext, CombatResolver, NoCombatDamage, Undecided, WinCondition};
pub use participant::{Card, Entity, Player};
