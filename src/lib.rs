//! # ccg-session
//!
//! Authoritative session engine for two-player turn-based card games.
//!
//! A host feeds one [`GameAction`] at a time into
//! [`Session::handle_action`]; the session validates it against the current
//! turn and phase, mutates its state and returns the events the action
//! produced, ready to be forwarded to clients.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: Cards, units and players are supplied by the game
//!    through the traits in [`rules`]. The session never interprets card
//!    content.
//!
//! 2. **Event-Sourced**: Every state change is recorded in the [`EventLog`].
//!    An applied action returns exactly the events it appended.
//!
//! 3. **No Partial Mutation**: All preconditions are checked before the
//!    first write. A rejected action leaves the session untouched and says
//!    why, via [`Rejection`].
//!
//! ## Turn Structure
//!
//! The active player starts in the first main phase. Declaring attackers
//! moves to combat; the defender then declares blockers or passes, which
//! resolves combat and moves to the second main phase. Passing in a main
//! phase ends the turn.
//!
//! Combat results and victory are left to pluggable
//! [`CombatResolver`] and [`WinCondition`] strategies.
//!
//! ## Modules
//!
//! - `core`: Entity handles, player seats, format, actions
//! - `zones`: Per-player board zones
//! - `events`: Game events and the event log
//! - `combat`: Attacker and blocker declarations
//! - `rules`: Collaborator traits and rules strategies
//! - `session`: Phase controller and the session itself
//! - `games`: Reference game implementation

pub mod core;
pub mod error;
pub mod zones;
pub mod events;
pub mod combat;
pub mod rules;
pub mod session;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    EntityId, PlayerId, PlayerMap,
    GameFormat, PLAYER_COUNT,
    ActionKind, ActionType, GameAction,
    Resource,
};

pub use crate::error::{FormatError, Result, SessionError};

pub use crate::zones::{Board, ZoneView};

pub use crate::events::{EventKind, EventLog, GameEvent, Watermark};

pub use crate::combat::CombatState;

pub use crate::rules::{
    Card, Entity, Player,
    CombatContext, CombatResolver, WinCondition,
    NoCombatDamage, Undecided,
};

pub use crate::session::{Outcome, Phase, PhaseController, Rejection, Session, Table};
