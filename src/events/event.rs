//! Game event types.
//!
//! Events are the caller-visible record of every state change. They are
//! immutable once emitted and serialize in the same `{type, params}` shape
//! as actions, so clients can replay them directly.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{PlayerId, Resource};
use crate::session::Phase;

/// Something that happened during a session.
///
/// Entity and card payloads are the collaborators' serialized forms
/// (`Entity::to_json`, `Card::to_json`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "params",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum GameEvent {
    /// Attackers were declared.
    Attack { attacking: Vec<Value> },

    /// A new turn began.
    TurnStart { player: PlayerId, turn_number: u32 },

    PhaseChange { from: Phase, to: Phase },

    /// A resource was added to a player's pool.
    PlayResource { player: PlayerId, played: Resource },

    Mulligan { player: PlayerId },

    /// A card left a player's hand. Its effect events follow.
    PlayCard { player: PlayerId, played: Value },

    /// Blockers were declared, as `[attacker, blocker]` pairs.
    Block { blocks: Vec<(Value, Value)> },

    /// Game-specific event emitted by a collaborator or a rules strategy.
    Custom { name: String, payload: Value },
}

impl GameEvent {
    /// Create a game-specific event.
    pub fn custom(name: impl Into<String>, payload: Value) -> Self {
        GameEvent::Custom {
            name: name.into(),
            payload,
        }
    }

    /// The parameterless discriminant.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::Attack { .. } => EventKind::Attack,
            GameEvent::TurnStart { .. } => EventKind::TurnStart,
            GameEvent::PhaseChange { .. } => EventKind::PhaseChange,
            GameEvent::PlayResource { .. } => EventKind::PlayResource,
            GameEvent::Mulligan { .. } => EventKind::Mulligan,
            GameEvent::PlayCard { .. } => EventKind::PlayCard,
            GameEvent::Block { .. } => EventKind::Block,
            GameEvent::Custom { .. } => EventKind::Custom,
        }
    }
}

/// Event kind without parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Attack,
    TurnStart,
    PhaseChange,
    PlayResource,
    Mulligan,
    PlayCard,
    Block,
    Custom,
}
