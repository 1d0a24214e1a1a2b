//! Collaborator contracts: players, cards and board entities.
//!
//! The session never defines card content. Games supply these types and the
//! session calls into them at well-defined points:
//!
//! - `Player::query_hand` / `Player::query_cards` resolve the query strings
//!   carried by actions
//! - `Player::play_card` runs a card's effects against a [`Table`]
//! - `Entity::refresh` is called for every unit of the player whose turn
//!   starts

use serde_json::Value;

use crate::core::{EntityId, PlayerId, Resource};
use crate::session::Table;
use crate::zones::ZoneView;

/// A card in a player's hand.
pub trait Card {
    /// Serialized form carried by `playCard` events.
    fn to_json(&self) -> Value;
}

/// A unit on the board.
///
/// `Display` is used for player summaries.
pub trait Entity: std::fmt::Display {
    /// The seat that owns this entity. Fixed for the entity's lifetime.
    fn owner(&self) -> PlayerId;

    /// Called once at the start of each of the owner's turns.
    fn refresh(&mut self);

    /// Called when the entity joins a session board, with its handle.
    fn set_parent(&mut self, _id: EntityId) {}

    /// Serialized form carried by `attack` and `block` events.
    fn to_json(&self) -> Value;
}

/// A seated player.
///
/// The session owns one `Player` per seat for the lifetime of the game and
/// drives it through these hooks.
pub trait Player {
    type Card: Card;
    type Entity: Entity;

    /// The seat this player occupies.
    fn player_number(&self) -> PlayerId;

    fn life(&self) -> i64;

    /// Whether a resource may be played right now.
    fn can_play_resource(&self) -> bool;

    fn play_resource(&mut self, resource: Resource);

    /// Find a card in hand matching `query`. Must not mutate the hand; the
    /// card leaves the hand in `play_card`.
    fn query_hand(&self, query: &str) -> Option<Self::Card>;

    /// Play `card`, putting units on the board and emitting effect events
    /// through `table`.
    fn play_card(&mut self, card: Self::Card, table: &mut Table<'_, Self::Entity>);

    /// Pick the unit among `candidates` matching `query`.
    ///
    /// Ids not present in `candidates` are ignored by the session.
    fn query_cards(&self, query: &str, candidates: ZoneView<'_, Self::Entity>) -> Option<EntityId>;

    fn draw_cards(&mut self, count: usize);

    /// Called when this player's turn begins.
    fn start_turn(&mut self);

    /// Human-readable digest of private state (hand, resources).
    fn summarize(&self) -> String;
}
