//! Core session types: entity handles, player seats, format, actions.
//!
//! These are the plain data types every other module builds on. None of
//! them know about phases or turn order.

pub mod entity;
pub mod player;
pub mod config;
pub mod action;
pub mod resource;

pub use entity::EntityId;
pub use player::{PlayerId, PlayerMap};
pub use config::{GameFormat, PLAYER_COUNT};
pub use action::{ActionKind, ActionType, GameAction};
pub use resource::Resource;
