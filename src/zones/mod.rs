//! Board zones.
//!
//! Each player has one zone: the unordered set of units they control on
//! the board. Units are addressed by [`EntityId`](crate::core::EntityId)
//! handles rather than by value.
//!
//! ## Key Types
//!
//! - `Board`: entity arena plus per-player zones
//! - `ZoneView`: read-only borrow of one player's zone

pub mod board;

pub use board::{Board, ZoneView};
