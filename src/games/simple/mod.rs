//! Simple reference game for exercising the session.
//!
//! A minimal game that fills in every collaborator contract:
//! - Each player has a deck of named cards with a "power" value
//! - Playing a card summons a unit of the same name and power
//! - Units that attack are exhausted until their owner's next turn, and
//!   exhausted units cannot attack or block
//! - A player at 0 life or less loses
//!
//! Queries match card and unit names case-insensitively. Units can also be
//! named by handle, as `#<id>`.

mod cards;
mod game;
mod player;
mod rules;

pub use cards::{SimpleCard, SimpleUnit};
pub use game::SimpleGameBuilder;
pub use player::SimplePlayer;
pub use rules::{ExhaustAttackers, LastStanding};
