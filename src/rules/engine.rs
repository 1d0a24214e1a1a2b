//! Extension points for game-specific rules.
//!
//! The session decides *when* combat resolves and *when* to ask for a
//! winner. What those mean is left to games:
//!
//! - [`CombatResolver`]: turns a completed combat declaration into events
//!   (damage, destruction, ...)
//! - [`WinCondition`]: inspects players and board for a winner
//!
//! The defaults, [`NoCombatDamage`] and [`Undecided`], do nothing: combat
//! only moves the turn to its second main phase, and no one ever wins.

use crate::combat::CombatState;
use crate::core::{PlayerId, PlayerMap};
use crate::events::GameEvent;
use crate::zones::Board;

use super::participant::Player;

/// Mutable view of the session handed to a [`CombatResolver`].
pub struct CombatContext<'a, P: Player> {
    /// Both seated players.
    pub players: &'a mut PlayerMap<P>,

    /// The board. Resolvers may remove destroyed units.
    pub board: &'a mut Board<P::Entity>,

    /// The player whose turn it is.
    pub attacking_player: PlayerId,
}

impl<'a, P: Player> CombatContext<'a, P> {
    /// The player declaring blockers.
    #[must_use]
    pub fn defending_player(&self) -> PlayerId {
        self.attacking_player.opponent()
    }
}

/// Resolves a combat once blockers are declared or the defender passes.
///
/// Returned events are appended to the log in order, after the `block`
/// event (if any).
pub trait CombatResolver<P: Player> {
    fn resolve_combat(
        &mut self,
        combat: &CombatState,
        context: &mut CombatContext<'_, P>,
    ) -> Vec<GameEvent>;
}

/// Decides whether the game is over.
pub trait WinCondition<P: Player> {
    /// `Some(player)` once `player` has won, `None` while the game continues.
    fn winner(&self, players: &PlayerMap<P>, board: &Board<P::Entity>) -> Option<PlayerId>;
}

/// Combat resolution that emits nothing and changes nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCombatDamage;

impl<P: Player> CombatResolver<P> for NoCombatDamage {
    fn resolve_combat(
        &mut self,
        _combat: &CombatState,
        _context: &mut CombatContext<'_, P>,
    ) -> Vec<GameEvent> {
        Vec::new()
    }
}

/// Win condition that never declares a winner.
#[derive(Clone, Copy, Debug, Default)]
pub struct Undecided;

impl<P: Player> WinCondition<P> for Undecided {
    fn winner(&self, _players: &PlayerMap<P>, _board: &Board<P::Entity>) -> Option<PlayerId> {
        None
    }
}
