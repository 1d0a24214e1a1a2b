//! Combat and victory rules for the simple game.

use super::cards::SimpleUnit;
use super::player::SimplePlayer;
use crate::combat::CombatState;
use crate::core::{PlayerId, PlayerMap};
use crate::events::GameEvent;
use crate::rules::{CombatContext, CombatResolver, Player, WinCondition};
use crate::zones::Board;

/// Exhausts every declared attacker. Deals no damage.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExhaustAttackers;

impl CombatResolver<SimplePlayer> for ExhaustAttackers {
    fn resolve_combat(
        &mut self,
        combat: &CombatState,
        context: &mut CombatContext<'_, SimplePlayer>,
    ) -> Vec<GameEvent> {
        for &id in combat.attackers() {
            if let Some(unit) = context.board.get_mut(id) {
                unit.exhausted = true;
            }
        }
        Vec::new()
    }
}

/// The last player above 0 life wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct LastStanding;

impl WinCondition<SimplePlayer> for LastStanding {
    fn winner(
        &self,
        players: &PlayerMap<SimplePlayer>,
        _board: &Board<SimpleUnit>,
    ) -> Option<PlayerId> {
        let mut alive = players.iter().filter(|(_, p)| p.life() > 0).map(|(id, _)| id);
        match (alive.next(), alive.next()) {
            (Some(winner), None) => Some(winner),
            _ => None,
        }
    }
}
