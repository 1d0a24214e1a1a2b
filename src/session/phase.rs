//! Turn phases and the phase/turn state machine.
//!
//! ```text
//! FirstMain --declare attackers--> Combat --blockers or defender pass--> SecondMain
//!     |                                                                  |
//!     +------------------------- pass (End) ---------------------------+
//!                                     |
//!                              next turn: FirstMain
//! ```
//!
//! `ResponseWindow` is part of the enumeration but no transition enters it.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::PlayerId;

/// Phases of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    FirstMain,
    Combat,
    SecondMain,
    End,
    /// Reserved for interrupt-style responses. Never entered.
    ResponseWindow,
}

impl Phase {
    /// Phases in which the active player may end the turn.
    #[must_use]
    pub fn ends_turn_on_pass(self) -> bool {
        matches!(self, Phase::FirstMain | Phase::SecondMain | Phase::End)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::FirstMain => "first main",
            Phase::Combat => "combat",
            Phase::SecondMain => "second main",
            Phase::End => "end",
            Phase::ResponseWindow => "response window",
        };
        f.write_str(name)
    }
}

/// Owns the current phase, the active player and the turn counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseController {
    phase: Phase,
    active_player: PlayerId,
    turn_number: u32,
    started: bool,
}

impl Default for PhaseController {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseController {
    /// Turn 1, player 0, first main phase, not yet started.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::FirstMain,
            active_player: PlayerId::new(0),
            turn_number: 1,
            started: false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// The player who is not active.
    #[must_use]
    pub fn defending_player(&self) -> PlayerId {
        self.active_player.opponent()
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether `player` is active. Always false before the game starts.
    #[must_use]
    pub fn is_player_turn(&self, player: PlayerId) -> bool {
        self.started && self.active_player == player
    }

    /// Begin the first turn: player 0, first main phase.
    pub fn start(&mut self) {
        self.started = true;
        self.active_player = PlayerId::new(0);
        self.transition(Phase::FirstMain);
    }

    /// Attackers were declared.
    pub fn enter_combat(&mut self) {
        self.transition(Phase::Combat);
    }

    /// Combat was resolved.
    pub fn finish_combat(&mut self) {
        self.transition(Phase::SecondMain);
    }

    /// End the current turn and hand over to the other player.
    ///
    /// Returns the new active player.
    pub fn advance_turn(&mut self) -> PlayerId {
        self.transition(Phase::End);
        self.active_player = self.active_player.opponent();
        self.turn_number += 1;
        self.transition(Phase::FirstMain);
        self.active_player
    }

    fn transition(&mut self, to: Phase) {
        trace!(from = %self.phase, to = %to, turn = self.turn_number, "phase transition");
        self.phase = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let phases = PhaseController::new();

        assert_eq!(phases.phase(), Phase::FirstMain);
        assert_eq!(phases.active_player(), PlayerId::new(0));
        assert_eq!(phases.turn_number(), 1);
        assert!(!phases.is_started());
        assert!(!phases.is_player_turn(PlayerId::new(0)));
    }

    #[test]
    fn test_start() {
        let mut phases = PhaseController::new();
        phases.start();

        assert!(phases.is_player_turn(PlayerId::new(0)));
        assert!(!phases.is_player_turn(PlayerId::new(1)));
        assert_eq!(phases.defending_player(), PlayerId::new(1));
    }

    #[test]
    fn test_combat_cycle() {
        let mut phases = PhaseController::new();
        phases.start();

        phases.enter_combat();
        assert_eq!(phases.phase(), Phase::Combat);

        phases.finish_combat();
        assert_eq!(phases.phase(), Phase::SecondMain);
        assert_eq!(phases.turn_number(), 1);
    }

    #[test]
    fn test_advance_turn_alternates() {
        let mut phases = PhaseController::new();
        phases.start();
        phases.enter_combat();

        assert_eq!(phases.advance_turn(), PlayerId::new(1));
        assert_eq!(phases.turn_number(), 2);
        assert_eq!(phases.phase(), Phase::FirstMain);

        assert_eq!(phases.advance_turn(), PlayerId::new(0));
        assert_eq!(phases.turn_number(), 3);
    }

    #[test]
    fn test_pass_phases() {
        assert!(Phase::FirstMain.ends_turn_on_pass());
        assert!(Phase::SecondMain.ends_turn_on_pass());
        assert!(Phase::End.ends_turn_on_pass());
        assert!(!Phase::Combat.ends_turn_on_pass());
        assert!(!Phase::ResponseWindow.ends_turn_on_pass());
    }
}
