//! Combat declaration for the current turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::EntityId;

/// Declared attackers and attacker/blocker pairings.
///
/// Populated by the `declareAttackers` and `declareBlockers` actions and
/// cleared at the start of every turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatState {
    /// Attacking units, in declaration order. No duplicates.
    attackers: SmallVec<[EntityId; 4]>,

    /// `(attacker, blocker)` pairs in declaration order.
    blockers: Vec<(EntityId, EntityId)>,
}

impl CombatState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the attacker set. Repeated ids are kept once.
    pub fn declare_attackers(&mut self, attackers: impl IntoIterator<Item = EntityId>) {
        self.attackers.clear();
        for attacker in attackers {
            if !self.attackers.contains(&attacker) {
                self.attackers.push(attacker);
            }
        }
    }

    /// Replace the blocker pairings.
    pub fn declare_blockers(&mut self, pairs: impl IntoIterator<Item = (EntityId, EntityId)>) {
        self.blockers = pairs.into_iter().collect();
    }

    #[must_use]
    pub fn attackers(&self) -> &[EntityId] {
        &self.attackers
    }

    /// `(attacker, blocker)` pairs.
    #[must_use]
    pub fn blockers(&self) -> &[(EntityId, EntityId)] {
        &self.blockers
    }

    #[must_use]
    pub fn is_attacking(&self, id: EntityId) -> bool {
        self.attackers.contains(&id)
    }

    #[must_use]
    pub fn is_blocking(&self, id: EntityId) -> bool {
        self.blockers.iter().any(|&(_, blocker)| blocker == id)
    }

    /// Blockers assigned to `attacker`, in declaration order.
    pub fn blockers_of(&self, attacker: EntityId) -> impl Iterator<Item = EntityId> + '_ {
        self.blockers
            .iter()
            .filter(move |&&(a, _)| a == attacker)
            .map(|&(_, blocker)| blocker)
    }

    /// Declared attackers with no blocker assigned.
    pub fn unblocked(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.attackers
            .iter()
            .copied()
            .filter(move |&a| self.blockers_of(a).next().is_none())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attackers.is_empty() && self.blockers.is_empty()
    }

    /// Forget all declarations.
    pub fn clear(&mut self) {
        self.attackers.clear();
        self.blockers.clear();
    }
}
