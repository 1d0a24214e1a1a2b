//! Narrow session handle given to `Player::play_card`.

use crate::core::{EntityId, PlayerId};
use crate::events::{EventLog, GameEvent};
use crate::rules::Entity;
use crate::zones::Board;

/// What a card's effects may touch: the board and the event log.
///
/// Events emitted here land after the `playCard` event of the card being
/// played.
pub struct Table<'a, E> {
    board: &'a mut Board<E>,
    log: &'a mut EventLog,
    controller: PlayerId,
}

impl<'a, E: Entity> Table<'a, E> {
    pub(crate) fn new(board: &'a mut Board<E>, log: &'a mut EventLog, controller: PlayerId) -> Self {
        Self {
            board,
            log,
            controller,
        }
    }

    /// The player whose card is resolving.
    #[must_use]
    pub fn controller(&self) -> PlayerId {
        self.controller
    }

    #[must_use]
    pub fn board(&self) -> &Board<E> {
        self.board
    }

    /// Put a unit on the board under its owner's zone. `None` if the owner
    /// is not seated.
    pub fn add_entity(&mut self, entity: E) -> Option<EntityId> {
        self.board.add_entity(entity)
    }

    /// Take a unit off the board. No-op if absent.
    pub fn remove_entity(&mut self, id: EntityId) -> Option<E> {
        self.board.remove_entity(id)
    }

    /// Mutable access to a unit on the board.
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut E> {
        self.board.get_mut(id)
    }

    /// Append an event.
    pub fn emit(&mut self, event: GameEvent) {
        self.log.push(event);
    }
}
