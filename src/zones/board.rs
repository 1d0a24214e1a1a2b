//! The board: each player's zone of active entities.
//!
//! Entities live in an arena keyed by [`EntityId`]; each player's zone is
//! the ordered list of ids that player owns. There is no spatial layout and
//! no capacity limit. Order within a zone is insertion order and only
//! matters for stable iteration.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::core::{EntityId, PlayerId, PlayerMap};
use crate::rules::Entity;

/// Per-player collections of entities.
///
/// ```
/// use ccg_session::core::PlayerId;
/// use ccg_session::games::simple::SimpleUnit;
/// use ccg_session::zones::Board;
///
/// let mut board = Board::new(2, 4);
/// let bear = board.add_entity(SimpleUnit::new("Bear", PlayerId::new(0), 2)).unwrap();
/// let wall = board.add_entity(SimpleUnit::new("Wall", PlayerId::new(1), 0)).unwrap();
///
/// assert_eq!(board.all_entities(), vec![bear, wall]);
/// assert!(board.remove_entity(bear).is_some());
/// assert!(board.remove_entity(bear).is_none()); // already gone
/// ```
#[derive(Clone, Debug)]
pub struct Board<E> {
    /// Entity handles per owner, in insertion order.
    zones: PlayerMap<Vec<EntityId>>,

    /// Entity storage.
    entities: FxHashMap<EntityId, E>,

    /// Next handle to allocate. Handles are never reused.
    next_id: EntityId,
}

impl<E> Board<E> {
    /// Create an empty board. `space_count` is a per-zone allocation hint.
    #[must_use]
    pub fn new(player_count: usize, space_count: usize) -> Self {
        Self {
            zones: PlayerMap::new(player_count, |_| Vec::with_capacity(space_count)),
            entities: FxHashMap::default(),
            next_id: EntityId(0),
        }
    }

    /// Get an entity by handle.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&E> {
        self.entities.get(&id)
    }

    /// Get a mutable entity by handle.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut E> {
        self.entities.get_mut(&id)
    }

    /// Check if the board holds `id`.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Total entities across all zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Every entity handle: player 0's zone, then player 1's, each in
    /// insertion order.
    #[must_use]
    pub fn all_entities(&self) -> Vec<EntityId> {
        self.zones.values().flatten().copied().collect()
    }

    /// Iterate `(id, entity)` pairs in the same order as `all_entities`.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &E)> + '_ {
        self.zones
            .values()
            .flatten()
            .filter_map(move |&id| self.entities.get(&id).map(|e| (id, e)))
    }

    /// A read-only view of one player's zone.
    #[must_use]
    pub fn player_entities(&self, player: PlayerId) -> ZoneView<'_, E> {
        ZoneView {
            ids: &self.zones[player],
            board: self,
        }
    }

    /// Remove an entity from whichever zone holds it.
    ///
    /// Returns the entity, or `None` if it was not on the board.
    pub fn remove_entity(&mut self, id: EntityId) -> Option<E> {
        let entity = self.entities.remove(&id)?;

        for (_, zone) in self.zones.iter_mut() {
            if let Some(pos) = zone.iter().position(|&e| e == id) {
                zone.remove(pos);
                break;
            }
        }

        trace!(entity = %id, "removed from board");
        Some(entity)
    }
}

impl<E: Entity> Board<E> {
    /// Add an entity to its owner's zone and return its new handle.
    ///
    /// Returns `None`, leaving the board untouched, if the owner has no
    /// zone here.
    pub fn add_entity(&mut self, mut entity: E) -> Option<EntityId> {
        let owner = entity.owner();
        if !self.zones.contains(owner) {
            trace!(owner = %owner, "add refused: owner not seated");
            return None;
        }

        let id = self.next_id;
        self.next_id = id.next();
        entity.set_parent(id);
        self.zones[owner].push(id);
        self.entities.insert(id, entity);

        trace!(entity = %id, owner = %owner, "added to board");
        Some(id)
    }

    /// The owner of `id`, if it is on the board.
    #[must_use]
    pub fn owner_of(&self, id: EntityId) -> Option<PlayerId> {
        self.entities.get(&id).map(Entity::owner)
    }

    /// Refresh every entity in `player`'s zone.
    pub fn refresh_player(&mut self, player: PlayerId) {
        for id in &self.zones[player] {
            if let Some(entity) = self.entities.get_mut(id) {
                entity.refresh();
            }
        }
    }
}

/// Read-only view of a single player's zone.
///
/// Borrowed from the board; callers must not assume it is a copy.
#[derive(Debug)]
pub struct ZoneView<'a, E> {
    ids: &'a [EntityId],
    board: &'a Board<E>,
}

impl<'a, E> Clone for ZoneView<'a, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E> Copy for ZoneView<'a, E> {}

impl<'a, E> ZoneView<'a, E> {
    /// Entity handles in insertion order.
    #[must_use]
    pub fn ids(&self) -> &'a [EntityId] {
        self.ids
    }

    /// Iterate `(id, entity)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &'a E)> + 'a {
        let board = self.board;
        self.ids
            .iter()
            .filter_map(move |&id| board.entities.get(&id).map(|e| (id, e)))
    }

    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
