//! Player seats and per-seat storage.
//!
//! ## PlayerId
//!
//! A seat at the table. Sessions seat exactly two players, so seats are
//! `0` and `1` and every seat has exactly one opponent.
//!
//! ## PlayerMap
//!
//! One value per seat, indexed by `PlayerId`. Used for the players
//! themselves and for each player's board zone.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat index, 0-based. Serializes as a bare number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// Seat as a `usize`, for indexing.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat in a two-player game.
    ///
    /// ```
    /// use ccg_session::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).opponent(), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).opponent(), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self((self.0 + 1) % 2)
    }

    /// Seats `0..seats`, in order.
    pub fn all(seats: usize) -> impl Iterator<Item = PlayerId> {
        (0..seats as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One `T` per seat.
///
/// ```
/// use ccg_session::core::{PlayerId, PlayerMap};
///
/// let mut life: PlayerMap<i64> = PlayerMap::new(2, |_| 20);
/// life[PlayerId::new(1)] -= 5;
///
/// assert_eq!(life[PlayerId::new(0)], 20);
/// assert_eq!(life[PlayerId::new(1)], 15);
/// ```
///
/// Indexing with a seat outside the map panics; check with
/// [`contains`](Self::contains) first when the seat comes from a client.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Fill every seat from `factory`.
    ///
    /// # Panics
    ///
    /// If `seats` is 0 or more than 255.
    pub fn new(seats: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(seats > 0, "Must have at least 1 seat");
        assert!(seats <= 255, "At most 255 seats supported");

        Self {
            seats: PlayerId::all(seats).map(factory).collect(),
        }
    }

    /// Take values already in seat order. `None` if empty or oversized.
    pub fn from_vec(values: Vec<T>) -> Option<Self> {
        if values.is_empty() || values.len() > 255 {
            return None;
        }
        Some(Self { seats: values })
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Whether `player` has a seat here.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.seats.len()
    }

    /// `(seat, value)` pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.seats.len()).zip(self.seats.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::all(self.seats.len()).zip(self.seats.iter_mut())
    }

    /// Values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.seats.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId::new(1).index(), 1);
        assert_eq!(PlayerId::new(0).to_string(), "Player 0");
    }

    #[test]
    fn test_opponent_is_involution() {
        for player in PlayerId::all(2) {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_new_and_contains() {
        let map: PlayerMap<usize> = PlayerMap::new(2, |p| p.index() * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(1)], 10);
        assert!(map.contains(PlayerId::new(1)));
        assert!(!map.contains(PlayerId::new(2)));
    }

    #[test]
    fn test_from_vec() {
        let map = PlayerMap::from_vec(vec!["a", "b"]).unwrap();
        assert_eq!(map.player_count(), 2);
        assert_eq!(map[PlayerId::new(1)], "b");

        assert!(PlayerMap::<u8>::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn test_iter_mut_pairs_seats() {
        let mut map = PlayerMap::new(2, |_| 0usize);
        for (player, value) in map.iter_mut() {
            *value = player.index() + 1;
        }

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::new(0), &1), (PlayerId::new(1), &2)]);
    }

    #[test]
    fn test_serde_shape() {
        let map = PlayerMap::new(2, |p| p.index() as i64 + 1);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({ "seats": [1, 2] }));

        let back: PlayerMap<i64> = serde_json::from_value(json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 seat")]
    fn test_zero_seats_panics() {
        let _ = PlayerMap::new(0, |_| 0u8);
    }
}
