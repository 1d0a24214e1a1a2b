//! Entity identification.
//!
//! Every unit placed on the board gets an `EntityId` from the board's arena
//! when it is added. Ids are never reused within a session, so two entities
//! that happen to be value-equal are still distinguishable.
//!
//! ```
//! use ccg_session::core::EntityId;
//!
//! let first = EntityId(0);
//! assert_eq!(first.next(), EntityId(1));
//! assert_eq!(format!("{}", first), "Entity(0)");
//! ```

use serde::{Deserialize, Serialize};

/// Stable handle for a board entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
