//! Session format configuration.
//!
//! The host supplies a `GameFormat` when opening a session: player count
//! (fixed at two), board size, and per-player starting resources, life and
//! hand size. Formats can be built in code or decoded from JSON:
//!
//! ```
//! use ccg_session::core::{GameFormat, PlayerId};
//!
//! let format = GameFormat::from_json(r#"{
//!     "playerCount": 2,
//!     "boardSize": 7,
//!     "initialResource": [0, 1],
//!     "initialLife": [20, 20],
//!     "initialDraw": [4, 5]
//! }"#).unwrap();
//!
//! assert_eq!(format.initial_draw(PlayerId::new(1)), 5);
//! ```

use serde::{Deserialize, Serialize};

use super::PlayerId;
use crate::error::FormatError;

/// Number of seats a session supports.
pub const PLAYER_COUNT: usize = 2;

/// Format of a single game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameFormat {
    /// Number of players. Only two-player sessions are supported.
    pub player_count: usize,

    /// Expected units per side. Used as an allocation hint, never enforced.
    pub board_size: usize,

    /// Starting resources per player.
    pub initial_resource: Vec<u32>,

    /// Starting life per player.
    pub initial_life: Vec<i64>,

    /// Opening hand size per player.
    pub initial_draw: Vec<usize>,
}

impl Default for GameFormat {
    fn default() -> Self {
        Self {
            player_count: PLAYER_COUNT,
            board_size: 6,
            initial_resource: vec![0; PLAYER_COUNT],
            initial_life: vec![20; PLAYER_COUNT],
            initial_draw: vec![5; PLAYER_COUNT],
        }
    }
}

impl GameFormat {
    /// Create the default two-player format.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode and validate a format from JSON.
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        let format: Self = serde_json::from_str(json)?;
        format.validate()?;
        Ok(format)
    }

    /// Set the board size hint.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set starting resources for every player.
    #[must_use]
    pub fn with_initial_resource(mut self, resource: impl Into<Vec<u32>>) -> Self {
        self.initial_resource = resource.into();
        self
    }

    /// Set starting life for every player.
    #[must_use]
    pub fn with_initial_life(mut self, life: impl Into<Vec<i64>>) -> Self {
        self.initial_life = life.into();
        self
    }

    /// Set opening hand sizes for every player.
    #[must_use]
    pub fn with_initial_draw(mut self, draw: impl Into<Vec<usize>>) -> Self {
        self.initial_draw = draw.into();
        self
    }

    /// Check the player count and that every per-player list has one entry
    /// per seat.
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.player_count != PLAYER_COUNT {
            return Err(FormatError::UnsupportedPlayerCount(self.player_count));
        }

        let lengths = [
            ("initialResource", self.initial_resource.len()),
            ("initialLife", self.initial_life.len()),
            ("initialDraw", self.initial_draw.len()),
        ];
        for (field, actual) in lengths {
            if actual != self.player_count {
                return Err(FormatError::LengthMismatch {
                    field,
                    expected: self.player_count,
                    actual,
                });
            }
        }

        Ok(())
    }

    /// Starting resources for `player` (0 if unset).
    #[must_use]
    pub fn initial_resource(&self, player: PlayerId) -> u32 {
        self.initial_resource.get(player.index()).copied().unwrap_or(0)
    }

    /// Starting life for `player` (0 if unset).
    #[must_use]
    pub fn initial_life(&self, player: PlayerId) -> i64 {
        self.initial_life.get(player.index()).copied().unwrap_or(0)
    }

    /// Opening hand size for `player` (0 if unset).
    #[must_use]
    pub fn initial_draw(&self, player: PlayerId) -> usize {
        self.initial_draw.get(player.index()).copied().unwrap_or(0)
    }
}
