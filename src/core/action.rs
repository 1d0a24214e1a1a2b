//! Player actions.
//!
//! A `GameAction` is one caller-submitted request: who is acting and what
//! they want to do. The action kind carries its own parameters, so the
//! session dispatches with an exhaustive `match` and every kind is handled
//! (or explicitly refused) at compile time.
//!
//! Actions use the same adjacently tagged JSON shape as events:
//!
//! ```
//! use ccg_session::core::{ActionKind, GameAction, PlayerId};
//!
//! let action: GameAction = serde_json::from_str(r#"{
//!     "player": 0,
//!     "type": "declareAttackers",
//!     "params": { "attackers": ["Grizzly Bears", "Goblin"] }
//! }"#).unwrap();
//!
//! assert_eq!(action.player, PlayerId::new(0));
//! assert!(matches!(action.kind, ActionKind::DeclareAttackers { .. }));
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// What an action does, with its kind-specific parameters.
///
/// Entity and card references are query strings resolved by the acting
/// player's collaborator (`Player::query_hand`, `Player::query_cards`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "params",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum ActionKind {
    Mulligan,
    PlayResource,
    /// Play a card from hand.
    PlayCard { to_play: String },
    /// Declare attackers from the active player's board.
    DeclareAttackers { attackers: Vec<String> },
    /// Pair opposing attackers with the defender's own units.
    /// Each pair is `(attacker query, blocker query)`.
    DeclareBlockers { blockers: Vec<(String, String)> },
    DistributeDamage,
    Pass,
    Concede,
    ActivateAbility,
}

impl ActionKind {
    /// The parameterless discriminant, for logging and rejections.
    #[must_use]
    pub fn action_type(&self) -> ActionType {
        match self {
            ActionKind::Mulligan => ActionType::Mulligan,
            ActionKind::PlayResource => ActionType::PlayResource,
            ActionKind::PlayCard { .. } => ActionType::PlayCard,
            ActionKind::DeclareAttackers { .. } => ActionType::DeclareAttackers,
            ActionKind::DeclareBlockers { .. } => ActionType::DeclareBlockers,
            ActionKind::DistributeDamage => ActionType::DistributeDamage,
            ActionKind::Pass => ActionType::Pass,
            ActionKind::Concede => ActionType::Concede,
            ActionKind::ActivateAbility => ActionType::ActivateAbility,
        }
    }
}

/// Action kind without parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionType {
    Mulligan,
    PlayResource,
    PlayCard,
    DeclareAttackers,
    DeclareBlockers,
    DistributeDamage,
    Pass,
    Concede,
    ActivateAbility,
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionType::Mulligan => "mulligan",
            ActionType::PlayResource => "playResource",
            ActionType::PlayCard => "playCard",
            ActionType::DeclareAttackers => "declareAttackers",
            ActionType::DeclareBlockers => "declareBlockers",
            ActionType::DistributeDamage => "distributeDamage",
            ActionType::Pass => "pass",
            ActionType::Concede => "concede",
            ActionType::ActivateAbility => "activateAbility",
        };
        f.write_str(name)
    }
}

/// A complete action: the acting seat plus what it does.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAction {
    /// The acting player.
    pub player: PlayerId,

    /// Kind and parameters.
    #[serde(flatten)]
    pub kind: ActionKind,
}

impl GameAction {
    /// Create an action.
    #[must_use]
    pub fn new(player: PlayerId, kind: ActionKind) -> Self {
        Self { player, kind }
    }

    /// End the turn, or give up blocking during combat.
    #[must_use]
    pub fn pass(player: PlayerId) -> Self {
        Self::new(player, ActionKind::Pass)
    }

    #[must_use]
    pub fn play_resource(player: PlayerId) -> Self {
        Self::new(player, ActionKind::PlayResource)
    }

    /// Play the first hand card matching `query`.
    #[must_use]
    pub fn play_card(player: PlayerId, query: impl Into<String>) -> Self {
        Self::new(
            player,
            ActionKind::PlayCard {
                to_play: query.into(),
            },
        )
    }

    /// Declare attackers by query.
    #[must_use]
    pub fn declare_attackers<S: Into<String>>(
        player: PlayerId,
        attackers: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(
            player,
            ActionKind::DeclareAttackers {
                attackers: attackers.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Declare `(attacker, blocker)` pairs by query.
    #[must_use]
    pub fn declare_blockers<A: Into<String>, B: Into<String>>(
        player: PlayerId,
        blockers: impl IntoIterator<Item = (A, B)>,
    ) -> Self {
        Self::new(
            player,
            ActionKind::DeclareBlockers {
                blockers: blockers
                    .into_iter()
                    .map(|(attacker, blocker)| (attacker.into(), blocker.into()))
                    .collect(),
            },
        )
    }
}
