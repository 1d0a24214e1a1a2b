//! Result of handling one action.

use thiserror::Error;

use super::phase::Phase;
use crate::core::{ActionType, PlayerId};
use crate::events::GameEvent;

/// What `Session::handle_action` did with an action.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The action was applied; these events were appended, in order.
    /// May be empty.
    Applied(Vec<GameEvent>),

    /// The action was refused. Nothing changed and nothing was emitted.
    Rejected(Rejection),
}

impl Outcome {
    /// Events emitted by this action. Empty when rejected.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        match self {
            Outcome::Applied(events) => events,
            Outcome::Rejected(_) => &[],
        }
    }

    #[must_use]
    pub fn into_events(self) -> Vec<GameEvent> {
        match self {
            Outcome::Applied(events) => events,
            Outcome::Rejected(_) => Vec::new(),
        }
    }

    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Applied(_) => None,
            Outcome::Rejected(reason) => Some(reason),
        }
    }
}

/// Why an action was refused.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    #[error("No handler for {0} actions")]
    UnknownAction(ActionType),

    #[error("Game has not started")]
    NotStarted,

    #[error("{0} is not seated in this session")]
    UnknownPlayer(PlayerId),

    /// The actor is not the player this action requires.
    #[error("{player} cannot {action} now; only {expected} may")]
    WrongTurn {
        action: ActionType,
        player: PlayerId,
        expected: PlayerId,
    },

    #[error("Cannot {action} during the {phase} phase")]
    WrongPhase { action: ActionType, phase: Phase },

    #[error("Nothing matches {query:?}")]
    UnresolvedReference { query: String },

    #[error("{0} cannot play a resource now")]
    ResourceUnavailable(PlayerId),
}
