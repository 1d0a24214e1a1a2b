//! Error types for session construction and lifecycle.
//!
//! Action-level refusals are not errors in this sense; they are reported as
//! [`Rejection`](crate::session::Rejection) inside an
//! [`Outcome`](crate::session::Outcome).

use thiserror::Error;

use crate::core::PlayerId;

/// Invalid session format.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Unsupported player count: {0} (sessions seat exactly 2)")]
    UnsupportedPlayerCount(usize),

    #[error("Format field {field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Malformed format JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid format: {0}")]
    InvalidFormat(#[from] FormatError),

    #[error("Seat {seat} is occupied by a player reporting number {reported}")]
    SeatMismatch { seat: PlayerId, reported: PlayerId },

    #[error("{seat} starts with {actual} life, format says {expected}")]
    StartingLife {
        seat: PlayerId,
        expected: i64,
        actual: i64,
    },

    #[error("Expected {expected} players, got {actual}")]
    PlayerCount { expected: usize, actual: usize },

    #[error("Game already started")]
    AlreadyStarted,

    #[error("{0} is not seated in this session")]
    UnknownPlayer(PlayerId),
}

pub type Result<T> = std::result::Result<T, SessionError>;
