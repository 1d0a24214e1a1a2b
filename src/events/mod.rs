//! Events emitted by a session.
//!
//! - [`GameEvent`]: one state change, with a structured payload
//! - [`EventLog`]: append-only history, sliceable by [`Watermark`]

mod event;
mod log;

pub use event::{EventKind, GameEvent};
pub use log::{EventLog, Watermark};
