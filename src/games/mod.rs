//! Reference game implementations.
//!
//! - `simple`: minimal players, cards and units for exercising a session

pub mod simple;
