//! Combat declarations.
//!
//! The session only records who attacks and who blocks whom. What happens
//! to those units is decided by a
//! [`CombatResolver`](crate::rules::CombatResolver).

mod state;

pub use state::CombatState;
