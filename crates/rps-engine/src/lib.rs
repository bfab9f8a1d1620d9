//! Rules and session state for a Rock Paper Scissors trainer.
//!
//! The player is shown a move and told to either win or lose against it.
//! See [`GameSession`] for the round cycle.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;
