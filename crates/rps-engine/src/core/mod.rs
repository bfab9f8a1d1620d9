//! Game rules as pure values.
//!
//! - [`Move`] - The three hand gestures and the cyclic beats relation
//! - [`Objective`] - Whether the player must win or lose against the shown move
//! - [`correct_answer`] - The move that satisfies an objective

pub use self::{moves::*, objective::*};

mod moves;
mod objective;
