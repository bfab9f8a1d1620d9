//! Session state and round generation.
//!
//! - [`GameSession`] - Three-round sessions with scoring and the judge/acknowledge cycle
//! - [`GameStats`] - Counters that survive session resets
//! - [`RoundSource`] - Where new rounds come from
//! - [`SeededSource`] / [`SessionSeed`] - Deterministic PCG-backed source
//!
//! # Game Flow
//!
//! 1. [`GameSession`] draws a move and an objective for round 1
//! 2. The player answers with [`GameSession::submit_choice`]
//! 3. The judgment is shown, then acknowledged with [`GameSession::acknowledge`]
//! 4. Rounds 2 and 3 repeat steps 2-3; acknowledging round 3 starts a new session

pub use self::{game_session::*, game_stats::*, round_source::*};

mod game_session;
mod game_stats;
mod round_source;
