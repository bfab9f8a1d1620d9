use chrono::{DateTime, Utc};
use rps_engine::{GameStats, Move, Objective, SessionSeed};
use serde::{Deserialize, Serialize};

/// Recorded play with enough metadata to reproduce the rounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedSession {
    /// Timestamp when recording was created (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    /// Random seed used for drawing rounds
    pub seed: SessionSeed,
    /// Statistics over every session played
    pub final_stats: GameStats,
    /// Judged rounds in play order
    pub rounds: Vec<RoundRecord>,
}

/// A single judged round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Session number (1-indexed)
    pub session: usize,
    /// Round within the session (1-indexed)
    pub round: usize,
    /// Move shown to the player
    pub shown: Move,
    pub objective: Objective,
    /// Move the player picked
    pub chosen: Move,
    pub expected: Move,
    pub correct: bool,
    /// Session score after the judgment
    pub score: usize,
}
