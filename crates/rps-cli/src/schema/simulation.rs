use chrono::{DateTime, Utc};
use rps_engine::{GameStats, ROUNDS_PER_SESSION, SessionSeed};
use serde::{Deserialize, Serialize};

/// Result of a headless simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub simulated_at: DateTime<Utc>,
    /// Name of the strategy that picked the moves
    pub strategy: String,
    pub seed: SessionSeed,
    pub sessions: usize,
    pub stats: GameStats,
    /// Ratio of correct answers (`null` when no round was played)
    pub accuracy: Option<f64>,
    /// Number of sessions per final score, indexed by score
    pub score_histogram: [usize; ROUNDS_PER_SESSION + 1],
}
