use serde::{Deserialize, Serialize};

use super::game_session::ROUNDS_PER_SESSION;

/// Statistics accumulated across every session played with one
/// [`GameSession`](crate::GameSession).
///
/// Unlike the session score, these counters survive
/// [`reset_session`](crate::GameSession::reset_session). They live only in
/// memory.
///
/// # Example
///
/// ```
/// use rps_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.record_judgment(true);
/// stats.record_judgment(false);
/// stats.record_judgment(true);
/// stats.complete_session(2);
///
/// assert_eq!(stats.rounds_judged(), 3);
/// assert_eq!(stats.correct_answers(), 2);
/// assert_eq!(stats.completed_sessions(), 1);
/// assert_eq!(stats.best_score(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    rounds_judged: usize,
    correct_answers: usize,
    completed_sessions: usize,
    best_score: usize,
    perfect_sessions: usize,
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rounds_judged: 0,
            correct_answers: 0,
            completed_sessions: 0,
            best_score: 0,
            perfect_sessions: 0,
        }
    }

    #[must_use]
    pub const fn rounds_judged(&self) -> usize {
        self.rounds_judged
    }

    #[must_use]
    pub const fn correct_answers(&self) -> usize {
        self.correct_answers
    }

    /// Number of sessions whose final round has been judged.
    #[must_use]
    pub const fn completed_sessions(&self) -> usize {
        self.completed_sessions
    }

    /// Highest final score among completed sessions.
    #[must_use]
    pub const fn best_score(&self) -> usize {
        self.best_score
    }

    /// Number of completed sessions where every round was answered correctly.
    #[must_use]
    pub const fn perfect_sessions(&self) -> usize {
        self.perfect_sessions
    }

    /// Returns the ratio of correct answers, or `None` before the first judgment.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn accuracy(&self) -> Option<f64> {
        (self.rounds_judged > 0).then(|| self.correct_answers as f64 / self.rounds_judged as f64)
    }

    pub const fn record_judgment(&mut self, correct: bool) {
        self.rounds_judged += 1;
        if correct {
            self.correct_answers += 1;
        }
    }

    pub const fn complete_session(&mut self, final_score: usize) {
        self.completed_sessions += 1;
        if final_score > self.best_score {
            self.best_score = final_score;
        }
        if final_score == ROUNDS_PER_SESSION {
            self.perfect_sessions += 1;
        }
    }
}
