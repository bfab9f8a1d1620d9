use std::{
    collections::VecDeque,
    ops::Deref,
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::Utc;
use rps_engine::{Acknowledgment, GameSession, GameStats, Judgment, Move, SessionSeed};

use crate::{
    schema::record::{RecordedSession, RoundRecord},
    util::Output,
};

/// A wrapper around [`GameSession`] that records every judged round.
///
/// Use [`into_history`](Self::into_history) to extract the recorded rounds
/// when play ends.
#[derive(Debug)]
pub struct RecordingSession {
    session: GameSession,
    history: SessionHistory,
}

/// Provides read-only access to the underlying `GameSession`.
///
/// `DerefMut` is not implemented: judgments must go through
/// [`RecordingSession::submit_choice`] so that they are recorded.
impl Deref for RecordingSession {
    type Target = GameSession;

    fn deref(&self) -> &Self::Target {
        &self.session
    }
}

impl RecordingSession {
    /// Creates a recording session.
    ///
    /// # Arguments
    ///
    /// * `seed` - Seed for the round source; a random one is used when `None`
    /// * `history_size` - Maximum number of rounds to keep in the ring buffer
    pub fn new(seed: Option<SessionSeed>, history_size: usize) -> Self {
        let session = seed.map_or_else(GameSession::new, GameSession::with_seed);
        let history = SessionHistory::new(session.seed(), history_size);
        log::info!("starting play with seed {}", session.seed());
        Self { session, history }
    }

    /// Consumes the session and returns the recorded history with the final statistics.
    pub fn into_history(mut self) -> SessionHistory {
        self.history.final_stats = self.session.stats().clone();
        self.history
    }

    pub fn submit_choice(&mut self, chosen: Move) -> Judgment {
        let session_number = self.session.stats().completed_sessions() + 1;
        let round = self.session.rounds_played();
        let shown = self.session.current_move();
        let objective = self.session.objective();

        let judgment = self.session.submit_choice(chosen);
        log::debug!(
            "session {session_number} round {round}: {shown} / {objective}, chose {chosen} (expected {}) -> {}",
            judgment.expected,
            if judgment.correct { "correct" } else { "incorrect" },
        );
        if judgment.is_session_end {
            log::info!(
                "session {session_number} finished with score {}",
                judgment.score
            );
        }

        self.history.record(RoundRecord {
            session: session_number,
            round,
            shown,
            objective,
            chosen,
            expected: judgment.expected,
            correct: judgment.correct,
            score: judgment.score,
        });
        judgment
    }

    pub fn acknowledge(&mut self) -> Acknowledgment {
        let ack = self.session.acknowledge();
        if ack.is_new_session() {
            log::debug!("new session started");
        }
        ack
    }
}

/// Recorded history of a play run.
#[derive(Debug)]
pub struct SessionHistory {
    seed: SessionSeed,
    final_stats: GameStats,
    buffer: RingBuffer<RoundRecord>,
}

impl SessionHistory {
    fn new(seed: SessionSeed, capacity: usize) -> Self {
        Self {
            seed,
            final_stats: GameStats::new(),
            buffer: RingBuffer::with_capacity(capacity),
        }
    }

    fn record(&mut self, round: RoundRecord) {
        self.buffer.push(round);
    }

    #[must_use]
    pub fn to_recorded_session(&self) -> RecordedSession {
        RecordedSession {
            recorded_at: Utc::now(),
            seed: self.seed,
            final_stats: self.final_stats.clone(),
            rounds: self.buffer.to_vec(),
        }
    }

    /// Saves the recording as JSON to `{record_dir}/manual_{YYYYMMDD_HHMMSS}.json`.
    ///
    /// The directory is created if it doesn't exist. Returns the path written.
    pub fn save(&self, record_dir: &Path) -> anyhow::Result<PathBuf> {
        let data = self.to_recorded_session();
        let filename = format!("manual_{}.json", data.recorded_at.format("%Y%m%d_%H%M%S"));
        let filepath = record_dir.join(filename);

        Output::save_json(&data, Some(filepath.clone()))
            .with_context(|| format!("Failed to save recording to {}", filepath.display()))?;
        log::info!(
            "saved {} rounds to {}",
            data.rounds.len(),
            filepath.display()
        );
        Ok(filepath)
    }
}

/// A fixed-capacity ring buffer that overwrites oldest entries when full.
#[derive(Debug)]
struct RingBuffer<T> {
    capacity: usize,
    buf: VecDeque<T>,
}

impl<T> RingBuffer<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            buf: VecDeque::with_capacity(capacity.min(1024)),
        }
    }

    fn push(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        if self.buf.len() >= self.capacity {
            self.buf.pop_front();
        }
        self.buf.push_back(item);
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.buf.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const SEED: &str = "0f1e2d3c4b5a69788796a5b4c3d2e1f0";

    fn play_rounds(session: &mut RecordingSession, rounds: usize) {
        for _ in 0..rounds {
            let answer = session.expected_move();
            session.submit_choice(answer);
            session.acknowledge();
        }
    }

    #[test]
    fn test_ring_buffer_overwrites_oldest_when_full() {
        let mut buf = RingBuffer::with_capacity(3);
        for i in 1..=5 {
            buf.push(i);
        }
        assert_eq!(buf.to_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn test_ring_buffer_capacity_zero() {
        let mut buf = RingBuffer::with_capacity(0);
        buf.push(1);
        assert!(buf.to_vec().is_empty());
    }

    #[test]
    fn test_records_session_and_round_numbers() {
        let mut session = RecordingSession::new(Some(SEED.parse().unwrap()), 100);
        play_rounds(&mut session, 4);

        let recorded = session.into_history().to_recorded_session();
        let positions: Vec<_> = recorded
            .rounds
            .iter()
            .map(|round| (round.session, round.round))
            .collect();
        assert_eq!(positions, vec![(1, 1), (1, 2), (1, 3), (2, 1)]);
        assert!(recorded.rounds.iter().all(|round| round.correct));
        assert_eq!(recorded.rounds[2].score, 3);
        assert_eq!(recorded.rounds[3].score, 1);
        assert_eq!(recorded.final_stats.completed_sessions(), 1);
    }

    #[test]
    fn test_records_what_was_shown() {
        let mut session = RecordingSession::new(Some(SEED.parse().unwrap()), 100);
        let shown = session.current_move();
        let objective = session.objective();
        let judgment = session.submit_choice(shown);

        let recorded = session.into_history().to_recorded_session();
        let round = &recorded.rounds[0];
        assert_eq!(round.shown, shown);
        assert_eq!(round.objective, objective);
        assert_eq!(round.chosen, shown);
        assert_eq!(round.expected, judgment.expected);
        assert!(!round.correct);
    }

    #[test]
    fn test_history_size_limits_rounds() {
        let mut session = RecordingSession::new(None, 2);
        play_rounds(&mut session, 5);
        let recorded = session.into_history().to_recorded_session();
        assert_eq!(recorded.rounds.len(), 2);
        assert_eq!(recorded.final_stats.rounds_judged(), 5);
    }

    #[test]
    fn test_save_writes_json_recording() {
        let dir = tempfile::tempdir().unwrap();
        let record_dir = dir.path().join("recordings");

        let mut session = RecordingSession::new(Some(SEED.parse().unwrap()), 100);
        play_rounds(&mut session, 3);
        let path = session.into_history().save(&record_dir).unwrap();

        let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(file_name.starts_with("manual_"));
        assert!(file_name.ends_with(".json"));

        let text = fs::read_to_string(&path).unwrap();
        let loaded: RecordedSession = serde_json::from_str(&text).unwrap();
        assert_eq!(loaded.seed.to_string(), SEED);
        assert_eq!(loaded.rounds.len(), 3);
        assert_eq!(loaded.final_stats.perfect_sessions(), 1);
    }
}
