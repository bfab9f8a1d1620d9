use serde::{Deserialize, Serialize};

use crate::{Move, Objective, correct_answer};

use super::{
    GameStats,
    round_source::{RoundSource, SeededSource, SessionSeed},
};

/// Number of rounds in one session before the score resets.
pub const ROUNDS_PER_SESSION: usize = 3;

/// Where the session is in its judge/acknowledge cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionPhase {
    /// Waiting for the player's choice.
    Playing,
    /// A non-final round was judged; waiting for [`GameSession::advance_round`].
    AwaitingContinue,
    /// The final round was judged; waiting for [`GameSession::reset_session`].
    AwaitingNewGame,
}

/// Outcome of [`GameSession::submit_choice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judgment {
    /// The move the player picked.
    pub chosen: Move,
    /// The move that would have been correct.
    pub expected: Move,
    pub correct: bool,
    /// Session score after this judgment.
    pub score: usize,
    /// Whether this was the last round of the session.
    pub is_session_end: bool,
}

/// Which transition [`GameSession::acknowledge`] performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Acknowledgment {
    NextRound,
    NewSession,
}

/// A perpetual sequence of three-round sessions.
///
/// Each round shows a move and an objective. The player answers with
/// [`submit_choice`](Self::submit_choice), which judges and scores the round
/// without advancing it. The caller then acknowledges the judgment with
/// [`advance_round`](Self::advance_round) (rounds 1 and 2) or
/// [`reset_session`](Self::reset_session) (round 3), which redraws the move and
/// objective from the [`RoundSource`].
///
/// ```text
/// Playing ──submit_choice──► AwaitingContinue ──advance_round──► Playing
///    ▲         (round 3)
///    │            ▼
///    └─reset_session── AwaitingNewGame
/// ```
///
/// Calling a command in the wrong phase is a programming error and panics.
///
/// # Example
///
/// ```
/// use rps_engine::{GameSession, correct_answer};
///
/// let mut session = GameSession::new();
/// assert_eq!(session.rounds_played(), 1);
///
/// let answer = correct_answer(session.current_move(), session.objective());
/// let judgment = session.submit_choice(answer);
/// assert!(judgment.correct);
/// assert_eq!(judgment.score, 1);
/// assert!(!judgment.is_session_end);
///
/// session.advance_round();
/// assert_eq!(session.rounds_played(), 2);
/// assert_eq!(session.score(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession<S = SeededSource> {
    source: S,
    current_move: Move,
    objective: Objective,
    score: usize,
    rounds_played: usize,
    phase: SessionPhase,
    stats: GameStats,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session drawing rounds from a randomly seeded source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(SeededSource::new())
    }

    /// Like [`Self::new`], but with a specific seed for a deterministic sequence of rounds.
    #[must_use]
    pub fn with_seed(seed: SessionSeed) -> Self {
        Self::with_source(SeededSource::with_seed(seed))
    }

    #[must_use]
    pub fn seed(&self) -> SessionSeed {
        self.source.seed()
    }
}

impl<S> GameSession<S>
where
    S: RoundSource,
{
    /// Creates a session with the first round drawn from `source`.
    #[must_use]
    pub fn with_source(mut source: S) -> Self {
        let current_move = source.draw_move();
        let objective = source.draw_objective();
        Self {
            source,
            current_move,
            objective,
            score: 0,
            rounds_played: 1,
            phase: SessionPhase::Playing,
            stats: GameStats::new(),
        }
    }

    #[must_use]
    pub fn current_move(&self) -> Move {
        self.current_move
    }

    #[must_use]
    pub fn objective(&self) -> Objective {
        self.objective
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Returns the current round number within the session (1 to 3).
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the move that would be judged correct for the current round.
    #[must_use]
    pub fn expected_move(&self) -> Move {
        correct_answer(self.current_move, self.objective)
    }

    /// Judges `chosen` against the current round and scores it.
    ///
    /// The round counter, move and objective are left untouched until the
    /// judgment is acknowledged.
    ///
    /// # Panics
    ///
    /// Panics if the previous judgment has not been acknowledged yet.
    pub fn submit_choice(&mut self, chosen: Move) -> Judgment {
        assert!(
            self.phase.is_playing(),
            "submit_choice called while {:?}",
            self.phase
        );

        let expected = self.expected_move();
        let correct = chosen == expected;
        if correct {
            self.score += 1;
        }
        self.stats.record_judgment(correct);

        let is_session_end = self.rounds_played == ROUNDS_PER_SESSION;
        if is_session_end {
            self.stats.complete_session(self.score);
            self.phase = SessionPhase::AwaitingNewGame;
        } else {
            self.phase = SessionPhase::AwaitingContinue;
        }

        Judgment {
            chosen,
            expected,
            correct,
            score: self.score,
            is_session_end,
        }
    }

    /// Moves on to the next round of the same session.
    ///
    /// # Panics
    ///
    /// Panics unless a non-final round has just been judged.
    pub fn advance_round(&mut self) {
        assert!(
            self.phase.is_awaiting_continue(),
            "advance_round called while {:?}",
            self.phase
        );
        self.next_round();
    }

    /// Starts a new session: score back to zero, round 1 with a fresh draw.
    ///
    /// # Panics
    ///
    /// Panics unless the final round has just been judged.
    pub fn reset_session(&mut self) {
        assert!(
            self.phase.is_awaiting_new_game(),
            "reset_session called while {:?}",
            self.phase
        );
        self.score = 0;
        self.rounds_played = 0;
        self.next_round();
    }

    /// Acknowledges the pending judgment, advancing or resetting as appropriate.
    ///
    /// # Panics
    ///
    /// Panics if there is no pending judgment.
    pub fn acknowledge(&mut self) -> Acknowledgment {
        match self.phase {
            SessionPhase::AwaitingContinue => {
                self.advance_round();
                Acknowledgment::NextRound
            }
            SessionPhase::AwaitingNewGame => {
                self.reset_session();
                Acknowledgment::NewSession
            }
            SessionPhase::Playing => panic!("acknowledge called with no pending judgment"),
        }
    }

    fn next_round(&mut self) {
        self.current_move = self.source.draw_move();
        self.objective = self.source.draw_objective();
        self.rounds_played += 1;
        self.phase = SessionPhase::Playing;
    }
}
