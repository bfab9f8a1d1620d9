use std::{fmt, str::FromStr};

use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use super::moves::Move;

/// What the player is asked to do against the displayed move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, derive_more::IsVariant,
)]
pub enum Objective {
    /// Pick the move that beats the displayed one.
    Win,
    /// Pick the move that loses to the displayed one.
    Lose,
}

impl Distribution<Objective> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Objective {
        if rng.random() {
            Objective::Win
        } else {
            Objective::Lose
        }
    }
}

impl Objective {
    pub const ALL: [Objective; 2] = [Objective::Win, Objective::Lose];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Objective::Win => "Win",
            Objective::Lose => "Lose",
        }
    }

    /// Returns the other objective.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Objective::Win => Objective::Lose,
            Objective::Lose => Objective::Win,
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid objective: {input:?} (expected win or lose)")]
pub struct ParseObjectiveError {
    #[error(not(source))]
    input: String,
}

impl FromStr for Objective {
    type Err = ParseObjectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Objective::ALL
            .into_iter()
            .find(|objective| objective.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseObjectiveError {
                input: s.to_owned(),
            })
    }
}

/// Returns the move that satisfies `objective` against `current`.
///
/// Each move has exactly one move that beats it and exactly one move it beats,
/// so the answer is always unique and never equal to `current`.
///
/// # Examples
///
/// ```
/// use rps_engine::{Move, Objective, correct_answer};
///
/// assert_eq!(correct_answer(Move::Rock, Objective::Win), Move::Paper);
/// assert_eq!(correct_answer(Move::Rock, Objective::Lose), Move::Scissors);
/// ```
#[must_use]
pub const fn correct_answer(current: Move, objective: Objective) -> Move {
    match objective {
        Objective::Win => current.beaten_by(),
        Objective::Lose => current.beating(),
    }
}
