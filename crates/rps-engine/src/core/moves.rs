use std::{fmt, str::FromStr};

use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

/// A hand gesture.
///
/// The three moves form a cycle: Rock beats Scissors, Scissors beats Paper and
/// Paper beats Rock.
///
/// # Example
///
/// ```
/// use rps_engine::Move;
///
/// assert!(Move::Rock.beats(Move::Scissors));
/// assert!(!Move::Rock.beats(Move::Paper));
/// assert!(!Move::Rock.beats(Move::Rock));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum Move {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Distribution<Move> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        match rng.random_range(0..=2) {
            0 => Move::Rock,
            1 => Move::Paper,
            _ => Move::Scissors,
        }
    }
}

impl Move {
    /// Number of moves (3).
    pub const LEN: usize = 3;

    /// All moves in display order.
    pub const ALL: [Move; Self::LEN] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Returns `true` if `self` wins against `other`.
    #[must_use]
    pub const fn beats(self, other: Move) -> bool {
        // Discriminants follow the cycle, so the winner sits one step ahead.
        (self as u8 + 3 - other as u8) % 3 == 1
    }

    /// Returns the unique move that beats `self`.
    #[must_use]
    pub const fn beaten_by(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Returns the unique move that `self` beats.
    #[must_use]
    pub const fn beating(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }

    /// Returns the single lowercase character used as a shortcut for this move.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Move::Rock => 'r',
            Move::Paper => 'p',
            Move::Scissors => 's',
        }
    }

    /// Parses a move from its shortcut character (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use rps_engine::Move;
    ///
    /// assert_eq!(Move::from_char('P'), Some(Move::Paper));
    /// assert_eq!(Move::from_char('x'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'r' => Some(Move::Rock),
            'p' => Some(Move::Paper),
            's' => Some(Move::Scissors),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid move: {input:?} (expected rock, paper or scissors)")]
pub struct ParseMoveError {
    #[error(not(source))]
    input: String,
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(mv) = Move::from_char(c)
        {
            return Ok(mv);
        }
        Move::ALL
            .into_iter()
            .find(|mv| mv.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseMoveError {
                input: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_is_cyclic() {
        assert!(Move::Rock.beats(Move::Scissors));
        assert!(Move::Scissors.beats(Move::Paper));
        assert!(Move::Paper.beats(Move::Rock));

        assert!(!Move::Scissors.beats(Move::Rock));
        assert!(!Move::Paper.beats(Move::Scissors));
        assert!(!Move::Rock.beats(Move::Paper));
    }

    #[test]
    fn test_no_move_beats_itself() {
        for mv in Move::ALL {
            assert!(!mv.beats(mv), "{mv} must not beat itself");
        }
    }

    #[test]
    fn test_exactly_one_winner_between_distinct_moves() {
        for a in Move::ALL {
            for b in Move::ALL {
                if a != b {
                    assert_ne!(a.beats(b), b.beats(a), "{a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn test_beaten_by_and_beating_agree_with_beats() {
        for mv in Move::ALL {
            assert!(mv.beaten_by().beats(mv));
            assert!(mv.beats(mv.beating()));
            assert_eq!(mv.beaten_by().beaten_by(), mv.beating());
        }
    }

    #[test]
    fn test_parse_names_and_shortcuts() {
        assert_eq!("rock".parse::<Move>(), Ok(Move::Rock));
        assert_eq!("PAPER".parse::<Move>(), Ok(Move::Paper));
        assert_eq!("Scissors".parse::<Move>(), Ok(Move::Scissors));
        assert_eq!("s".parse::<Move>(), Ok(Move::Scissors));
        assert_eq!("R".parse::<Move>(), Ok(Move::Rock));
    }

    #[test]
    fn test_parse_rejects_unknown_input() {
        let err = "lizard".parse::<Move>().unwrap_err();
        assert!(err.to_string().contains("lizard"));
        assert!("".parse::<Move>().is_err());
        assert!("rp".parse::<Move>().is_err());
    }

    #[test]
    fn test_sampling_covers_all_moves() {
        let mut rng = rand::rng();
        let mut seen = [false; Move::LEN];
        for _ in 0..1000 {
            let mv: Move = rng.random();
            seen[mv as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
