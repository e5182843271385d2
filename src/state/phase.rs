//! Round phase and mastery outcome.
//!
//! # State Diagram
//!
//! ```text
//!                 correct guess, word incomplete
//!                 wrong guess, limit not reached
//!                        ┌───────┐
//!                        ▼       │
//!  start_word ──▶ ┌─────────────┐│
//!                 │   Playing   │┘
//!                 └──────┬──────┘
//!          word complete │  limit reached
//!                ┌───────┴───────┐
//!                ▼               ▼
//!          ┌──────────┐    ┌──────────┐
//!          │   Won    │    │   Lost   │
//!          └──────────┘    └──────────┘
//!                │               │
//!                └──── Known / Unknown ──▶ provider, next start_word
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Phase of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Guesses are accepted
    #[default]
    Playing,
    /// Every character of the word has been guessed
    Won,
    /// The wrong-guess limit was reached
    Lost,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }

    /// Check if the round still accepts guesses.
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Check if the round is over.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Outcome to report for a finished round.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Playing => None,
            Self::Won => Some(Outcome::Known),
            Self::Lost => Some(Outcome::Unknown),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mastery feedback forwarded to the progress provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Known,
    Unknown,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Known => "known",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_outcome() {
        assert_eq!(Phase::Playing.outcome(), None);
        assert_eq!(Phase::Won.outcome(), Some(Outcome::Known));
        assert_eq!(Phase::Lost.outcome(), Some(Outcome::Unknown));
    }

    #[test]
    fn test_phase_flags() {
        assert!(Phase::Playing.is_playing());
        assert!(!Phase::Playing.is_terminal());
        assert!(Phase::Won.is_terminal());
        assert!(Phase::Lost.is_terminal());
        assert_eq!(Phase::default(), Phase::Playing);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Phase::Lost), "lost");
        assert_eq!(Outcome::Known.to_string(), "known");
    }
}
