//! Hangman state management.
//!
//! This module provides the state types and the session driver:
//!
//! - `phase` - Round phase and mastery outcome
//! - `round` - Guess tracking for one word
//! - `alphabet` - Character-set lookup per language
//! - `provider` - Word pairs and the progress provider seam
//! - `session` - Practice session over a word set
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                      HangmanSession<P>                           │
//! │                                                                  │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────────────┐  │
//! │  │    Round     │   │  InputMode   │   │ WordProgressProvider │  │
//! │  │              │   │              │   │                      │  │
//! │  │ current word │   │ Buttons(abc) │   │ next_word()          │  │
//! │  │ guessed set  │   │   or Manual  │   │ record_outcome()     │  │
//! │  │ wrong count  │   │              │   │                      │  │
//! │  │ phase        │   │ manual input │   │                      │  │
//! │  └──────────────┘   └──────────────┘   └──────────────────────┘  │
//! │                                                                  │
//! │   guess ──▶ Round::guess ──▶ Playing / Won / Lost                │
//! │   advance ──▶ record_outcome ──▶ next_word ──▶ start_word        │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use wordset_hangman::state::{round::Round, Phase};
//!
//! let mut round = Round::new("hola")?;
//! round.guess('h');
//! assert_eq!(round.render_masked(), "h _ _ _");
//! assert_eq!(round.phase(), Phase::Playing);
//! ```

pub mod alphabet;
pub mod phase;
pub mod provider;
pub mod round;
pub mod session;

// Re-export commonly used types
pub use alphabet::{alphabet_for, InputMode};
pub use phase::{Outcome, Phase};
pub use provider::{
    InMemoryError, InMemoryProvider, NextWord, WordPair, WordProgressProvider, WordSet,
    DEFAULT_PROGRESS_STEP,
};
pub use round::{Round, LOST_DRAWING_STAGE, MAX_WRONG_GUESSES, PLACEHOLDER};
pub use session::{Advance, HangmanSession, LetterButton, SessionStatus};
