//! Word-Set Hangman
//!
//! This crate provides the game state for hangman practice over a word set.
//!
//! # Overview
//!
//! - **Round** - Tracks one word's guesses, wrong-guess count and phase
//!   (playing, won, lost), and renders the masked word.
//!
//! - **Alphabet lookup** - Languages with a small alphabet get letter
//!   buttons; other scripts fall back to typed single-character guesses.
//!
//! - **Session** - Walks through the words of a word set, reporting each
//!   finished round to a progress provider before loading the next word.
//!
//! # Design Principles
//!
//! 1. **Phase is recomputed on every guess** - No hidden re-evaluation.
//!
//! 2. **Guesses never fail fatally** - Late guesses are no-ops, bad manual
//!    input is rejected without touching state.
//!
//! 3. **No UI, no storage** - Persistence belongs to the provider.
//!
//! 4. **Serialization-ready** - Snapshots convert to JSON for clients.
//!
//! # Example
//!
//! ```rust
//! use wordset_hangman::{Phase, Round};
//!
//! let mut round = Round::new("gracias").unwrap();
//! for letter in ['g', 'r', 'a', 'c', 'i'] {
//!     round.guess(letter);
//! }
//! assert_eq!(round.render_masked(), "g r a c i a _");
//! assert_eq!(round.guess('s'), Phase::Won);
//! assert_eq!(round.wrong_guesses(), 0);
//! ```

pub mod config;
pub mod error;
pub mod state;

pub use config::SessionConfig;
pub use error::{ConfigError, GuessError, RoundError, SessionError};

// Re-export everything from state module at crate root
pub use state::*;
