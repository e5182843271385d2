//! Round state.
//!
//! One round is the guessing cycle for a single word, from `start_word`
//! until the phase becomes `Won` or `Lost`.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::phase::Phase;
use crate::error::RoundError;

/// Maximum wrong guesses before a round is lost.
pub const MAX_WRONG_GUESSES: u8 = 6;

/// Drawing stage shown once a round is lost (the complete figure).
pub const LOST_DRAWING_STAGE: u8 = MAX_WRONG_GUESSES + 1;

/// Placeholder for characters not yet guessed.
pub const PLACEHOLDER: char = '_';

/// Lowercase a single character, keeping it unchanged when the lowercase
/// form expands to more than one character.
pub fn fold_letter(letter: char) -> char {
    let mut lower = letter.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(c), None) => c,
        _ => letter,
    }
}

/// Check if a word has at least one character to guess.
pub fn is_playable(word: &str) -> bool {
    word.chars().any(|c| !c.is_whitespace())
}

/// Guessing state for the current word.
#[derive(Debug, Clone)]
pub struct Round {
    word: String,

    /// Folded letters tried this round
    guessed_letters: HashSet<char>,

    wrong_guesses: u8,

    max_wrong_guesses: u8,

    phase: Phase,

    /// When the current word was started
    pub started_at: DateTime<Utc>,

    /// When the round reached a terminal phase
    pub ended_at: Option<DateTime<Utc>>,
}

impl Round {
    /// Create a round with the default wrong-guess limit.
    pub fn new(word: &str) -> Result<Self, RoundError> {
        Self::with_limit(word, MAX_WRONG_GUESSES)
    }

    /// Create a round with a custom wrong-guess limit, clamped to `1..=MAX_WRONG_GUESSES`.
    pub fn with_limit(word: &str, max_wrong_guesses: u8) -> Result<Self, RoundError> {
        if !is_playable(word) {
            return Err(RoundError::EmptyWord);
        }

        Ok(Self {
            word: word.to_string(),
            guessed_letters: HashSet::new(),
            wrong_guesses: 0,
            max_wrong_guesses: max_wrong_guesses.clamp(1, MAX_WRONG_GUESSES),
            phase: Phase::Playing,
            started_at: Utc::now(),
            ended_at: None,
        })
    }

    /// Reset all guess state and start guessing `word`.
    pub fn start_word(&mut self, word: &str) -> Result<(), RoundError> {
        if !is_playable(word) {
            return Err(RoundError::EmptyWord);
        }

        self.word.clear();
        self.word.push_str(word);
        self.guessed_letters.clear();
        self.wrong_guesses = 0;
        self.phase = Phase::Playing;
        self.started_at = Utc::now();
        self.ended_at = None;

        Ok(())
    }

    /// Guess a letter and return the resulting phase.
    ///
    /// Guesses after the round has ended are ignored. Repeating a letter
    /// or guessing whitespace changes nothing.
    pub fn guess(&mut self, letter: char) -> Phase {
        if !self.phase.is_playing() {
            tracing::debug!(letter = %letter, phase = %self.phase, "ignoring guess on finished round");
            return self.phase;
        }

        if letter.is_whitespace() {
            return self.phase;
        }

        let letter = fold_letter(letter);
        if !self.guessed_letters.insert(letter) {
            return self.phase;
        }

        let hit = self.contains(letter);
        if !hit {
            self.wrong_guesses += 1;
        }

        self.phase = self.evaluate();
        if self.phase.is_terminal() {
            self.ended_at = Some(Utc::now());
        }

        tracing::debug!(
            letter = %letter,
            hit,
            wrong_guesses = self.wrong_guesses,
            phase = %self.phase,
            "guess evaluated"
        );

        self.phase
    }

    /// Win before loss. A wrong guess never reveals a letter, so both can't
    /// become true on the same guess.
    fn evaluate(&self) -> Phase {
        if self.is_complete() {
            Phase::Won
        } else if self.wrong_guesses >= self.max_wrong_guesses {
            Phase::Lost
        } else {
            Phase::Playing
        }
    }

    /// Whitespace is never guessed; it is shown from the start.
    fn is_revealed(&self, c: char) -> bool {
        c.is_whitespace() || self.guessed_letters.contains(&fold_letter(c))
    }

    fn contains(&self, folded: char) -> bool {
        self.word
            .chars()
            .any(|c| !c.is_whitespace() && fold_letter(c) == folded)
    }

    fn is_complete(&self) -> bool {
        self.word.chars().all(|c| self.is_revealed(c))
    }

    /// Word with unguessed characters masked, characters separated by spaces.
    ///
    /// Every other character of the output is a character of the word, so
    /// whitespace inside a phrase shows up as a run of three spaces.
    pub fn render_masked(&self) -> String {
        let mut out = String::with_capacity(self.word.len() * 2);
        for (i, c) in self.word.chars().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            if self.is_revealed(c) {
                out.push(c);
            } else {
                out.push(PLACEHOLDER);
            }
        }
        out
    }

    /// Check if a letter has already been tried.
    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&fold_letter(letter))
    }

    /// Word being guessed.
    pub fn current_word(&self) -> &str {
        &self.word
    }

    /// The word, once there is nothing left to guess.
    pub fn revealed_word(&self) -> Option<&str> {
        self.phase.is_terminal().then_some(self.word.as_str())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    pub fn max_wrong_guesses(&self) -> u8 {
        self.max_wrong_guesses
    }

    pub fn remaining_guesses(&self) -> u8 {
        self.max_wrong_guesses.saturating_sub(self.wrong_guesses)
    }

    /// Stage of the gallows drawing to show.
    pub fn drawing_stage(&self) -> u8 {
        match self.phase {
            Phase::Lost => LOST_DRAWING_STAGE,
            _ => self.wrong_guesses,
        }
    }

    /// Guessed letters in sorted order.
    pub fn guessed_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed_letters.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Convert round state to JSON snapshot.
    pub fn to_json(&self) -> serde_json::Value {
        let guessed: Vec<String> = self
            .guessed_letters()
            .into_iter()
            .map(|c| c.to_string())
            .collect();

        serde_json::json!({
            "masked": self.render_masked(),
            "phase": self.phase.as_str(),
            "guessed_letters": guessed,
            "wrong_guesses": self.wrong_guesses,
            "remaining_guesses": self.remaining_guesses(),
            "drawing_stage": self.drawing_stage(),
            "revealed_word": self.revealed_word(),
            "started_at": self.started_at.to_rfc3339(),
            "ended_at": self.ended_at.map(|t| t.to_rfc3339())
        })
    }
}
