//! Hangman practice session.
//!
//! Drives rounds over the words a [`WordProgressProvider`] hands out and
//! reports each finished round back to it.
//!
//! # Lifecycle
//!
//! ```text
//!  begin ──▶ Active ──(round over, advance)──▶ Advancing ──▶ Active (next word)
//!                                                  │
//!                                                  ├──▶ Complete (no more words)
//!                                                  │
//!                                                  └──(future dropped)──▶ abandoned
//! ```
//!
//! Advancing always records the outcome before fetching the next word. A
//! provider failure is returned to the caller and the advance can be retried;
//! an outcome that was already recorded is not recorded twice.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::alphabet::InputMode;
use super::phase::{Outcome, Phase};
use super::provider::{NextWord, WordPair, WordProgressProvider};
use super::round::{fold_letter, is_playable, Round};
use crate::config::SessionConfig;
use crate::error::{GuessError, SessionError};

/// Where the session is between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// A round is loaded
    Active,
    /// Outcome recorded, next word not fetched yet
    Recorded,
    /// Waiting on the provider
    Advancing,
    /// The provider has no more words
    Complete,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Recorded => "recorded",
            Self::Advancing => "advancing",
            Self::Complete => "complete",
        }
    }
}

/// Result of a successful advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// A new round has started
    NextWord,
    /// The provider ran out of words
    SessionComplete,
}

/// A letter button and whether it can still be pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterButton {
    pub letter: char,
    pub enabled: bool,
}

fn provider_error<E>(err: E) -> SessionError
where
    E: std::error::Error + Send + Sync + 'static,
{
    warn!(error = %err, "word progress provider failed");
    SessionError::Provider(Box::new(err))
}

/// Fetch the next word that has something to guess, skipping blank entries.
async fn next_playable<P: WordProgressProvider>(provider: &mut P) -> Result<NextWord, SessionError> {
    loop {
        match provider.next_word().await.map_err(provider_error)? {
            NextWord::Word(pair) if !is_playable(&pair.original_word) => {
                warn!(prompt = %pair.translated_word, "skipping word with nothing to guess");
            }
            next => return Ok(next),
        }
    }
}

/// One practice session over a word set.
#[derive(Debug)]
pub struct HangmanSession<P> {
    provider: P,
    pair: WordPair,
    round: Round,
    input_mode: InputMode,
    manual_input: String,
    status: SessionStatus,
    max_wrong_guesses: u8,
    rounds_won: u32,
    rounds_lost: u32,
}

impl<P: WordProgressProvider> HangmanSession<P> {
    /// Start a session by loading the first word.
    ///
    /// Returns `None` when the provider has nothing to practice.
    pub async fn begin(
        mut provider: P,
        language: &str,
        config: &SessionConfig,
    ) -> Result<Option<Self>, SessionError> {
        let language = config.language_or_fallback(language);
        let input_mode = InputMode::for_language(language);

        let pair = match next_playable(&mut provider).await? {
            NextWord::Word(pair) => pair,
            NextWord::SessionComplete => {
                info!(language, "nothing to practice");
                return Ok(None);
            }
        };

        let round = Round::with_limit(&pair.original_word, config.max_wrong_guesses)?;
        info!(language, input_mode = input_mode.as_str(), "hangman session started");

        Ok(Some(Self {
            provider,
            pair,
            round,
            input_mode,
            manual_input: String::new(),
            status: SessionStatus::Active,
            max_wrong_guesses: config.max_wrong_guesses,
            rounds_won: 0,
            rounds_lost: 0,
        }))
    }

    /// Guess a letter. Ignored once the round is over.
    pub fn guess(&mut self, letter: char) -> Phase {
        self.round.guess(letter)
    }

    /// Press a letter button.
    pub fn press(&mut self, letter: char) -> Result<Phase, GuessError> {
        match self.input_mode {
            InputMode::Manual => Err(GuessError::ButtonsUnavailable),
            InputMode::Buttons(alphabet) => {
                if !alphabet.contains(&fold_letter(letter)) {
                    return Err(GuessError::NotInAlphabet(letter));
                }
                Ok(self.round.guess(letter))
            }
        }
    }

    /// Replace the manual input buffer.
    pub fn set_manual_input(&mut self, text: impl Into<String>) {
        self.manual_input = text.into();
    }

    pub fn manual_input(&self) -> &str {
        &self.manual_input
    }

    /// Submit the manual input buffer as a guess.
    ///
    /// Rejected input leaves both the round and the buffer untouched.
    pub fn submit_manual_input(&mut self) -> Result<Phase, GuessError> {
        if !self.input_mode.is_manual() {
            return Err(GuessError::ManualInputUnavailable);
        }

        let mut chars = self.manual_input.chars();
        let letter = match (chars.next(), chars.next()) {
            (None, _) => return Err(GuessError::EmptyInput),
            (Some(c), None) => c,
            _ => return Err(GuessError::MultipleCharacters(self.manual_input.clone())),
        };

        self.manual_input.clear();
        Ok(self.round.guess(letter))
    }

    /// Buttons for the current alphabet, disabled once guessed.
    pub fn letter_buttons(&self) -> Vec<LetterButton> {
        self.input_mode
            .alphabet()
            .iter()
            .map(|&letter| LetterButton {
                letter,
                enabled: !self.round.is_guessed(letter),
            })
            .collect()
    }

    /// Report the round with the outcome its phase implies and move on.
    pub async fn advance(&mut self) -> Result<Advance, SessionError> {
        let outcome = self
            .round
            .phase()
            .outcome()
            .ok_or(SessionError::RoundInProgress)?;
        self.resolve_and_advance(outcome).await
    }

    /// Report `outcome` for the finished round, then load the next word.
    pub async fn resolve_and_advance(&mut self, outcome: Outcome) -> Result<Advance, SessionError> {
        match self.status {
            SessionStatus::Complete => return Err(SessionError::Finished),
            SessionStatus::Advancing => return Err(SessionError::Abandoned),
            SessionStatus::Active | SessionStatus::Recorded => {}
        }
        if self.round.phase().is_playing() {
            return Err(SessionError::RoundInProgress);
        }

        if self.status == SessionStatus::Active {
            self.status = SessionStatus::Advancing;
            let recorded = self
                .provider
                .record_outcome(&self.pair.original_word, outcome)
                .await;
            if let Err(e) = recorded {
                self.status = SessionStatus::Active;
                return Err(provider_error(e));
            }

            match self.round.phase() {
                Phase::Won => self.rounds_won += 1,
                _ => self.rounds_lost += 1,
            }
            self.status = SessionStatus::Recorded;
            info!(
                word = %self.pair.original_word,
                outcome = %outcome,
                phase = %self.round.phase(),
                "round recorded"
            );
        }

        self.status = SessionStatus::Advancing;
        let next = match next_playable(&mut self.provider).await {
            Ok(next) => next,
            Err(e) => {
                self.status = SessionStatus::Recorded;
                return Err(e);
            }
        };

        match next {
            NextWord::Word(pair) => {
                if let Err(e) = self.round.start_word(&pair.original_word) {
                    self.status = SessionStatus::Recorded;
                    return Err(e.into());
                }
                debug!(word = %pair.original_word, "next word loaded");
                self.pair = pair;
                self.manual_input.clear();
                self.status = SessionStatus::Active;
                Ok(Advance::NextWord)
            }
            NextWord::SessionComplete => {
                self.status = SessionStatus::Complete;
                info!(
                    won = self.rounds_won,
                    lost = self.rounds_lost,
                    "hangman session complete"
                );
                Ok(Advance::SessionComplete)
            }
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn phase(&self) -> Phase {
        self.round.phase()
    }

    pub fn render_masked(&self) -> String {
        self.round.render_masked()
    }

    pub fn current_word(&self) -> &str {
        self.round.current_word()
    }

    pub fn wrong_guesses(&self) -> u8 {
        self.round.wrong_guesses()
    }

    pub fn current_pair(&self) -> &WordPair {
        &self.pair
    }

    /// Word shown to the player in the first language.
    pub fn prompt(&self) -> &str {
        &self.pair.translated_word
    }

    /// Progress of the current word as a percentage.
    pub fn progress_percent(&self) -> f64 {
        self.pair.progress * 100.0
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status == SessionStatus::Complete
    }

    pub fn max_wrong_guesses(&self) -> u8 {
        self.max_wrong_guesses
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn into_provider(self) -> P {
        self.provider
    }

    /// Convert session state to JSON snapshot.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "status": self.status.as_str(),
            "prompt": self.prompt(),
            "progress_percent": self.progress_percent(),
            "input_mode": self.input_mode.as_str(),
            "letter_buttons": self.letter_buttons(),
            "manual_input": self.manual_input,
            "rounds_won": self.rounds_won,
            "rounds_lost": self.rounds_lost,
            "round": self.round.to_json()
        })
    }
}
