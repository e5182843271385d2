//! Word supply and progress tracking.
//!
//! A session pulls words from a [`WordProgressProvider`] and reports how each
//! round went. Persistence is the provider's business; [`InMemoryProvider`]
//! keeps everything in memory.

use std::collections::VecDeque;
use std::future::Future;

use serde::{Deserialize, Serialize};

use super::phase::Outcome;

/// Default progress change per recorded outcome.
pub const DEFAULT_PROGRESS_STEP: f64 = 0.25;

/// A vocabulary pair.
///
/// `original_word` is the target-language word the player guesses,
/// `translated_word` is the prompt shown in the first language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPair {
    pub original_word: String,
    pub translated_word: String,
    /// Mastery score in `0.0..=1.0`
    #[serde(default)]
    pub progress: f64,
}

impl WordPair {
    pub fn new(original_word: impl Into<String>, translated_word: impl Into<String>) -> Self {
        Self {
            original_word: original_word.into(),
            translated_word: translated_word.into(),
            progress: 0.0,
        }
    }

    pub fn with_progress(mut self, progress: f64) -> Self {
        self.progress = progress.clamp(0.0, 1.0);
        self
    }

    pub fn is_mastered(&self) -> bool {
        self.progress >= 1.0
    }
}

/// A named collection of word pairs across two languages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordSet {
    pub title: String,
    pub first_language: String,
    pub second_language: String,
    #[serde(default)]
    pub words: Vec<WordPair>,
}

/// Result of asking the provider for another word.
#[derive(Debug, Clone, PartialEq)]
pub enum NextWord {
    Word(WordPair),
    SessionComplete,
}

/// Source of words to practice and sink for mastery outcomes.
///
/// Callers await `record_outcome` before asking for the next word.
pub trait WordProgressProvider {
    type Error: std::error::Error + Send + Sync + 'static;

    fn next_word(&mut self) -> impl Future<Output = Result<NextWord, Self::Error>>;

    fn record_outcome(
        &mut self,
        word: &str,
        outcome: Outcome,
    ) -> impl Future<Output = Result<(), Self::Error>>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InMemoryError {
    #[error("word {0:?} is not part of this word set")]
    UnknownWord(String),
}

/// Provider backed by an in-memory word set.
///
/// Words are served in order. A known word gains progress and is retired;
/// an unknown word loses progress and goes to the back of the queue.
/// Words that are already mastered are never served. Pairs sharing the same
/// target word stay distinct; an outcome applies to the pair served last.
#[derive(Debug, Clone)]
pub struct InMemoryProvider {
    words: Vec<WordPair>,
    /// Indices into `words`
    queue: VecDeque<usize>,
    /// Index of the pair handed out by the last `next_word`
    served: Option<usize>,
    step: f64,
    history: Vec<(String, Outcome)>,
}

impl InMemoryProvider {
    pub fn new(words: Vec<WordPair>) -> Self {
        let queue = words
            .iter()
            .enumerate()
            .filter(|(_, w)| !w.is_mastered())
            .map(|(i, _)| i)
            .collect();

        Self {
            words,
            queue,
            served: None,
            step: DEFAULT_PROGRESS_STEP,
            history: Vec::new(),
        }
    }

    pub fn from_word_set(set: &WordSet) -> Self {
        Self::new(set.words.clone())
    }

    /// Set the progress change per outcome, clamped to `0.0..=1.0`.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step.clamp(0.0, 1.0);
        self
    }

    /// Get the first pair for a word.
    pub fn get(&self, word: &str) -> Option<&WordPair> {
        self.words.iter().find(|w| w.original_word == word)
    }

    /// Get the first pair's progress for a word.
    pub fn progress(&self, word: &str) -> Option<f64> {
        self.get(word).map(|w| w.progress)
    }

    /// All pairs in word-set order.
    pub fn pairs(&self) -> &[WordPair] {
        &self.words
    }

    /// Words still waiting to be served.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Outcomes recorded so far, oldest first.
    pub fn history(&self) -> &[(String, Outcome)] {
        &self.history
    }

    /// Pair an outcome refers to: the one served last if it matches,
    /// otherwise the first pair with that word.
    fn resolve(&self, word: &str) -> Option<usize> {
        self.served
            .filter(|&i| self.words[i].original_word == word)
            .or_else(|| self.words.iter().position(|w| w.original_word == word))
    }
}

impl WordProgressProvider for InMemoryProvider {
    type Error = InMemoryError;

    async fn next_word(&mut self) -> Result<NextWord, Self::Error> {
        let Some(index) = self.queue.pop_front() else {
            self.served = None;
            return Ok(NextWord::SessionComplete);
        };

        self.served = Some(index);
        Ok(NextWord::Word(self.words[index].clone()))
    }

    async fn record_outcome(&mut self, word: &str, outcome: Outcome) -> Result<(), Self::Error> {
        let index = self
            .resolve(word)
            .ok_or_else(|| InMemoryError::UnknownWord(word.to_string()))?;
        let pair = &mut self.words[index];

        match outcome {
            Outcome::Known => {
                pair.progress = (pair.progress + self.step).min(1.0);
            }
            Outcome::Unknown => {
                pair.progress = (pair.progress - self.step).max(0.0);
                self.queue.push_back(index);
            }
        }

        self.history.push((word.to_string(), outcome));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words() -> Vec<WordPair> {
        vec![
            WordPair::new("hola", "hello"),
            WordPair::new("gracias", "thank you"),
            WordPair::new("adiós", "goodbye").with_progress(1.0),
        ]
    }

    #[tokio::test]
    async fn test_serves_in_order_and_skips_mastered() {
        let mut provider = InMemoryProvider::new(words());
        assert_eq!(provider.remaining(), 2);

        assert_eq!(
            provider.next_word().await.unwrap(),
            NextWord::Word(WordPair::new("hola", "hello"))
        );
        assert_eq!(
            provider.next_word().await.unwrap(),
            NextWord::Word(WordPair::new("gracias", "thank you"))
        );
        assert_eq!(provider.next_word().await.unwrap(), NextWord::SessionComplete);
    }

    #[tokio::test]
    async fn test_known_raises_progress() {
        let mut provider = InMemoryProvider::new(words()).with_step(0.5);
        provider.next_word().await.unwrap();

        provider.record_outcome("hola", Outcome::Known).await.unwrap();
        assert_eq!(provider.progress("hola"), Some(0.5));
        provider.record_outcome("hola", Outcome::Known).await.unwrap();
        provider.record_outcome("hola", Outcome::Known).await.unwrap();
        assert_eq!(provider.progress("hola"), Some(1.0));
        assert_eq!(provider.remaining(), 1);
    }

    #[tokio::test]
    async fn test_unknown_requeues_word() {
        let mut provider = InMemoryProvider::new(words());
        provider.next_word().await.unwrap();

        provider.record_outcome("hola", Outcome::Unknown).await.unwrap();
        assert_eq!(provider.progress("hola"), Some(0.0));

        provider.next_word().await.unwrap();
        let again = provider.next_word().await.unwrap();
        assert_eq!(again, NextWord::Word(WordPair::new("hola", "hello")));
        assert_eq!(
            provider.history(),
            &[("hola".to_string(), Outcome::Unknown)]
        );
    }

    #[tokio::test]
    async fn test_unknown_word_rejected() {
        let mut provider = InMemoryProvider::new(words());
        let err = provider
            .record_outcome("perro", Outcome::Known)
            .await
            .unwrap_err();
        assert_eq!(err, InMemoryError::UnknownWord("perro".to_string()));
        assert!(provider.history().is_empty());
    }

    #[tokio::test]
    async fn test_homonyms_stay_distinct() {
        let mut provider = InMemoryProvider::new(vec![
            WordPair::new("banco", "bank"),
            WordPair::new("banco", "bench"),
        ]);

        assert_eq!(
            provider.next_word().await.unwrap(),
            NextWord::Word(WordPair::new("banco", "bank"))
        );
        provider.record_outcome("banco", Outcome::Known).await.unwrap();

        assert_eq!(
            provider.next_word().await.unwrap(),
            NextWord::Word(WordPair::new("banco", "bench"))
        );
        provider.record_outcome("banco", Outcome::Unknown).await.unwrap();

        let progress: Vec<f64> = provider.pairs().iter().map(|w| w.progress).collect();
        assert_eq!(progress, vec![0.25, 0.0]);
        assert_eq!(
            provider.next_word().await.unwrap(),
            NextWord::Word(WordPair::new("banco", "bench"))
        );
        assert_eq!(provider.next_word().await.unwrap(), NextWord::SessionComplete);
    }

    #[test]
    fn test_word_set_from_json() {
        let set: WordSet = serde_json::from_str(
            r#"{
                "title": "Everyday Vocabulary",
                "firstLanguage": "English",
                "secondLanguage": "Spanish",
                "words": [
                    {"originalWord": "hola", "translatedWord": "hello", "progress": 0.9},
                    {"originalWord": "perdón", "translatedWord": "excuse me"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(set.words.len(), 2);
        assert_eq!(set.words[1].progress, 0.0);

        let provider = InMemoryProvider::from_word_set(&set);
        assert_eq!(provider.progress("hola"), Some(0.9));
        assert_eq!(provider.remaining(), 2);
    }
}
