use std::path::PathBuf;

/// Errors raised when a round is (re)started.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("cannot start a round with an empty word")]
    EmptyWord,
}

/// Guesses rejected before they reach the round.
///
/// None of these change any state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("manual guess is empty")]
    EmptyInput,

    #[error("manual guess must be a single character, got {0:?}")]
    MultipleCharacters(String),

    #[error("letter {0:?} is not part of this language's alphabet")]
    NotInAlphabet(char),

    #[error("letter buttons are not available for this language")]
    ButtonsUnavailable,

    #[error("manual input is not available for this language")]
    ManualInputUnavailable,
}

/// Errors from driving a session across rounds.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("the current round is still being played")]
    RoundInProgress,

    #[error("the session has no more words")]
    Finished,

    #[error("the session was abandoned while advancing and cannot be reused")]
    Abandoned,

    #[error("provider supplied an unusable word: {0}")]
    Round(#[from] RoundError),

    #[error("word progress provider failed: {0}")]
    Provider(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_guess_error_display() {
        assert_eq!(GuessError::EmptyInput.to_string(), "manual guess is empty");
        assert_eq!(
            GuessError::MultipleCharacters("ab".to_string()).to_string(),
            "manual guess must be a single character, got \"ab\""
        );
    }

    #[test]
    fn test_session_error_from_round_error() {
        let err: SessionError = RoundError::EmptyWord.into();
        assert_eq!(
            err.to_string(),
            "provider supplied an unusable word: cannot start a round with an empty word"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("max_wrong_guesses must be in 1..=6".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: max_wrong_guesses must be in 1..=6"
        );
    }
}
