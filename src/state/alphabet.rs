//! Character-set lookup.
//!
//! Languages with a small enumerable alphabet get one button per letter.
//! Everything else falls back to typed single-character input.

const ENGLISH: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const SPANISH: &[char] = &[
    'a', 'á', 'b', 'c', 'd', 'e', 'é', 'f', 'g', 'h', 'i', 'í', 'j', 'k', 'l', 'm', 'n', 'ñ',
    'o', 'ó', 'p', 'q', 'r', 's', 't', 'u', 'ú', 'ü', 'v', 'w', 'x', 'y', 'z',
];

const FRENCH: &[char] = &[
    'a', 'à', 'â', 'æ', 'b', 'c', 'ç', 'd', 'e', 'é', 'è', 'ê', 'ë', 'f', 'g', 'h', 'i', 'î',
    'ï', 'j', 'k', 'l', 'm', 'n', 'o', 'ô', 'œ', 'p', 'q', 'r', 's', 't', 'u', 'ù', 'û', 'ü',
    'v', 'w', 'x', 'y', 'ÿ', 'z',
];

const GERMAN: &[char] = &[
    'a', 'ä', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'ö', 'p',
    'q', 'r', 's', 'ß', 't', 'u', 'ü', 'v', 'w', 'x', 'y', 'z',
];

const ITALIAN: &[char] = &[
    'a', 'à', 'b', 'c', 'd', 'e', 'è', 'é', 'f', 'g', 'h', 'i', 'ì', 'j', 'k', 'l', 'm', 'n',
    'o', 'ò', 'p', 'q', 'r', 's', 't', 'u', 'ù', 'v', 'w', 'x', 'y', 'z',
];

const PORTUGUESE: &[char] = &[
    'a', 'á', 'â', 'ã', 'à', 'b', 'c', 'ç', 'd', 'e', 'é', 'ê', 'f', 'g', 'h', 'i', 'í', 'j',
    'k', 'l', 'm', 'n', 'o', 'ó', 'ô', 'õ', 'p', 'q', 'r', 's', 't', 'u', 'ú', 'v', 'w', 'x',
    'y', 'z',
];

const POLISH: &[char] = &[
    'a', 'ą', 'b', 'c', 'ć', 'd', 'e', 'ę', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'ł', 'm', 'n',
    'ń', 'o', 'ó', 'p', 'r', 's', 'ś', 't', 'u', 'w', 'y', 'z', 'ź', 'ż',
];

/// Ordered alphabet for a language, empty when the script can't be
/// offered as discrete buttons.
pub fn alphabet_for(language: &str) -> &'static [char] {
    match language.trim().to_lowercase().as_str() {
        "english" => ENGLISH,
        "spanish" => SPANISH,
        "french" => FRENCH,
        "german" => GERMAN,
        "italian" => ITALIAN,
        "portuguese" => PORTUGUESE,
        "polish" => POLISH,
        _ => &[],
    }
}

/// How the player enters guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// One button per letter, each usable once
    Buttons(&'static [char]),
    /// Free-text single-character entry
    Manual,
}

impl InputMode {
    pub fn for_language(language: &str) -> Self {
        match alphabet_for(language) {
            [] => Self::Manual,
            letters => Self::Buttons(letters),
        }
    }

    pub fn alphabet(&self) -> &'static [char] {
        match self {
            Self::Buttons(letters) => letters,
            Self::Manual => &[],
        }
    }

    pub fn is_manual(&self) -> bool {
        matches!(self, Self::Manual)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buttons(_) => "buttons",
            Self::Manual => "manual",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_alphabets() {
        assert_eq!(alphabet_for("English").len(), 26);
        assert_eq!(alphabet_for("English")[0], 'a');
        assert!(alphabet_for("Spanish").contains(&'ñ'));
        assert!(alphabet_for("German").contains(&'ß'));
        assert!(!alphabet_for("Polish").contains(&'q'));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(alphabet_for("  spanish "), alphabet_for("Spanish"));
        assert_eq!(alphabet_for("FRENCH"), alphabet_for("French"));
    }

    #[test]
    fn test_unsupported_scripts_are_empty() {
        assert!(alphabet_for("Japanese").is_empty());
        assert!(alphabet_for("Russian").is_empty());
        assert!(alphabet_for("").is_empty());
    }

    #[test]
    fn test_input_mode() {
        assert!(InputMode::for_language("Japanese").is_manual());
        assert_eq!(InputMode::for_language("Japanese").alphabet(), &[] as &[char]);

        let mode = InputMode::for_language("english");
        assert_eq!(mode.as_str(), "buttons");
        assert_eq!(mode.alphabet().len(), 26);
    }

    #[test]
    fn test_alphabets_have_no_duplicates() {
        for language in ["English", "Spanish", "French", "German", "Italian", "Portuguese", "Polish"] {
            let letters = alphabet_for(language);
            let unique: std::collections::HashSet<_> = letters.iter().collect();
            assert_eq!(unique.len(), letters.len(), "{language}");
        }
    }
}
