//! Character variety section - lowercase, uppercase, digits, symbols.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::SectionScore;

static LOWERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]").unwrap());
static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").unwrap());
static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").unwrap());
static SYMBOL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]").unwrap());

/// A character class that contributes to the variety bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    /// Anything outside `a-zA-Z0-9`, including non-ASCII letters.
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    fn pattern(&self) -> &'static Regex {
        match self {
            CharClass::Lowercase => &LOWERCASE,
            CharClass::Uppercase => &UPPERCASE,
            CharClass::Digit => &DIGIT,
            CharClass::Symbol => &SYMBOL,
        }
    }

    /// Whether `password` contains at least one character of this class.
    pub fn is_present(&self, password: &str) -> bool {
        self.pattern().is_match(password)
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digit => "numbers",
            CharClass::Symbol => "special characters",
        };
        f.write_str(name)
    }
}

/// Character classes absent from the password, in display order.
pub fn missing_classes(password: &str) -> Vec<CharClass> {
    CharClass::ALL
        .into_iter()
        .filter(|class| !class.is_present(password))
        .collect()
}

/// One point per character class present (max 4).
pub fn character_variety_section(password: &str) -> SectionScore {
    CharClass::ALL
        .iter()
        .filter(|class| class.is_present(password))
        .count() as SectionScore
}
