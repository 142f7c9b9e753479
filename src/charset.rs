//! The character classes a password may be drawn from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named category of characters, each with a fixed alphabet.
///
/// The derived ordering (uppercase, lowercase, digit, special) is the order in which classes are
/// visited during generation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    /// The characters belonging to this class. All alphabets are ASCII and pairwise disjoint.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    pub fn contains(self, ch: char) -> bool {
        self.alphabet().contains(ch)
    }

    /// The class `ch` belongs to, if any.
    pub fn of(ch: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(ch))
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digit => "digit",
            CharacterClass::Special => "special",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
static DIGITS: &str = "0123456789";
static SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
