//! Password generation from a cryptographically secure entropy source, with a heuristic strength
//! score for the result.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod charset;
pub mod entropy;
pub mod password_generation;
pub mod sampler;
pub mod strength;

#[cfg(test)]
mod test_util;

pub use charset::CharacterClass;
pub use entropy::{os_entropy, EntropySource};
pub use password_generation::{
    generate_password, generate_passwords, GenerationRequest, MAX_LENGTH, MIN_LENGTH,
};
pub use strength::{score_password, StrengthReport, StrengthTier};

/// A generated password.
///
/// The `Debug` representation never includes the password itself.
#[derive(Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Password(String);

opaque_debug::implement!(Password);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The number of characters in the password.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Score this password; see [`score_password`].
    pub fn strength(&self) -> StrengthReport {
        score_password(&self.0)
    }
}

impl From<String> for Password {
    fn from(s: String) -> Password {
        Password(s)
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The broad categories of generation failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The request was malformed; retrying it unchanged will fail again.
    InvalidRequest,
    /// The entropy source could not supply bytes. No password, not even a partial one, was
    /// produced.
    EntropyUnavailable,
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct GenerationError(GenerationErrorRepr);

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self.0 {
            GenerationErrorRepr::LengthOutOfRange(_) | GenerationErrorRepr::NoClassesSelected => {
                ErrorKind::InvalidRequest
            }
            GenerationErrorRepr::EntropyUnavailable(_) => ErrorKind::EntropyUnavailable,
        }
    }
}

impl From<GenerationErrorRepr> for GenerationError {
    fn from(err: GenerationErrorRepr) -> GenerationError {
        GenerationError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum GenerationErrorRepr {
    #[error(
        "password length must be between {} and {} characters, not {0}",
        MIN_LENGTH,
        MAX_LENGTH
    )]
    LengthOutOfRange(usize),
    #[error("at least one character class must be selected")]
    NoClassesSelected,
    #[error("the entropy source failed to supply random bytes: {0}")]
    EntropyUnavailable(#[source] rand::Error),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidRequest => f.write_str("invalid request"),
            ErrorKind::EntropyUnavailable => f.write_str("entropy unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, GenerationError, GenerationErrorRepr, Password};

    #[test]
    fn debug_hides_password() {
        let password = Password::from("hunter2hunter2".to_owned());
        assert!(!format!("{password:?}").contains("hunter2"));
    }

    #[test]
    fn password_length_counts_characters() {
        let password = Password::from("abc".to_owned());
        assert_eq!(password.len(), 3);
        assert!(!password.is_empty());
    }

    #[test]
    fn error_kinds() {
        let err = GenerationError::from(GenerationErrorRepr::LengthOutOfRange(7));
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
        assert_eq!(
            err.to_string(),
            "password length must be between 8 and 128 characters, not 7"
        );
        let err = GenerationError::from(GenerationErrorRepr::NoClassesSelected);
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
        let err = GenerationError::from(GenerationErrorRepr::EntropyUnavailable(
            rand::Error::new("gone"),
        ));
        assert_eq!(err.kind(), ErrorKind::EntropyUnavailable);
    }
}
