//! Utilities for generating passwords.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::charset::CharacterClass;
use crate::entropy::EntropySource;
use crate::sampler::sample_uniform;
use crate::{GenerationError, GenerationErrorRepr, Password};

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 128;

/// What to generate: a length, and the classes of characters the password must draw from.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: BTreeSet<CharacterClass>,
}

impl GenerationRequest {
    /// Build a request, validating it.
    pub fn new<I>(length: usize, classes: I) -> Result<GenerationRequest, GenerationError>
    where
        I: IntoIterator<Item = CharacterClass>,
    {
        let request = GenerationRequest {
            length,
            classes: classes.into_iter().collect(),
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            log::debug!("rejecting request for a {}-character password", self.length);
            return Err(GenerationErrorRepr::LengthOutOfRange(self.length).into());
        }
        if self.classes.is_empty() {
            log::debug!("rejecting request with no character classes");
            return Err(GenerationErrorRepr::NoClassesSelected.into());
        }
        Ok(())
    }

    /// Every selected class's alphabet, concatenated in class order.
    fn combined_alphabet(&self) -> String {
        self.classes.iter().map(|class| class.alphabet()).collect()
    }
}

impl Default for GenerationRequest {
    fn default() -> GenerationRequest {
        GenerationRequest {
            length: 16,
            classes: CharacterClass::ALL.into_iter().collect(),
        }
    }
}

/// Generate a password satisfying `request`.
///
/// One character is drawn from each selected class, the rest of the length is filled by sampling
/// the combined alphabet, and then each of the per-class characters is spliced into the filler at
/// a position sampled over the sequence as it stands before that insertion. The per-class
/// characters are inserted in class order. Every random decision goes through
/// [`sample_uniform`], so there is no modulo bias anywhere.
///
/// If the entropy source fails part way through, the error is returned and whatever was drawn so
/// far is discarded.
pub fn generate_password<S>(
    source: &mut S,
    request: &GenerationRequest,
) -> Result<Password, GenerationError>
where
    S: EntropySource + ?Sized,
{
    request.validate()?;
    log::debug!(
        "generating a {}-character password from classes {:?}",
        request.length,
        request.classes
    );

    let combined_alphabet = request.combined_alphabet();

    let mut required = Vec::with_capacity(request.classes.len());
    for class in request.classes.iter() {
        required.push(choose(source, class.alphabet())?);
    }

    // Can't underflow: there are at most four classes, and the minimum length is eight.
    let filler_length = request.length - required.len();
    let mut password = Vec::with_capacity(request.length);
    for _ in 0..filler_length {
        password.push(choose(source, &combined_alphabet)?);
    }

    for ch in required {
        let position = sample(source, 0, password.len())?;
        password.insert(position, ch);
    }

    debug_assert_eq!(password.len(), request.length);
    Ok(Password(password.into_iter().collect()))
}

/// Generate `count` independent passwords for the same request.
pub fn generate_passwords<S>(
    source: &mut S,
    request: &GenerationRequest,
    count: usize,
) -> Result<Vec<Password>, GenerationError>
where
    S: EntropySource + ?Sized,
{
    request.validate()?;
    (0..count)
        .map(|_| generate_password(source, request))
        .collect()
}

/// Pick a character uniformly from an ASCII alphabet.
fn choose<S>(source: &mut S, alphabet: &str) -> Result<char, GenerationError>
where
    S: EntropySource + ?Sized,
{
    let index = sample(source, 0, alphabet.len() - 1)?;
    Ok(char::from(alphabet.as_bytes()[index]))
}

fn sample<S>(source: &mut S, min: usize, max: usize) -> Result<usize, GenerationError>
where
    S: EntropySource + ?Sized,
{
    let value = sample_uniform(source, min as u64, max as u64)
        .map_err(GenerationErrorRepr::EntropyUnavailable)?;
    Ok(value as usize)
}
