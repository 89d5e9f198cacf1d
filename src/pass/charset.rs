//! Character sets for password generation.

use std::num::NonZeroUsize;
use std::ops::Deref;

use zeroize::Zeroize;

use super::error::ConfigError;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";

pub const FLAG_LOWER: char = 'l';
pub const FLAG_UPPER: char = 'u';
pub const FLAG_DIGIT: char = 'd';

/// A non-empty, ordered set of characters. Duplicates are kept and weigh
/// their character's odds accordingly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet(Vec<char>);

impl CharSet {
    pub fn new(chars: &str) -> Result<Self, ConfigError> {
        if chars.is_empty() {
            return Err(ConfigError::EmptyMandatorySet);
        }
        Ok(Self(chars.chars().collect()))
    }

    /// Never zero; `new` rejects empty input.
    pub fn size(&self) -> NonZeroUsize {
        NonZeroUsize::MIN.saturating_add(self.0.len() - 1)
    }
}

impl Deref for CharSet {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.0
    }
}

impl Drop for CharSet {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Built-in sets selected by the letters of an `--add` value.
///
/// Always returned in lower, upper, digit order, each at most once.
/// Letters outside `l`, `u`, `d` are returned separately so the caller
/// can report them.
pub fn builtin(selection: &str) -> (Vec<&'static str>, Vec<char>) {
    let mut sets = Vec::with_capacity(3);
    if selection.contains(FLAG_LOWER) {
        sets.push(LOWERCASE);
    }
    if selection.contains(FLAG_UPPER) {
        sets.push(UPPERCASE);
    }
    if selection.contains(FLAG_DIGIT) {
        sets.push(DIGITS);
    }

    let mut unknown: Vec<char> = selection
        .chars()
        .filter(|c| ![FLAG_LOWER, FLAG_UPPER, FLAG_DIGIT].contains(c))
        .collect();
    unknown.dedup();

    (sets, unknown)
}
