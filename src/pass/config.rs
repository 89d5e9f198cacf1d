//! Generation settings and their validation.

use zeroize::Zeroize;

use super::charset::CharSet;
use super::error::ConfigError;

pub const DEFAULT_LENGTH: usize = 12;

/// A validated, immutable generation request.
#[derive(Debug, Clone)]
pub struct Config {
    length: usize,
    mandatory: Vec<CharSet>,
    discretionary: Vec<char>,
}

impl Config {
    pub fn builder(length: usize) -> ConfigBuilder {
        ConfigBuilder::new(length)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn mandatory(&self) -> &[CharSet] {
        &self.mandatory
    }

    pub fn discretionary(&self) -> &[char] {
        &self.discretionary
    }
}

/// Accumulates mandatory sets one at a time, rejecting empty ones as
/// they arrive, then checks the length once in `build`.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    length: usize,
    mandatory: Vec<CharSet>,
    discretionary: Vec<char>,
}

impl ConfigBuilder {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            mandatory: Vec::new(),
            discretionary: Vec::new(),
        }
    }

    pub fn mandatory(mut self, chars: &str) -> Result<Self, ConfigError> {
        self.mandatory.push(CharSet::new(chars)?);
        Ok(self)
    }

    pub fn discretionary(mut self, chars: &str) -> Self {
        self.discretionary = chars.chars().collect();
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        if self.length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if self.length < self.mandatory.len() {
            return Err(ConfigError::LengthBelowMandatory {
                length: self.length,
                sets: self.mandatory.len(),
            });
        }

        Ok(Config {
            length: self.length,
            mandatory: self.mandatory,
            discretionary: self.discretionary,
        })
    }
}

impl Drop for Config {
    fn drop(&mut self) {
        self.discretionary.zeroize();
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH)
    }
}
