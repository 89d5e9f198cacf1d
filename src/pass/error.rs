use thiserror::Error;

/// A configuration that can never produce a valid password.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the length of the password must be positive")]
    ZeroLength,

    #[error("the length of the password ({length}) must be at least the number of mandatory sets ({sets})")]
    LengthBelowMandatory { length: usize, sets: usize },

    #[error("a mandatory set cannot be empty")]
    EmptyMandatorySet,
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("need some characters to select from")]
    EmptyPool,

    #[error("secure random source failed: {0}")]
    RandomSource(#[from] rand_core::Error),
}
