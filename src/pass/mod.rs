//! Password generation.

pub mod charset;
pub mod config;
mod error;
mod generate;

pub use config::Config;
pub use error::{ConfigError, GenerationError};
pub use generate::{Password, generate};
