//! CLI context - turns parsed flags into a configuration and prints the
//! password.

use std::io::{self, Write};

use thiserror::Error;

use super::CliFlags;
use crate::pass::{self, Config, ConfigError, GenerationError, charset};
use crate::rand::SecureIndex;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("failed to write the password: {0}")]
    Output(#[from] io::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Generation(err.into())
    }
}

/// Application context for CLI mode.
pub struct Context {
    flags: CliFlags,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        Self { flags }
    }

    /// Build the configuration: selected built-in sets first, then every
    /// `--must` set in the order given.
    pub fn config(&self) -> Result<Config, ConfigError> {
        let (builtin, unknown) = charset::builtin(&self.flags.add);
        if !unknown.is_empty() {
            log::warn!(
                "ignoring unknown set letters in --add: {}",
                unknown.iter().collect::<String>()
            );
        }
        if !self.flags.has_builtin_sets() && self.flags.must.is_empty() {
            log::info!("no mandatory sets selected");
        }

        let custom = self.flags.must.iter().map(String::as_str);
        let mut builder = Config::builder(self.flags.length);
        for set in builtin.into_iter().chain(custom) {
            builder = builder.mandatory(set)?;
        }
        if let Some(chars) = &self.flags.optional {
            builder = builder.discretionary(chars);
        }

        builder.build()
    }

    /// Generate one password and print it on its own line.
    pub fn run(&self) -> Result<(), CliError> {
        let password = self.password()?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(password.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }

    fn password(&self) -> Result<pass::Password, CliError> {
        let config = self.config()?;
        log::info!(
            "{} mandatory sets, {} discretionary characters",
            config.mandatory().len(),
            config.discretionary().len()
        );
        Ok(pass::generate(&config, &mut SecureIndex::os())?)
    }
}
