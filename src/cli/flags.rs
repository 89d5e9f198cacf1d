use clap::{ArgAction, Parser};

use crate::pass::ConfigError;
use crate::pass::charset::{FLAG_DIGIT, FLAG_LOWER, FLAG_UPPER};
use crate::pass::config::DEFAULT_LENGTH;

const DEFAULT_ADD: &str = "lud";

/// Generate a random password with at least one character from every
/// mandatory set.
#[derive(Debug, Parser)]
#[command(name = "mustpass", version)]
pub struct CliFlags {
    /// The length of the password to be generated
    #[arg(short, long, env = "MUSTPASS_LENGTH", default_value_t = DEFAULT_LENGTH)]
    pub length: usize,

    /// Add lower-case (l), upper-case letters (u) or digits (d) to the
    /// list of mandatory sets
    #[arg(short, long, env = "MUSTPASS_ADD", default_value = DEFAULT_ADD)]
    pub add: String,

    /// Add a custom mandatory set; repeat to add several sets
    #[arg(short, long = "must", value_name = "SET", value_parser = non_empty_set)]
    pub must: Vec<String>,

    /// Discretionary (optional) characters to fill the rest from
    #[arg(short = 'd', long = "optional", visible_alias = "discretionary", value_name = "CHARS")]
    pub optional: Option<String>,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log more (repeat for debug and trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn non_empty_set(value: &str) -> Result<String, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::EmptyMandatorySet);
    }
    Ok(value.to_owned())
}

impl CliFlags {
    /// Whether `--add` names at least one built-in set.
    pub fn has_builtin_sets(&self) -> bool {
        self.add.contains([FLAG_LOWER, FLAG_UPPER, FLAG_DIGIT])
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> Result<CliFlags, clap::Error> {
        CliFlags::try_parse_from(std::iter::once("mustpass").chain(args.iter().copied()))
    }

    #[test]
    fn command_is_well_formed() {
        CliFlags::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let flags = parse(&[]).unwrap();
        assert_eq!(flags.length, 12);
        assert_eq!(flags.add, "lud");
        assert!(flags.must.is_empty());
        assert_eq!(flags.optional, None);
        assert!(flags.has_builtin_sets());
    }

    #[test]
    fn short_and_long_forms() {
        let short = parse(&["-l", "20", "-a", "ld", "-m", "!?", "-d", "_-"]).unwrap();
        let long = parse(&[
            "--length", "20", "--add", "ld", "--must", "!?", "--optional", "_-",
        ])
        .unwrap();

        for flags in [short, long] {
            assert_eq!(flags.length, 20);
            assert_eq!(flags.add, "ld");
            assert_eq!(flags.must, vec!["!?"]);
            assert_eq!(flags.optional.as_deref(), Some("_-"));
        }
    }

    #[test]
    fn discretionary_alias() {
        let flags = parse(&["--discretionary", "xyz"]).unwrap();
        assert_eq!(flags.optional.as_deref(), Some("xyz"));
    }

    #[test]
    fn must_repeats() {
        let flags = parse(&["-m", "abc", "--must", "123", "-m", "#"]).unwrap();
        assert_eq!(flags.must, vec!["abc", "123", "#"]);
    }

    #[test]
    fn empty_must_is_rejected() {
        let err = parse(&["-m", ""]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn empty_add_selects_nothing() {
        let flags = parse(&["-a", ""]).unwrap();
        assert!(!flags.has_builtin_sets());
    }

    #[test]
    fn negative_length_is_rejected() {
        assert!(parse(&["-l", "-3"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let err = parse(&["-q", "-v"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn verbose_counts() {
        assert_eq!(parse(&["-vvv"]).unwrap().verbose, 3);
    }
}
