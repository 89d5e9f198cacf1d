use log::LevelFilter;

use super::CliFlags;

fn level(flags: &CliFlags) -> LevelFilter {
    if flags.quiet {
        return LevelFilter::Error;
    }
    match flags.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Log to stderr at the level the flags ask for; `RUST_LOG` wins.
pub fn init(flags: &CliFlags) {
    env_logger::Builder::new()
        .filter_level(level(flags))
        .parse_default_env()
        .format_timestamp(None)
        .format_module_path(true)
        .target(env_logger::Target::Stderr)
        .init();
}
