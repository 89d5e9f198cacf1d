use clap::Parser;

mod cli;
mod exits;
mod pass;
mod rand;

use cli::{CliFlags, Context};

fn main() {
    exits::install_handlers();

    let flags = CliFlags::parse();
    cli::logging::init(&flags);
    exits::harden();

    if let Err(e) = Context::new(flags).run() {
        exits::fatal(&e);
    }
}
