//! Messages for the operator on stderr.

use std::io::{self, Write};

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

/// Print an error message to stderr, red when stderr is a terminal.
pub fn error(msg: &str) {
    let stderr = io::stderr();
    let styled = stderr.is_tty();
    let mut err = stderr.lock();

    let _ = if styled {
        writeln!(err, "{}", msg.red())
    } else {
        writeln!(err, "{msg}")
    };
}
