//! Exit handling: process hardening, signal handlers, and fatal errors.

use std::process;

use crate::cli::prompts;

pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_INTERRUPTED: i32 = 130;

/// Keep the process out of core dumps and ptrace attach before any
/// password material exists.
#[cfg(target_os = "linux")]
pub fn harden() {
    if unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) } != 0 {
        log::warn!("could not mark the process non-dumpable");
    }
}

#[cfg(not(target_os = "linux"))]
pub fn harden() {}

/// Signal handler for SIGINT/SIGTERM/SIGHUP - leave without printing.
#[cfg(unix)]
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::_exit(EXIT_INTERRUPTED) }
}

/// Install signal handlers. Call this early in main().
#[cfg(unix)]
pub fn install_handlers() {
    for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
        unsafe {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

#[cfg(not(unix))]
pub fn install_handlers() {}

/// Report an unrecoverable error and exit. Nothing has been written to
/// stdout at this point.
pub fn fatal(err: &dyn std::error::Error) -> ! {
    log::debug!("fatal: {err:?}");
    prompts::error(&err.to_string());
    process::exit(EXIT_FAILURE)
}
