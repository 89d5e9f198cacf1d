mod context;
mod flags;
pub mod logging;
pub mod prompts;

pub use context::{CliError, Context};
pub use flags::CliFlags;
