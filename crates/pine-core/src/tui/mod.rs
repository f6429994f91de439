//! CLI prompts using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod model;
#[cfg(feature = "tui")]
mod prompts;
#[cfg(feature = "tui")]
mod reporter;

#[cfg(feature = "tui")]
pub use model::{run_generate, run_model, GenerateArgs, ModelArgs};
#[cfg(feature = "tui")]
pub use prompts::{ensure_flutter, parse_sample, run, CreateArgs};
#[cfg(feature = "tui")]
pub use reporter::CliclackReporter;
