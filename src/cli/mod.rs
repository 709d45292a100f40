//! Command-line interface layer.
//!
//! Separate from the plugin so transpack can be embedded as a library by
//! build hosts that already hold their assets in memory.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod args;
mod asset_dir;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs};
pub use asset_dir::AssetDirectory;
pub use exit_status::ExitStatus;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "TRANSPACK_LOG";

/// Filter used when `TRANSPACK_LOG` is unset. Plugin warnings reach the user
/// through the command reports.
fn default_directive(verbose: bool) -> &'static str {
    if verbose { "transpack=debug" } else { "off" }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // Ignored when a subscriber is already installed (library embedding, tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    init_logging(args.verbose());

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)
}
