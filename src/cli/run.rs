//! Dispatches parsed arguments to the command handlers.

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{codes::codes, emit::emit, externals::externals, init::init},
    exit_status::ExitStatus,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Emit(cmd)) => emit(cmd),
        Some(Command::Codes(cmd)) => codes(cmd),
        Some(Command::Externals(cmd)) => externals(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
