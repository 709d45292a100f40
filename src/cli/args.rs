//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `emit`: Write per-language variants of the compiled scripts in an assets directory
//! - `codes`: List the language codes found in the translations directory
//! - `externals`: Print the externals mapping for the bundler configuration
//! - `init`: Initialize transpack configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::Config;
use crate::translations::PayloadStyle;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Emit(cmd)) => cmd.common.verbose,
            Some(Command::Codes(cmd)) => cmd.common.verbose,
            Some(Command::Externals(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands. Each one overrides the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Build context the translations directory is resolved against
    /// (default: directory of the config file, or the working directory)
    #[arg(long)]
    pub context: Option<PathBuf>,

    /// Translations directory, relative to the context
    #[arg(long)]
    pub directory: Option<String>,

    /// Base name of the translation files (`<base>.json`, `<base>.<code>.json`)
    #[arg(long)]
    pub file_name_base: Option<String>,

    /// Module name compiled scripts import the translations from
    #[arg(long)]
    pub module_name: Option<String>,

    /// Escape payloads for scripts evaluated from a string (development builds)
    #[arg(long)]
    pub development: bool,

    /// Fail when no `<base>.<code>.json` file exists instead of emitting the source file
    #[arg(long)]
    pub strict: bool,

    /// Shape of the embedded payload
    #[arg(long, value_enum)]
    pub payload_style: Option<PayloadStyle>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(directory) = &self.directory {
            config.directory = directory.clone();
        }
        if let Some(base) = &self.file_name_base {
            config.file_name_base = base.clone();
        }
        if let Some(module_name) = &self.module_name {
            config.module_name = module_name.clone();
        }
        if let Some(style) = self.payload_style {
            config.payload_style = style;
        }
        config.development |= self.development;
        config.strict_missing_translations |= self.strict;
    }
}

#[derive(Debug, Args)]
pub struct EmitCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory holding the compiled assets, relative to the context (overrides config file)
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Report what would be written without touching the assets directory
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct CodesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExternalsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Emit per-language variants of every compiled script in the assets directory
    Emit(EmitCommand),
    /// List the language codes found in the translations directory
    Codes(CodesCommand),
    /// Print the externals mapping that makes scripts carry the translations placeholder
    Externals(ExternalsCommand),
    /// Initialize a new .transpackrc.json configuration file
    Init,
}
