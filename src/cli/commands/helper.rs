use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use crate::cli::args::CommonArgs;
use crate::config::{Config, PluginConfig, load_config};

/// Configuration of one command invocation after overrides are applied.
pub struct CommandContext {
    pub config: Config,
    /// Build context every configured directory is resolved against.
    pub context: PathBuf,
    pub plugin_config: PluginConfig,
}

pub fn prepare(common: &CommonArgs) -> Result<CommandContext> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let loaded = load_config(&cwd)?;

    let mut config = loaded.config;
    common.apply_to(&mut config);

    let context = match &common.context {
        Some(context) => cwd.join(context),
        None => loaded.root,
    };
    let plugin_config = config.to_plugin_config(&context)?;

    Ok(CommandContext {
        config,
        context,
        plugin_config,
    })
}
