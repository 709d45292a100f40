use anyhow::{Context, Result};

use super::helper::prepare;
use crate::cli::args::ExternalsCommand;
use crate::cli::exit_status::ExitStatus;
use crate::plugin::{Externals, TranslationsPlugin};

pub fn externals(cmd: ExternalsCommand) -> Result<ExitStatus> {
    let ctx = prepare(&cmd.common)?;
    let plugin = TranslationsPlugin::new(ctx.plugin_config);

    let mut externals = Externals::default();
    plugin.apply(&mut externals);

    let json = serde_json::to_string_pretty(&externals.0)
        .context("Failed to serialize externals")?;
    println!("{}", json);
    Ok(ExitStatus::Success)
}
