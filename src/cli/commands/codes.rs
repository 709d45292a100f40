use anyhow::Result;

use super::helper::prepare;
use crate::cli::args::CodesCommand;
use crate::cli::exit_status::ExitStatus;
use crate::cli::report::print_codes;
use crate::plugin::TranslationsPlugin;

pub fn codes(cmd: CodesCommand) -> Result<ExitStatus> {
    let ctx = prepare(&cmd.common)?;
    let plugin = TranslationsPlugin::new(ctx.plugin_config);

    let codes = plugin.language_codes()?;
    if codes.is_empty() {
        eprintln!(
            "No translation files found matching {}",
            plugin.config().expected_pattern()
        );
        return Ok(ExitStatus::Failure);
    }

    print_codes(&codes);
    Ok(ExitStatus::Success)
}
