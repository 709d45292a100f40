use anyhow::{Context, Result};
use tracing::debug;

use super::helper::prepare;
use crate::assets::{Asset, contains_placeholder};
use crate::cli::args::EmitCommand;
use crate::cli::asset_dir::AssetDirectory;
use crate::cli::exit_status::ExitStatus;
use crate::cli::report::{print_emit_summary, print_warnings};
use crate::plugin::TranslationsPlugin;

pub fn emit(cmd: EmitCommand) -> Result<ExitStatus> {
    let ctx = prepare(&cmd.common)?;
    let assets_dir = match &cmd.assets {
        Some(dir) => ctx.context.join(dir),
        None => ctx.context.join(&ctx.config.assets_dir),
    };
    debug!(assets = %assets_dir.display(), translations = %ctx.plugin_config.path.display(), "emit");

    let directory = AssetDirectory::new(assets_dir);
    let mut assets = directory.load(&ctx.plugin_config.script_extensions)?;
    // Variants written by an earlier run no longer carry the placeholder.
    assets.retain(|name, asset| {
        let untranslated = contains_placeholder(asset.content());
        if !untranslated {
            debug!(asset = %name, "skipping already translated script");
        }
        untranslated
    });

    let plugin = TranslationsPlugin::new(ctx.plugin_config);
    let summary = plugin
        .emit(&mut assets)
        .context("Failed to emit translated assets")?;

    print_warnings(&summary.warnings);
    if !cmd.dry_run {
        directory.write(&assets, &summary.emitted)?;
    }
    print_emit_summary(&summary, cmd.dry_run, cmd.common.verbose);

    Ok(ExitStatus::Success)
}
