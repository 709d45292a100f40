use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::exit_status::ExitStatus;
use crate::cli::report::SUCCESS_MARK;
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json};

/// Write `.transpackrc.json` and, when missing, an empty base translation
/// file so `emit` has a source to fall back to.
pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
        return Ok(ExitStatus::Failure);
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;
    print_created(CONFIG_FILE_NAME);

    let config = Config::default();
    let base_file = Path::new(&config.directory).join(format!("{}.json", config.file_name_base));
    if !base_file.exists() {
        fs::create_dir_all(&config.directory)
            .with_context(|| format!("Failed to create directory: {}", config.directory))?;
        fs::write(&base_file, "{}\n")
            .with_context(|| format!("Failed to write file: {}", base_file.display()))?;
        print_created(&base_file.display().to_string());
    }

    Ok(ExitStatus::Success)
}

fn print_created(name: &str) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", name).green()
    );
}
