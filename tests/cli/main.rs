use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod emit;
mod init;

const BIN_NAME: &str = "transpack";

pub const SCRIPT: &str = "module.exports = '__TRANSLATIONS_MODULE_STRING_TO_BE_REPLACED__';";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config discovery at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with the fries translations and two compiled scripts in `dist/`.
    pub fn with_fries() -> Result<Self> {
        let test = Self::new()?;
        test.write_file("translations/messages.json", r#"{ "fries": "Fries" }"#)?;
        test.write_file("translations/messages.en.json", r#"{ "fries": "Chips" }"#)?;
        test.write_file(
            "translations/messages.en-US.json",
            r#"{ "fries": "French fries" }"#,
        )?;
        test.write_file("dist/a-script-file.js", SCRIPT)?;
        test.write_file("dist/another-script-file.js", SCRIPT)?;
        test.write_file("dist/index.html", "<html></html>")?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn emit_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("emit");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    /// Names of the files in `dir`, sorted.
    pub fn list_dir(&self, dir: &str) -> Result<Vec<String>> {
        let mut names = fs::read_dir(self.project_dir.join(dir))?
            .map(|entry| Ok(entry?.file_name().to_string_lossy().to_string()))
            .collect::<Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }
}
