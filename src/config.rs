use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::translations::PayloadStyle;

pub const CONFIG_FILE_NAME: &str = ".transpackrc.json";

/// Literal module value compiled into scripts in place of the translations module.
pub const PLACEHOLDER_TOKEN: &str = "__TRANSLATIONS_MODULE_STRING_TO_BE_REPLACED__";

/// Project configuration as written in `.transpackrc.json`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_directory")]
    pub directory: String,
    #[serde(default = "default_file_name_base")]
    pub file_name_base: String,
    #[serde(default = "default_module_name")]
    pub module_name: String,
    /// Escape payloads for assets that are evaluated from a string (dev builds).
    #[serde(default)]
    pub development: bool,
    #[serde(default)]
    pub strict_missing_translations: bool,
    #[serde(default)]
    pub payload_style: PayloadStyle,
    #[serde(default = "default_script_extensions")]
    pub script_extensions: Vec<String>,
    /// Glob patterns of asset names that are never translated.
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

fn default_directory() -> String {
    "translations".to_string()
}

fn default_file_name_base() -> String {
    "messages".to_string()
}

fn default_module_name() -> String {
    "translations".to_string()
}

fn default_script_extensions() -> Vec<String> {
    vec!["js".to_string()]
}

fn default_assets_dir() -> String {
    "dist".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            file_name_base: default_file_name_base(),
            module_name: default_module_name(),
            development: false,
            strict_missing_translations: false,
            payload_style: PayloadStyle::default(),
            script_extensions: default_script_extensions(),
            ignores: Vec::new(),
            assets_dir: default_assets_dir(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        compile_ignores(&self.ignores)?;
        Ok(())
    }

    /// Resolve the translations directory against `context` and freeze the
    /// settings used by the plugin.
    ///
    /// A relative `context` is taken relative to the working directory, so the
    /// resolved path is always absolute.
    pub fn to_plugin_config(&self, context: &Path) -> crate::Result<PluginConfig> {
        Ok(PluginConfig {
            path: resolve_directory(context, &self.directory)?,
            directory: self.directory.clone(),
            file_name_base: self.file_name_base.clone(),
            module_name: self.module_name.clone(),
            escape: EscapeMode::from_development(self.development),
            strict_missing_translations: self.strict_missing_translations,
            payload_style: self.payload_style,
            script_extensions: self.script_extensions.clone(),
            ignores: compile_ignores(&self.ignores)?,
        })
    }
}

fn resolve_directory(context: &Path, directory: &str) -> crate::Result<PathBuf> {
    let joined = context.join(directory);
    std::path::absolute(&joined).map_err(|source| Error::Io {
        path: joined,
        source,
    })
}

fn compile_ignores(patterns: &[String]) -> crate::Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|source| Error::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

/// How the serialized payload is written into script content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EscapeMode {
    /// Compact JSON.
    #[default]
    Standard,
    /// Compact JSON escaped to sit inside a string literal that is evaluated
    /// again (e.g. eval-based dev bundles).
    Escaped,
}

impl EscapeMode {
    pub fn from_development(development: bool) -> Self {
        if development {
            EscapeMode::Escaped
        } else {
            EscapeMode::Standard
        }
    }
}

/// Immutable plugin settings, fixed before any asset is processed.
#[derive(Debug, Clone)]
pub struct PluginConfig {
    /// Translations directory resolved against the build context.
    pub path: PathBuf,
    /// Translations directory as configured, used in diagnostics.
    pub directory: String,
    pub file_name_base: String,
    pub module_name: String,
    pub escape: EscapeMode,
    pub strict_missing_translations: bool,
    pub payload_style: PayloadStyle,
    pub script_extensions: Vec<String>,
    pub ignores: Vec<Pattern>,
}

impl PluginConfig {
    /// Default settings resolved against `context`.
    pub fn new(context: &Path) -> crate::Result<Self> {
        Config::default().to_plugin_config(context)
    }

    /// Glob the translation files are expected to match, e.g. `translations/messages.*.json`.
    pub fn expected_pattern(&self) -> String {
        Path::new(&self.directory)
            .join(format!("{}.*.json", self.file_name_base))
            .display()
            .to_string()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory holding the config file, or the start directory when using defaults.
    pub root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                root,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
