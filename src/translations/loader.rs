use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, warn};

use super::{DataObject, TranslationSource};
use crate::config::PluginConfig;
use crate::error::{Error, Result};

/// Advisory raised while loading translations. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub message: String,
}

#[derive(Debug, Default)]
pub struct LoadResult {
    /// Language objects in discovery order followed by the aggregate, or a
    /// single source object.
    pub objects: Vec<DataObject>,
    pub warnings: Vec<LoadWarning>,
}

/// Extracts the language code from a translation file name.
///
/// Only `<base>.<code>.json` (exactly three dot-separated segments) yields a
/// code.
///
/// ```
/// use transpack::translations::parse_language_code;
///
/// assert_eq!(parse_language_code("messages.en-US.json", "messages"), Some("en-US"));
/// assert_eq!(parse_language_code("messages.json", "messages"), None);
/// assert_eq!(parse_language_code("messages.en.yaml", "messages"), None);
/// assert_eq!(parse_language_code("errors.en.json", "messages"), None);
/// ```
pub fn parse_language_code<'a>(file_name: &'a str, file_name_base: &str) -> Option<&'a str> {
    let mut parts = file_name.split('.');
    let (base, code, ext) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || base != file_name_base || ext != "json" || code.is_empty() {
        return None;
    }
    Some(code)
}

/// Reads translation files through a [`TranslationSource`] and assembles
/// the data objects for one emission cycle.
pub struct TranslationLoader<'a, S: TranslationSource + ?Sized> {
    source: &'a S,
    config: &'a PluginConfig,
}

impl<'a, S: TranslationSource + ?Sized> TranslationLoader<'a, S> {
    pub fn new(source: &'a S, config: &'a PluginConfig) -> Self {
        Self { source, config }
    }

    /// Language codes of every `<base>.<code>.json` in the translations
    /// directory, in listing order.
    pub fn discover_language_codes(&self) -> Result<Vec<String>> {
        let names = self.source.list(&self.config.path)?;
        Ok(names
            .iter()
            .filter_map(|name| parse_language_code(name, &self.config.file_name_base))
            .map(String::from)
            .collect())
    }

    /// Path of `<base>.json` when `code` is `None`, `<base>.<code>.json` otherwise.
    pub fn translation_file_path(&self, code: Option<&str>) -> PathBuf {
        let base = &self.config.file_name_base;
        let file_name = match code {
            Some(code) => format!("{}.{}.json", base, code),
            None => format!("{}.json", base),
        };
        self.config.path.join(file_name)
    }

    pub fn load_translation_file(&self, code: Option<&str>) -> Result<Value> {
        let path = self.translation_file_path(code);
        let content = self.source.read(&path)?;
        serde_json::from_str(&content).map_err(|source| Error::Parse { path, source })
    }

    pub fn build_data_objects(&self) -> Result<LoadResult> {
        let codes = self.discover_language_codes()?;

        if codes.is_empty() {
            return self.build_source_fallback();
        }

        let style = self.config.payload_style;
        let mut objects = Vec::with_capacity(codes.len() + 1);
        for code in codes {
            if style.is_reserved(&code) {
                return Err(Error::ReservedCode { code });
            }
            debug!(code = %code, "loading translations");
            let messages = self.load_translation_file(Some(&code))?;
            objects.push(DataObject::Language { code, messages });
        }

        let aggregate = DataObject::aggregate(&objects);
        objects.push(aggregate);

        Ok(LoadResult {
            objects,
            warnings: Vec::new(),
        })
    }

    fn build_source_fallback(&self) -> Result<LoadResult> {
        let pattern = self.config.expected_pattern();
        if self.config.strict_missing_translations {
            return Err(Error::Configuration { pattern });
        }

        let message = format!(
            "No translation files found matching {}, creating a bundle with source file",
            pattern
        );
        warn!("{}", message);

        let messages = self.load_translation_file(None)?;
        Ok(LoadResult {
            objects: vec![DataObject::Source(messages)],
            warnings: vec![LoadWarning { message }],
        })
    }
}
