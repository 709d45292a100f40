//! Filesystem access used by the translation loader.
//!
//! The loader only ever needs two things: the entry names of one directory
//! and the full text of one file. Keeping that behind [`TranslationSource`]
//! lets hosts that already hold translations in memory skip the disk.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;

use crate::error::{Error, Result};

pub trait TranslationSource {
    /// Entry names (not paths) directly inside `dir`. No recursion.
    fn list(&self, dir: &Path) -> Result<Vec<String>>;

    /// Full text content of the file at `path`.
    fn read(&self, path: &Path) -> Result<String>;
}

/// Reads translations from disk.
///
/// Entry names are returned sorted byte-wise so discovery order does not
/// depend on the platform's directory iteration order.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskSource;

impl TranslationSource for DiskSource {
    fn list(&self, dir: &Path) -> Result<Vec<String>> {
        let entries = fs::read_dir(dir).map_err(|e| Error::from_io(dir, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::from_io(dir, e))?;
            // Non UTF-8 names can never match `<base>.<code>.json`.
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| Error::from_io(path, e))
    }
}

/// In-memory file tree. Listing order is insertion order.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    files: IndexMap<PathBuf, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a file, builder style.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl TranslationSource for MemorySource {
    fn list(&self, dir: &Path) -> Result<Vec<String>> {
        let names: Vec<String> = self
            .files
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| path.file_name()?.to_str().map(String::from))
            .collect();

        if names.is_empty() {
            return Err(Error::NotFound {
                path: dir.to_path_buf(),
            });
        }
        Ok(names)
    }

    fn read(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::from_io(path, io::Error::from(io::ErrorKind::NotFound)))
    }
}
