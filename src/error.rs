use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading translations or emitting translated assets.
///
/// Every variant is fatal for the current emission cycle: the asset map
/// handed to [`crate::TranslationsPlugin::emit`] is left untouched.
#[derive(Error, Debug)]
pub enum Error {
    /// No `<base>.<code>.json` file was found and strict mode is enabled.
    #[error("No translation files found matching {pattern}")]
    Configuration { pattern: String },

    /// A translation file uses one of the reserved payload keys as its code.
    #[error("Translation file code '{code}' collides with a reserved payload key")]
    ReservedCode { code: String },

    #[error("Translation path not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to parse translation file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern in 'ignores': \"{pattern}\"")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl Error {
    /// Map an I/O failure on `path` to [`Error::NotFound`] or [`Error::Io`].
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound { path }
        } else {
            Error::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
