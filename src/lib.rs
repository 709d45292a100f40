//! Transpack - per-language script bundles from JSON translation files
//!
//! Transpack is a CLI tool and library that turns every compiled script
//! asset of a build into one variant per language (`app.en.js`,
//! `app.de.js`, ...) plus an all-languages variant that replaces the
//! original. Compiled scripts reference the translations module through a
//! placeholder literal which is substituted with the translation payload.
//!
//! ## Module Structure
//!
//! - `assets`: Asset model, script selection, naming and placeholder rewriting
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and the resolved plugin settings
//! - `error`: Error taxonomy shared by the library
//! - `plugin`: The build hook tying loader and rewriter together
//! - `translations`: Translation file discovery and payload assembly

pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod plugin;
pub mod translations;

pub use error::{Error, Result};
pub use plugin::{BuildHost, EmitSummary, Externals, TranslationsPlugin};
