//! Build assets and the rewriter that multiplies script assets per language.
//!
//! ## Module Structure
//!
//! - `naming`: script asset selection and emitted asset names
//! - `rewrite`: placeholder substitution and payload escaping

mod naming;
mod rewrite;

pub use naming::*;
pub use rewrite::*;

use enum_dispatch::enum_dispatch;
use indexmap::IndexMap;

/// Output assets of one build, keyed by asset name in emission order.
pub type AssetMap = IndexMap<String, AssetEntry>;

/// Anything the host can write out as a build asset.
///
/// Size is always derived from the content, never stored separately.
#[enum_dispatch]
pub trait Asset {
    /// Current text content.
    fn content(&self) -> &str;

    /// Content length in bytes.
    fn size(&self) -> usize {
        self.content().len()
    }
}

/// An asset as produced by the host build, before translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAsset {
    content: String,
}

impl RawAsset {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Asset for RawAsset {
    fn content(&self) -> &str {
        &self.content
    }
}

/// A script asset with its placeholder replaced by a translation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedAsset {
    content: String,
    /// Language code for single-language variants, `None` for the
    /// all-languages and source variants.
    language: Option<String>,
}

impl TranslatedAsset {
    pub fn new(content: String, language: Option<String>) -> Self {
        Self { content, language }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

impl Asset for TranslatedAsset {
    fn content(&self) -> &str {
        &self.content
    }
}

#[enum_dispatch(Asset)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetEntry {
    Raw(RawAsset),
    Translated(TranslatedAsset),
}

impl AssetEntry {
    pub fn is_translated(&self) -> bool {
        matches!(self, AssetEntry::Translated(_))
    }
}
