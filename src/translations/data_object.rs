//! Translation payloads embedded into emitted assets.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key wrapping the base file content when no language file exists.
pub const SOURCE_KEY: &str = "source";

/// Tag key carrying the language code of a single-language payload.
pub const LANGUAGE_TAG_KEY: &str = "language";

/// Tag key marking the all-languages payload.
pub const ALL_LANGUAGES_TAG_KEY: &str = "containsAllLanguages";

/// Shape of the JSON object written into an asset.
///
/// - `Plain`: `{"en":{...}}` and `{"en":{...},"en-US":{...}}`
/// - `Tagged`: `{"language":"en","en":{...}}` and
///   `{"containsAllLanguages":true,"en":{...},"en-US":{...}}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum PayloadStyle {
    #[default]
    Plain,
    Tagged,
}

impl PayloadStyle {
    /// Keys a language code may not use, since they would be ambiguous
    /// inside the payload.
    pub fn reserved_keys(self) -> &'static [&'static str] {
        match self {
            PayloadStyle::Plain => &[SOURCE_KEY],
            PayloadStyle::Tagged => &[SOURCE_KEY, LANGUAGE_TAG_KEY, ALL_LANGUAGES_TAG_KEY],
        }
    }

    pub fn is_reserved(self, code: &str) -> bool {
        self.reserved_keys().contains(&code)
    }
}

/// One translation payload. Each data object produces one emitted asset
/// per script asset.
#[derive(Debug, Clone, PartialEq)]
pub enum DataObject {
    /// Messages of a single language.
    Language { code: String, messages: Value },
    /// Messages of every discovered language, keyed by code in discovery order.
    Aggregate(Map<String, Value>),
    /// Base file content, used when no language file exists.
    Source(Value),
}

impl DataObject {
    /// Fold single-language objects into the all-languages object.
    ///
    /// Non-language objects are ignored. A repeated code keeps its first
    /// position and takes the last content.
    pub fn aggregate<'a>(objects: impl IntoIterator<Item = &'a DataObject>) -> Self {
        let mut all = Map::new();
        for object in objects {
            if let DataObject::Language { code, messages } = object {
                all.insert(code.clone(), messages.clone());
            }
        }
        DataObject::Aggregate(all)
    }

    /// Language code for single-language objects.
    pub fn language_code(&self) -> Option<&str> {
        match self {
            DataObject::Language { code, .. } => Some(code),
            DataObject::Aggregate(_) | DataObject::Source(_) => None,
        }
    }

    /// JSON object embedded into assets for this payload.
    pub fn to_payload(&self, style: PayloadStyle) -> Value {
        let mut payload = Map::new();
        match self {
            DataObject::Language { code, messages } => {
                if style == PayloadStyle::Tagged {
                    payload.insert(LANGUAGE_TAG_KEY.to_string(), Value::String(code.clone()));
                }
                payload.insert(code.clone(), messages.clone());
            }
            DataObject::Aggregate(all) => {
                if style == PayloadStyle::Tagged {
                    payload.insert(ALL_LANGUAGES_TAG_KEY.to_string(), Value::Bool(true));
                }
                payload.extend(all.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
            DataObject::Source(messages) => {
                payload.insert(SOURCE_KEY.to_string(), messages.clone());
            }
        }
        Value::Object(payload)
    }
}
