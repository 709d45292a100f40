use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use serde_json::Value;

use crate::config::{EscapeMode, PLACEHOLDER_TOKEN};
use crate::translations::{DataObject, PayloadStyle};

/// The placeholder token as compiled into scripts: wrapped in single or
/// double quotes.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r#"['"]{}['"]"#, regex::escape(PLACEHOLDER_TOKEN))).unwrap()
});

/// Module value registered with the host for the translations module.
///
/// Compiled scripts end up containing this quoted literal wherever they
/// reference the module.
pub fn placeholder_expression() -> String {
    format!("'{}'", PLACEHOLDER_TOKEN)
}

pub fn contains_placeholder(content: &str) -> bool {
    PLACEHOLDER_REGEX.is_match(content)
}

/// Escape compact JSON so it can be embedded inside a string literal that
/// is parsed once more before the JSON is read.
///
/// Backslashes are doubled first, then double quotes are escaped, so a quote
/// already escaped by JSON (`\"`) becomes `\\\"`.
pub fn escape_for_string_literal(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len() + json.len() / 4);
    for c in json.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn serialize_payload(payload: &Value, escape: EscapeMode) -> String {
    // Serializing a `Value` cannot fail: every map key is already a string.
    let json = payload.to_string();
    match escape {
        EscapeMode::Standard => json,
        EscapeMode::Escaped => escape_for_string_literal(&json),
    }
}

/// Replace every quoted placeholder in `content` with the serialized payload.
///
/// The payload is inserted verbatim; `$` in translations is not a capture
/// group reference.
pub fn replace_placeholder(content: &str, serialized: &str) -> String {
    PLACEHOLDER_REGEX
        .replace_all(content, NoExpand(serialized))
        .into_owned()
}

pub fn rewrite_content(
    content: &str,
    object: &DataObject,
    style: PayloadStyle,
    escape: EscapeMode,
) -> String {
    let serialized = serialize_payload(&object.to_payload(style), escape);
    replace_placeholder(content, &serialized)
}
