use glob::Pattern;

use super::AssetMap;
use crate::translations::DataObject;

/// Splits `dir/name.ext` into (`dir/name`, `ext`).
///
/// Dots in directory segments and leading dots of hidden files are not
/// extension separators.
fn split_extension(name: &str) -> Option<(&str, &str)> {
    let file_start = name.rfind('/').map_or(0, |i| i + 1);
    let dot = file_start + name[file_start..].rfind('.')?;
    if dot == file_start {
        return None;
    }
    Some((&name[..dot], &name[dot + 1..]))
}

pub fn is_script_asset(name: &str, extensions: &[String]) -> bool {
    split_extension(name).is_some_and(|(_, ext)| extensions.iter().any(|e| e == ext))
}

/// Names of the script assets to translate, in asset map order.
pub fn select_script_assets(
    assets: &AssetMap,
    extensions: &[String],
    ignores: &[Pattern],
) -> Vec<String> {
    assets
        .keys()
        .filter(|name| is_script_asset(name, extensions))
        .filter(|name| !ignores.iter().any(|pattern| pattern.matches(name)))
        .cloned()
        .collect()
}

/// Name of the asset emitted for `original` and `object`.
///
/// Single-language objects get a language-suffixed sibling
/// (`app.js` -> `app.en.js`); the all-languages and source objects reuse the
/// original name and replace it.
pub fn derive_asset_name(original: &str, object: &DataObject) -> String {
    let Some(code) = object.language_code() else {
        return original.to_string();
    };

    match split_extension(original) {
        Some((stem, ext)) => format!("{}.{}.{}", stem, code, ext),
        None => format!("{}.{}", original, code),
    }
}
