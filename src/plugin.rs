//! The translations plugin: hooks into a host build and emits one script
//! variant per translation payload.

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::assets::{
    Asset, AssetMap, TranslatedAsset, contains_placeholder, derive_asset_name, placeholder_expression,
    rewrite_content, select_script_assets,
};
use crate::config::PluginConfig;
use crate::error::Result;
use crate::translations::{DiskSource, LoadResult, LoadWarning, TranslationLoader, TranslationSource};

/// Module resolution policy of the host build.
pub trait BuildHost {
    /// Declare that imports of `module_name` resolve at runtime to the
    /// script expression `expression` instead of a bundled module.
    fn register_external(&mut self, module_name: &str, expression: &str);
}

/// Externals collected as a JSON object (`{ "<module>": "<expression>" }`),
/// the shape bundler configurations accept.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Externals(pub Map<String, Value>);

impl BuildHost for Externals {
    fn register_external(&mut self, module_name: &str, expression: &str) {
        self.0
            .insert(module_name.to_string(), Value::String(expression.to_string()));
    }
}

/// Outcome of one emission cycle.
#[derive(Debug, Default)]
pub struct EmitSummary {
    /// Script assets that were translated, in asset map order.
    pub script_assets: Vec<String>,
    /// Names written by this cycle, including originals that were replaced.
    pub emitted: Vec<String>,
    /// Discovered language codes; empty when the source fallback was used.
    pub languages: Vec<String>,
    pub warnings: Vec<LoadWarning>,
}

/// Translated assets built for one cycle, not yet merged into the host map.
#[derive(Debug)]
pub struct Translation {
    /// Selected script assets, in asset map order.
    pub script_assets: Vec<String>,
    /// Derived assets in emission order.
    pub assets: AssetMap,
    pub loaded: LoadResult,
}

pub struct TranslationsPlugin<S: TranslationSource = DiskSource> {
    config: PluginConfig,
    source: S,
}

impl TranslationsPlugin<DiskSource> {
    pub fn new(config: PluginConfig) -> Self {
        Self::with_source(config, DiskSource)
    }
}

impl<S: TranslationSource> TranslationsPlugin<S> {
    pub fn with_source(config: PluginConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Setup-time hook: make the translations module resolve to the
    /// placeholder literal so compiled scripts carry it.
    pub fn apply<H: BuildHost + ?Sized>(&self, host: &mut H) {
        host.register_external(&self.config.module_name, &placeholder_expression());
    }

    fn loader(&self) -> TranslationLoader<'_, S> {
        TranslationLoader::new(&self.source, &self.config)
    }

    pub fn language_codes(&self) -> Result<Vec<String>> {
        self.loader().discover_language_codes()
    }

    pub fn data_objects(&self) -> Result<LoadResult> {
        self.loader().build_data_objects()
    }

    /// Build every translated asset for `assets` without touching it.
    ///
    /// Returns the selected script names and the new assets in emission order
    /// alongside the loader result.
    pub fn translate_assets(&self, assets: &AssetMap) -> Result<Translation> {
        let loaded = self.data_objects()?;
        let style = self.config.payload_style;
        let escape = self.config.escape;

        let mut translated = AssetMap::new();
        let script_assets =
            select_script_assets(assets, &self.config.script_extensions, &self.config.ignores);
        for name in &script_assets {
            let Some(asset) = assets.get(name) else {
                continue;
            };
            let content = asset.content();
            if !contains_placeholder(content) {
                debug!(asset = %name, "script asset has no translations placeholder");
            }

            for object in &loaded.objects {
                let emitted_name = derive_asset_name(name, object);
                let rewritten = rewrite_content(content, object, style, escape);
                debug!(asset = %emitted_name, size = rewritten.len(), "translated asset");
                let language = object.language_code().map(String::from);
                translated.insert(emitted_name, TranslatedAsset::new(rewritten, language).into());
            }
        }

        Ok(Translation {
            script_assets,
            assets: translated,
            loaded,
        })
    }

    /// Emission hook: merge the translated assets into `assets`.
    ///
    /// Nothing is merged unless every translated asset was built. Derived
    /// assets sharing a name with an original replace it in place; new names
    /// are appended in emission order.
    pub fn emit(&self, assets: &mut AssetMap) -> Result<EmitSummary> {
        let Translation {
            script_assets,
            assets: translated,
            loaded,
        } = self.translate_assets(assets)?;

        let languages = loaded
            .objects
            .iter()
            .filter_map(|object| object.language_code().map(String::from))
            .collect();
        let emitted: Vec<String> = translated.keys().cloned().collect();
        assets.extend(translated);

        info!(
            scripts = script_assets.len(),
            emitted = emitted.len(),
            "emitted translated assets"
        );

        Ok(EmitSummary {
            script_assets,
            emitted,
            languages,
            warnings: loaded.warnings,
        })
    }
}
