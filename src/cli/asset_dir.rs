//! A directory of compiled assets acting as the host build for the CLI.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

use crate::assets::{Asset, AssetMap, RawAsset, is_script_asset};

pub struct AssetDirectory {
    root: PathBuf,
}

impl AssetDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load every script asset below the root, keyed by its `/`-separated
    /// path relative to the root, in file name order.
    pub fn load(&self, extensions: &[String]) -> Result<AssetMap> {
        if !self.root.is_dir() {
            bail!(
                "Assets directory '{}' does not exist.\n\
                 Hint: Build the project first or set 'assetsDir' in .transpackrc.json.",
                self.root.display()
            );
        }

        let mut assets = AssetMap::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.with_context(|| {
                format!("Failed to walk assets directory: {}", self.root.display())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(name) = self.asset_name(entry.path()) else {
                continue;
            };
            if !is_script_asset(&name, extensions) {
                continue;
            }

            let content = fs::read_to_string(entry.path())
                .with_context(|| format!("Failed to read asset: {}", entry.path().display()))?;
            assets.insert(name, RawAsset::new(content).into());
        }
        Ok(assets)
    }

    /// Write the named assets back below the root.
    pub fn write(&self, assets: &AssetMap, names: &[String]) -> Result<()> {
        for name in names {
            let Some(asset) = assets.get(name) else {
                continue;
            };
            let path = self.root.join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::write(&path, asset.content())
                .with_context(|| format!("Failed to write asset: {}", path.display()))?;
        }
        Ok(())
    }

    fn asset_name(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Option<Vec<&str>> = relative.components().map(|c| c.as_os_str().to_str()).collect();
        Some(parts?.join("/"))
    }
}
