//! Plugin manifest at `.claude-plugin/plugin.json`
//!
//! Only the descriptive fields are read; everything else in the file is ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::fs::FileSystem;
use crate::error::{Result, SkillportError};

/// Directory holding the manifest inside a plugin
pub const MANIFEST_DIR: &str = ".claude-plugin";

/// Manifest file name
pub const MANIFEST_FILE: &str = "plugin.json";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PluginManifest {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl PluginManifest {
    pub fn path_in(plugin_dir: &Path) -> PathBuf {
        plugin_dir.join(MANIFEST_DIR).join(MANIFEST_FILE)
    }

    /// Load the manifest of a plugin, `None` when the plugin has none
    pub fn load<F: FileSystem + ?Sized>(fs: &F, plugin_dir: &Path) -> Result<Option<Self>> {
        let path = Self::path_in(plugin_dir);
        if !fs.is_file(&path) {
            return Ok(None);
        }

        let content = fs
            .read_to_string(&path)
            .map_err(|e| SkillportError::FileReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| SkillportError::ManifestParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
    }

    /// Non-empty description, if any
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}
