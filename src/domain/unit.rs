//! Unit groups, sections and install results

use std::path::PathBuf;

use super::layout::Category;
use crate::common::fs::CopyStats;
use crate::config::PluginManifest;

/// Units of one category found in a group
#[derive(Debug, Clone)]
pub struct Section {
    pub category: Category,
    /// Source directory of the category (may not exist)
    pub dir: PathBuf,
    /// Unit names, sorted
    pub units: Vec<String>,
}

/// A directory holding category subdirectories
///
/// In the plugin layout every plugin is a group; a flat package is a single
/// unnamed group.
#[derive(Debug, Clone)]
pub struct UnitGroup {
    pub name: Option<String>,
    pub path: PathBuf,
    pub manifest: Option<PluginManifest>,
    pub sections: Vec<Section>,
}

impl UnitGroup {
    pub fn description(&self) -> Option<&str> {
        self.manifest.as_ref().and_then(PluginManifest::description)
    }

    pub fn version(&self) -> Option<&str> {
        self.manifest.as_ref().and_then(|m| m.version.as_deref())
    }

    pub fn unit_count(&self) -> usize {
        self.sections.iter().map(|s| s.units.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.unit_count() == 0
    }
}

/// A unit that was copied into the destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledUnit {
    pub category: Category,
    pub name: String,
    pub target: PathBuf,
    pub stats: CopyStats,
}

/// Totals of an install run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InstallSummary {
    /// Units copied
    pub units: usize,
    /// Groups that contributed at least one unit
    pub groups: usize,
}

impl InstallSummary {
    pub fn record_group(&mut self, installed: &[InstalledUnit]) {
        if !installed.is_empty() {
            self.units += installed.len();
            self.groups += 1;
        }
    }
}
