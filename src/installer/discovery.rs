//! Unit discovery in a package
//!
//! This module handles:
//! - Enumerating plugins (plugin layout) or the single flat group
//! - Collecting unit names per category, filtered by the category's shape
//! - Resolving a user-supplied target to the units it names
//!
//! Missing category directories are not an error; they produce empty sections.

use std::path::{Path, PathBuf};

use crate::common::fs::{EntryKind, FileSystem};
use crate::config::PluginManifest;
use crate::domain::{Category, Layout, Section, UnitGroup};
use crate::error::{Result, SkillportError};

/// Read-only view of the installable units under a source root
pub struct Catalog<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    layout: Layout,
    root: PathBuf,
}

/// Reject names that would escape the category directory
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\');

    if invalid {
        return Err(SkillportError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Whether a flat unit entry answers to the requested name
///
/// File units also match by stem, so `reviewer` selects `reviewer.md`.
fn unit_matches(unit: &str, requested: &str) -> bool {
    unit == requested || Path::new(unit).file_stem().and_then(|s| s.to_str()) == Some(requested)
}

impl<'a, F: FileSystem + ?Sized> Catalog<'a, F> {
    pub fn new(fs: &'a F, layout: Layout, source_root: &Path) -> Self {
        Self {
            fs,
            layout,
            root: layout.asset_root(source_root),
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Directory the catalog enumerates
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every group in the package with its sections
    ///
    /// Plugin manifests are not read; installs never depend on them.
    pub fn groups(&self) -> Result<Vec<UnitGroup>> {
        self.collect_groups(false)
    }

    /// Like [`Catalog::groups`], with each plugin's manifest loaded for display
    pub fn groups_with_manifests(&self) -> Result<Vec<UnitGroup>> {
        self.collect_groups(true)
    }

    /// Resolve an install target to the group of units it selects
    ///
    /// In the plugin layout the target is a plugin name. In the flat layout it is
    /// a unit name, optionally qualified as `<category>/<name>`.
    pub fn select(&self, target: &str) -> Result<UnitGroup> {
        match self.layout {
            Layout::Plugins => self.plugin(target),
            Layout::Flat => self.flat_units(target),
        }
    }

    /// Load a single plugin group
    pub fn plugin(&self, name: &str) -> Result<UnitGroup> {
        validate_name(name)?;
        self.ensure_root()?;

        let path = self.root.join(name);
        if !self.fs.is_dir(&path) {
            return Err(SkillportError::PluginNotFound {
                name: name.to_string(),
            });
        }

        self.load_group(Some(name.to_string()), path, false)
    }

    fn flat_units(&self, target: &str) -> Result<UnitGroup> {
        let (category, name) = match target.split_once('/') {
            Some((category, name)) => {
                if self.layout.category(category).is_none() {
                    return Err(SkillportError::InvalidName {
                        name: target.to_string(),
                    });
                }
                (Some(category), name)
            }
            None => (None, target),
        };
        validate_name(name).map_err(|_| SkillportError::InvalidName {
            name: target.to_string(),
        })?;
        self.ensure_root()?;

        let mut group = self.load_group(None, self.root.clone(), false)?;
        group
            .sections
            .retain(|section| category.is_none_or(|c| c == section.category.dir));
        for section in &mut group.sections {
            section.units.retain(|unit| unit_matches(unit, name));
        }

        if group.is_empty() {
            return Err(SkillportError::UnitNotFound {
                name: target.to_string(),
            });
        }
        Ok(group)
    }

    fn collect_groups(&self, with_manifests: bool) -> Result<Vec<UnitGroup>> {
        self.ensure_root()?;

        match self.layout {
            Layout::Plugins => self
                .plugin_names()?
                .into_iter()
                .map(|name| {
                    let path = self.root.join(&name);
                    self.load_group(Some(name), path, with_manifests)
                })
                .collect(),
            Layout::Flat => Ok(vec![self.load_group(
                None,
                self.root.clone(),
                with_manifests,
            )?]),
        }
    }

    /// A flat root counts as present only when it holds a category directory
    fn ensure_root(&self) -> Result<()> {
        let present = match self.layout {
            Layout::Plugins => self.fs.is_dir(&self.root),
            Layout::Flat => self
                .layout
                .categories()
                .iter()
                .any(|category| self.fs.is_dir(&self.root.join(category.dir))),
        };

        if present {
            Ok(())
        } else {
            Err(SkillportError::AssetRootNotFound {
                path: self.root.display().to_string(),
            })
        }
    }

    fn plugin_names(&self) -> Result<Vec<String>> {
        Ok(self
            .read_dir(&self.root)?
            .into_iter()
            .filter(|entry| entry.kind == EntryKind::Dir && !entry.name.starts_with('.'))
            .map(|entry| entry.name)
            .collect())
    }

    fn load_group(
        &self,
        name: Option<String>,
        path: PathBuf,
        with_manifest: bool,
    ) -> Result<UnitGroup> {
        let manifest = if with_manifest {
            PluginManifest::load(self.fs, &path)?
        } else {
            None
        };
        let sections = self
            .layout
            .categories()
            .iter()
            .map(|category| self.load_section(*category, &path))
            .collect::<Result<Vec<_>>>()?;

        Ok(UnitGroup {
            name,
            path,
            manifest,
            sections,
        })
    }

    fn load_section(&self, category: Category, group_path: &Path) -> Result<Section> {
        let dir = group_path.join(category.dir);
        let units = if self.fs.is_dir(&dir) {
            self.read_dir(&dir)?
                .into_iter()
                .filter(|entry| category.shape.accepts(&entry.name, entry.kind))
                .map(|entry| entry.name)
                .collect()
        } else {
            Vec::new()
        };

        Ok(Section {
            category,
            dir,
            units,
        })
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<crate::common::fs::DirEntry>> {
        self.fs
            .read_dir(path)
            .map_err(|e| SkillportError::FileReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
    }
}
