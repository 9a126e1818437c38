//! Unit installation into the destination root
//!
//! Every unit is installed with replace semantics: an existing destination entry
//! of the same name is removed before the source is copied in its place. Lookups
//! happen before the destination is touched, so a missing target leaves the
//! destination exactly as it was. A package that overlaps the destination is
//! refused before anything is removed.

pub mod discovery;

use std::path::{Component, Path, PathBuf};

use crate::common::fs::{FileSystem, copy_tree};
use crate::domain::{InstallSummary, InstalledUnit, Layout, Section, UnitGroup};
use crate::error::{Result, SkillportError};
use crate::ui::Reporter;

pub use discovery::Catalog;

fn write_error(path: &Path, e: &std::io::Error) -> SkillportError {
    SkillportError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Copies units from a package into the destination root
pub struct Installer<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    layout: Layout,
    dest_root: PathBuf,
    reporter: &'a mut dyn Reporter,
}

impl<'a, F: FileSystem + ?Sized> Installer<'a, F> {
    pub fn new(
        fs: &'a F,
        layout: Layout,
        dest_root: impl Into<PathBuf>,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        Self {
            fs,
            layout,
            dest_root: dest_root.into(),
            reporter,
        }
    }

    /// Create the destination root and one directory per category
    pub fn prepare(&self) -> Result<()> {
        self.fs
            .create_dir_all(&self.dest_root)
            .map_err(|e| write_error(&self.dest_root, &e))?;

        for category in self.layout.categories() {
            let dir = self.dest_root.join(category.dir);
            self.fs
                .create_dir_all(&dir)
                .map_err(|e| write_error(&dir, &e))?;
        }

        Ok(())
    }

    /// Install one unit of a section, replacing any previous copy
    pub fn install_unit(&mut self, section: &Section, name: &str) -> Result<InstalledUnit> {
        discovery::validate_name(name)?;

        let src = section.dir.join(name);
        let is_unit = self
            .fs
            .kind(&src)
            .is_some_and(|kind| section.category.shape.accepts(name, kind));
        if !is_unit {
            return Err(SkillportError::UnitNotFound {
                name: format!("{}/{}", section.category.dir, name),
            });
        }

        let target = self.dest_root.join(section.category.dir).join(name);
        if self.fs.exists(&target) {
            self.fs
                .remove(&target)
                .map_err(|e| write_error(&target, &e))?;
        }

        let stats = copy_tree(self.fs, &src, &target).map_err(|e| write_error(&target, &e))?;

        let unit = InstalledUnit {
            category: section.category,
            name: name.to_string(),
            target,
            stats,
        };
        self.reporter.unit_installed(&unit);
        Ok(unit)
    }

    /// Install every unit of a group
    pub fn install_group(&mut self, group: &UnitGroup) -> Result<Vec<InstalledUnit>> {
        self.reporter.group_started(group);

        let mut installed = Vec::with_capacity(group.unit_count());
        for section in &group.sections {
            for name in &section.units {
                installed.push(self.install_unit(section, name)?);
            }
        }

        self.reporter.group_finished(group, &installed);
        Ok(installed)
    }

    /// Install everything the catalog lists
    ///
    /// Groups and categories without units are skipped.
    pub fn install_all(&mut self, catalog: &Catalog<'_, F>) -> Result<InstallSummary> {
        let groups = catalog.groups()?;
        self.ensure_disjoint(catalog.root())?;
        self.prepare()?;

        let mut summary = InstallSummary::default();
        for group in &groups {
            let installed = self.install_group(group)?;
            summary.record_group(&installed);
        }

        Ok(summary)
    }

    /// Install the plugin or item named by `target`
    pub fn install_named(
        &mut self,
        catalog: &Catalog<'_, F>,
        target: &str,
    ) -> Result<Vec<InstalledUnit>> {
        let group = catalog.select(target)?;
        if group.is_empty() {
            return Err(SkillportError::NothingToInstall {
                name: target.to_string(),
            });
        }

        self.ensure_disjoint(catalog.root())?;
        self.prepare()?;
        self.install_group(&group)
    }

    /// Refuse to install when source units and destination entries can alias
    ///
    /// Fails when the asset root is the destination root or lies inside it, or
    /// when the destination lies inside a category directory of the package.
    /// Both roots are expected in canonical form.
    fn ensure_disjoint(&self, asset_root: &Path) -> Result<()> {
        let category_depth = match self.layout {
            Layout::Plugins => 1,
            Layout::Flat => 0,
        };
        let dest_in_category = self
            .dest_root
            .strip_prefix(asset_root)
            .is_ok_and(|rest| match rest.components().nth(category_depth) {
                Some(Component::Normal(name)) => name
                    .to_str()
                    .is_some_and(|dir| self.layout.category(dir).is_some()),
                _ => false,
            });

        if asset_root.starts_with(&self.dest_root) || dest_in_category {
            return Err(SkillportError::SourceIsDestination {
                source_path: asset_root.display().to_string(),
                dest: self.dest_root.display().to_string(),
            });
        }
        Ok(())
    }
}
