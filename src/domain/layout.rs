//! Package layouts and unit categories
//!
//! A package is arranged either as `plugins/<plugin>/<category>/<unit>` or, for
//! flat packages, as `<category>/<unit>` directly under the source root. Both
//! are described by the same category model and differ only in which entries
//! count as units.

use std::path::{Path, PathBuf};

use crate::common::fs::{EntryKind, FileSystem};

/// Directory holding plugins in a plugin-layout package
pub const PLUGINS_DIR: &str = "plugins";

/// Which directory entries inside a category count as installable units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitShape {
    /// Only directories (skills, plugin commands)
    Directory,
    /// Only files, optionally restricted to an extension
    File { extension: Option<&'static str> },
    /// Directories and files alike
    Any,
}

impl UnitShape {
    /// Check whether an entry with this name and kind is a unit
    pub fn accepts(self, name: &str, kind: EntryKind) -> bool {
        if name.starts_with('.') {
            return false;
        }
        match self {
            UnitShape::Directory => kind == EntryKind::Dir,
            UnitShape::File { extension } => {
                kind == EntryKind::File
                    && extension.is_none_or(|ext| {
                        Path::new(name).extension().and_then(|e| e.to_str()) == Some(ext)
                    })
            }
            UnitShape::Any => true,
        }
    }
}

/// A category of installable units (skills, agents, commands)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Directory name in both source and destination
    pub dir: &'static str,
    /// Singular label used in progress output
    pub label: &'static str,
    pub shape: UnitShape,
}

const PLUGIN_CATEGORIES: &[Category] = &[
    Category {
        dir: "skills",
        label: "skill",
        shape: UnitShape::Directory,
    },
    Category {
        dir: "agents",
        label: "agent",
        shape: UnitShape::File {
            extension: Some("md"),
        },
    },
    Category {
        dir: "commands",
        label: "command",
        shape: UnitShape::Directory,
    },
];

const FLAT_CATEGORIES: &[Category] = &[
    Category {
        dir: "skills",
        label: "skill",
        shape: UnitShape::Directory,
    },
    Category {
        dir: "agents",
        label: "agent",
        shape: UnitShape::Any,
    },
    Category {
        dir: "commands",
        label: "command",
        shape: UnitShape::Any,
    },
];

/// How units are arranged under the source root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `plugins/<plugin>/{skills,agents,commands}/<unit>`
    Plugins,
    /// `{skills,agents,commands}/<unit>`
    Flat,
}

impl Layout {
    /// Pick the plugin layout when the source has a `plugins/` directory
    pub fn detect<F: FileSystem + ?Sized>(fs: &F, source_root: &Path) -> Self {
        if fs.is_dir(&source_root.join(PLUGINS_DIR)) {
            Layout::Plugins
        } else {
            Layout::Flat
        }
    }

    pub fn categories(self) -> &'static [Category] {
        match self {
            Layout::Plugins => PLUGIN_CATEGORIES,
            Layout::Flat => FLAT_CATEGORIES,
        }
    }

    /// Look up a category by its directory name
    pub fn category(self, dir: &str) -> Option<Category> {
        self.categories().iter().copied().find(|c| c.dir == dir)
    }

    /// Directory the catalog enumerates
    pub fn asset_root(self, source_root: &Path) -> PathBuf {
        match self {
            Layout::Plugins => source_root.join(PLUGINS_DIR),
            Layout::Flat => source_root.to_path_buf(),
        }
    }

    /// Noun for a top-level install target in messages
    pub fn target_noun(self) -> &'static str {
        match self {
            Layout::Plugins => "plugin",
            Layout::Flat => "item",
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Plugins => write!(f, "plugins"),
            Layout::Flat => write!(f, "flat"),
        }
    }
}
