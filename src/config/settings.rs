//! Resolved run settings
//!
//! The source and destination roots are read from CLI flags (which fall back to
//! `SKILLPORT_SOURCE` / `SKILLPORT_DEST` through clap) and otherwise default to
//! the current directory and `~/.claude`. Both roots are returned in canonical
//! form so they can be compared. Nothing below the command layer reads the
//! environment.

use std::path::{Path, PathBuf};

use crate::cli::{Cli, LayoutArg};
use crate::common::fs::FileSystem;
use crate::domain::Layout;
use crate::error::{Result, SkillportError};

/// Destination directory name under the user's home directory
pub const DEFAULT_DEST_DIR: &str = ".claude";

#[derive(Debug, Clone)]
pub struct Settings {
    pub source_root: PathBuf,
    pub dest_root: PathBuf,
    /// Forced layout, `None` to detect from the source
    pub layout: Option<Layout>,
    pub dry_run: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let source_root = resolve_source(cli.source.as_deref())?;
        let dest_root = resolve_dest(match &cli.dest {
            Some(dest) => dest.clone(),
            None => default_dest_root()?,
        })?;
        let layout = match cli.layout {
            LayoutArg::Auto => None,
            LayoutArg::Plugins => Some(Layout::Plugins),
            LayoutArg::Flat => Some(Layout::Flat),
        };

        Ok(Self {
            source_root,
            dest_root,
            layout,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
            quiet: cli.quiet,
        })
    }

    /// Layout to use for this run
    pub fn resolve_layout<F: FileSystem + ?Sized>(&self, fs: &F) -> Layout {
        self.layout
            .unwrap_or_else(|| Layout::detect(fs, &self.source_root))
    }
}

/// Get the default destination root (`~/.claude`)
pub fn default_dest_root() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_DEST_DIR))
        .ok_or(SkillportError::HomeDirNotFound)
}

/// Resolve the package directory from the CLI argument or current directory
fn resolve_source(source: Option<&Path>) -> Result<PathBuf> {
    let path = match source {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().map_err(|e| SkillportError::IoError {
            message: format!("Failed to get current directory: {e}"),
        })?,
    };

    if !path.is_dir() {
        return Err(SkillportError::SourceNotFound {
            path: path.display().to_string(),
        });
    }

    dunce::canonicalize(&path).map_err(|e| SkillportError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Absolute destination with its existing ancestors resolved through symlinks
///
/// The destination may not exist yet; the missing tail is appended unchanged.
fn resolve_dest(dest: PathBuf) -> Result<PathBuf> {
    let absolute = std::path::absolute(&dest).map_err(|e| SkillportError::IoError {
        message: format!("Failed to resolve {}: {e}", dest.display()),
    })?;

    let mut existing = absolute.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return Ok(absolute.clone()),
        }
    }

    let mut resolved =
        dunce::canonicalize(existing).map_err(|e| SkillportError::FileReadFailed {
            path: existing.display().to_string(),
            reason: e.to_string(),
        })?;
    for name in missing.iter().rev() {
        resolved.push(name);
    }
    Ok(resolved)
}
