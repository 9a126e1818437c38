//! Error types and handling for Skillport
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Skillport operations
#[derive(Error, Diagnostic, Debug)]
pub enum SkillportError {
    // Lookup errors
    #[error("Plugin not found: {name}")]
    #[diagnostic(
        code(skillport::plugin::not_found),
        help("Run with --list to see available plugins")
    )]
    PluginNotFound { name: String },

    #[error("Item not found: {name}")]
    #[diagnostic(
        code(skillport::unit::not_found),
        help("Run with --list to see available items")
    )]
    UnitNotFound { name: String },

    #[error("Plugin '{name}' has no skills, agents or commands to install")]
    #[diagnostic(code(skillport::plugin::empty))]
    NothingToInstall { name: String },

    #[error("Invalid name: {name}")]
    #[diagnostic(
        code(skillport::name::invalid),
        help("Use a plain plugin or item name, or <category>/<name> for flat packages")
    )]
    InvalidName { name: String },

    // Configuration errors
    #[error("Source directory not found: {path}")]
    #[diagnostic(
        code(skillport::config::source_not_found),
        help("Pass --source or set SKILLPORT_SOURCE to the package directory")
    )]
    SourceNotFound { path: String },

    #[error("No assets found at: {path}")]
    #[diagnostic(
        code(skillport::config::asset_root_not_found),
        help("Expected a plugins/ directory or skills/, agents/, commands/ directories")
    )]
    AssetRootNotFound { path: String },

    #[error("Source {source_path} overlaps destination {dest}")]
    #[diagnostic(
        code(skillport::config::source_is_destination),
        help("Run from the package directory or pass --source, and keep --dest outside it")
    )]
    SourceIsDestination { source_path: String, dest: String },

    #[error("Could not determine home directory")]
    #[diagnostic(
        code(skillport::config::home_not_found),
        help("Pass --dest or set SKILLPORT_DEST to the destination directory")
    )]
    HomeDirNotFound,

    // Metadata errors
    #[error("Failed to parse plugin manifest {path}: {reason}")]
    #[diagnostic(code(skillport::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read {path}: {reason}")]
    #[diagnostic(code(skillport::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write {path}: {reason}")]
    #[diagnostic(code(skillport::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(skillport::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SkillportError {
    fn from(err: std::io::Error) -> Self {
        SkillportError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SkillportError>;
