//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Skillport - Claude plugin installer
///
/// Copies bundled skills, agents and commands into the per-user Claude directory.
#[derive(Parser, Debug)]
#[command(
    name = "skillport",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install bundled Claude plugins into your user directory",
    long_about = "Skillport copies the skills, agents and commands bundled in a package \
                  into the per-user Claude directory (~/.claude by default). Existing \
                  entries with the same name are replaced.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  skillport                      Install all plugins\n    \
                  skillport learning-summary     Install one plugin\n    \
                  skillport --list               List available plugins\n    \
                  skillport --source ./pkg --dest /tmp/claude --dry-run"
)]
pub struct Cli {
    /// Plugin or item to install (omit to install everything)
    #[arg(value_name = "TARGET", conflicts_with_all = ["all", "list"])]
    pub target: Option<String>,

    /// Install every plugin and item (default)
    #[arg(long, conflicts_with = "list")]
    pub all: bool,

    /// List available plugins and items
    #[arg(long)]
    pub list: bool,

    /// Package directory containing plugins/ or skills/, agents/, commands/
    #[arg(long, value_name = "DIR", env = "SKILLPORT_SOURCE")]
    pub source: Option<PathBuf>,

    /// Destination directory (defaults to ~/.claude)
    #[arg(long, value_name = "DIR", env = "SKILLPORT_DEST")]
    pub dest: Option<PathBuf>,

    /// Package layout
    #[arg(long, value_enum, default_value_t = LayoutArg::Auto)]
    pub layout: LayoutArg,

    /// Report what would be installed without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print the summary and errors
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,
}

/// Package layout selection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutArg {
    /// Use plugins/ when present, otherwise flat
    Auto,
    /// plugins/<plugin>/{skills,agents,commands}
    Plugins,
    /// {skills,agents,commands} at the package root
    Flat,
}

/// What a run should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    InstallAll,
    Install(String),
    List,
    Completions(Shell),
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if let Some(shell) = self.completions {
            return Mode::Completions(shell);
        }
        if self.list {
            return Mode::List;
        }
        if self.all {
            return Mode::InstallAll;
        }
        match &self.target {
            Some(target) => Mode::Install(target.clone()),
            None => Mode::InstallAll,
        }
    }
}
