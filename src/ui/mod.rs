//! Progress presentation layer
//!
//! All installer progress goes through the [`Reporter`] trait, so the command
//! layer picks the strategy from the command-line flags:
//! - [`ConsoleReporter`]: styled progress lines (per-unit file counts with `--verbose`)
//! - [`SilentReporter`]: nothing, for `--quiet`

use console::Style;
use miette::Diagnostic;

use crate::domain::{InstalledUnit, UnitGroup};
use crate::error::SkillportError;

/// Print an error and its help line to standard error
pub fn print_error(err: &SkillportError) {
    eprintln!(
        "{} {}",
        Style::new().for_stderr().red().bold().apply_to("Error:"),
        err
    );
    if let Some(help) = err.help() {
        eprintln!("{help}");
    }
}

/// Receives installer progress events
pub trait Reporter {
    /// A group is about to be installed
    fn group_started(&mut self, group: &UnitGroup);

    /// A unit was copied into the destination
    fn unit_installed(&mut self, unit: &InstalledUnit);

    /// A group is done; `installed` is empty when it had nothing to install
    fn group_finished(&mut self, group: &UnitGroup, installed: &[InstalledUnit]);
}

/// Progress lines on standard output
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn group_started(&mut self, group: &UnitGroup) {
        if let Some(name) = &group.name {
            println!(
                "{} {}",
                Style::new().bold().apply_to("Plugin:"),
                Style::new().bold().yellow().apply_to(name)
            );
        }
    }

    fn unit_installed(&mut self, unit: &InstalledUnit) {
        let line = format!(
            "  {} Installed {}: {}",
            Style::new().green().apply_to("✓"),
            unit.category.label,
            unit.name
        );

        if self.verbose {
            let files_label = if unit.stats.files == 1 { "file" } else { "files" };
            println!(
                "{} {}",
                line,
                Style::new().dim().apply_to(format!(
                    "({} {} -> {})",
                    unit.stats.files,
                    files_label,
                    unit.target.display()
                ))
            );
        } else {
            println!("{line}");
        }
    }

    fn group_finished(&mut self, group: &UnitGroup, installed: &[InstalledUnit]) {
        if installed.is_empty() {
            if self.verbose {
                println!("  {}", Style::new().dim().apply_to("nothing to install"));
            }
            return;
        }
        if group.name.is_some() {
            println!();
        }
    }
}

/// No-op reporter for quiet mode
#[derive(Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn group_started(&mut self, _group: &UnitGroup) {}

    fn unit_installed(&mut self, _unit: &InstalledUnit) {}

    fn group_finished(&mut self, _group: &UnitGroup, _installed: &[InstalledUnit]) {}
}
