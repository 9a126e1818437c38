//! Install command implementation
//!
//! Installs every plugin (or the flat package's items) or a single named target
//! into the destination root, then prints a summary.

use console::Style;

use crate::common::dry_run::DryRunFileSystem;
use crate::common::fs::{FileSystem, OsFileSystem};
use crate::config::Settings;
use crate::domain::{InstallSummary, Layout};
use crate::error::{Result, SkillportError};
use crate::installer::{Catalog, Installer};
use crate::ui::{self, ConsoleReporter, Reporter, SilentReporter};

/// Run install command; `target` of `None` installs everything
pub fn run(settings: &Settings, target: Option<&str>) -> Result<()> {
    if settings.dry_run {
        execute(&DryRunFileSystem::new(&OsFileSystem), settings, target)
    } else {
        execute(&OsFileSystem, settings, target)
    }
}

fn execute<F: FileSystem + ?Sized>(fs: &F, settings: &Settings, target: Option<&str>) -> Result<()> {
    let layout = settings.resolve_layout(fs);
    let catalog = Catalog::new(fs, layout, &settings.source_root);

    let mut reporter: Box<dyn Reporter> = if settings.quiet {
        Box::new(SilentReporter)
    } else {
        Box::new(ConsoleReporter::new(settings.verbose))
    };

    if !settings.quiet {
        print_header(settings, &catalog);
    }

    let mut installer = Installer::new(fs, layout, &settings.dest_root, reporter.as_mut());

    match target {
        None => {
            // a package without assets is reported, not fatal, for bulk installs
            let summary = match installer.install_all(&catalog) {
                Err(e @ SkillportError::AssetRootNotFound { .. }) => {
                    ui::print_error(&e);
                    InstallSummary::default()
                }
                result => result?,
            };
            let items_label = if summary.units == 1 { "item" } else { "items" };
            let location = settings.dest_root.display();
            let message = match layout {
                Layout::Plugins => {
                    let plugins_label = if summary.groups == 1 { "plugin" } else { "plugins" };
                    format!(
                        "Successfully installed {} {} from {} {} to {}",
                        summary.units, items_label, summary.groups, plugins_label, location
                    )
                }
                Layout::Flat => format!(
                    "Successfully installed {} {} to {}",
                    summary.units, items_label, location
                ),
            };
            println!("{}", Style::new().green().bold().apply_to(message));
        }
        Some(target) => {
            let installed = installer.install_named(&catalog, target)?;
            let items_label = if installed.len() == 1 { "item" } else { "items" };
            println!(
                "{}",
                Style::new().green().bold().apply_to(format!(
                    "Successfully installed {}: {} ({} {})",
                    layout.target_noun(),
                    target,
                    installed.len(),
                    items_label
                ))
            );
        }
    }

    if settings.dry_run {
        println!(
            "{}",
            Style::new().yellow().apply_to(format!(
                "Dry run: nothing was written to {}",
                settings.dest_root.display()
            ))
        );
    } else if !settings.quiet {
        println!();
        println!("Installation complete! Your plugins are ready to use.");
    }

    Ok(())
}

fn print_header<F: FileSystem + ?Sized>(settings: &Settings, catalog: &Catalog<'_, F>) {
    println!(
        "{}",
        Style::new().bold().apply_to("Skillport plugin installer")
    );
    if settings.verbose {
        println!(
            "  {} {}",
            Style::new().bold().apply_to("Source:"),
            catalog.root().display()
        );
        println!(
            "  {} {}",
            Style::new().bold().apply_to("Destination:"),
            settings.dest_root.display()
        );
        println!(
            "  {} {}",
            Style::new().bold().apply_to("Layout:"),
            catalog.layout()
        );
    }
    println!();
}
