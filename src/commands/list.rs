//! List command implementation
//!
//! This command lists the plugins (or flat items) available in the package,
//! with descriptions from plugin manifests and the units per category.

use std::fmt::Write as _;

use console::Style;

use crate::common::fs::{FileSystem, OsFileSystem};
use crate::config::Settings;
use crate::domain::{Layout, Section, UnitGroup};
use crate::error::{Result, SkillportError};
use crate::installer::Catalog;
use crate::ui;

/// Run list command
pub fn run(settings: &Settings) -> Result<()> {
    let fs = OsFileSystem;
    let layout = settings.resolve_layout(&fs);
    let catalog = Catalog::new(&fs, layout, &settings.source_root);

    match list_available(&catalog, settings.verbose) {
        Ok(listing) => print!("{listing}"),
        Err(e @ SkillportError::AssetRootNotFound { .. }) => ui::print_error(&e),
        Err(e) => return Err(e),
    }

    Ok(())
}

/// Render everything the catalog offers
fn list_available<F: FileSystem + ?Sized>(
    catalog: &Catalog<'_, F>,
    verbose: bool,
) -> Result<String> {
    let groups = catalog.groups_with_manifests()?;

    let mut out = String::new();
    let rendered = match catalog.layout() {
        Layout::Plugins => render_plugins(&mut out, &groups, verbose),
        Layout::Flat => render_items(&mut out, &groups),
    };
    rendered.map_err(|e| SkillportError::IoError {
        message: format!("Failed to render listing: {e}"),
    })?;

    Ok(out)
}

fn render_plugins(out: &mut String, groups: &[UnitGroup], verbose: bool) -> std::fmt::Result {
    if groups.is_empty() {
        return writeln!(out, "No plugins available.");
    }

    writeln!(out, "Available plugins ({}):", groups.len())?;
    writeln!(out)?;

    for group in groups {
        render_plugin(out, group, verbose)?;
        writeln!(out)?;
    }

    writeln!(out, "{}", Style::new().bold().apply_to("Usage:"))?;
    writeln!(out, "  skillport <plugin-name>")
}

fn render_plugin(out: &mut String, group: &UnitGroup, verbose: bool) -> std::fmt::Result {
    let name = group.name.as_deref().unwrap_or_default();
    match group.version() {
        Some(version) => writeln!(
            out,
            "  {} {}",
            Style::new().bold().yellow().apply_to(name),
            Style::new().dim().apply_to(format!("v{version}"))
        )?,
        None => writeln!(out, "  {}", Style::new().bold().yellow().apply_to(name))?,
    }
    writeln!(out, "    {}", group.description().unwrap_or("No description"))?;

    if verbose {
        writeln!(
            out,
            "    {} {}",
            Style::new().bold().apply_to("Path:"),
            group.path.display()
        )?;
    }

    for section in group.sections.iter().filter(|s| !s.units.is_empty()) {
        writeln!(
            out,
            "    {} {}",
            Style::new().cyan().apply_to(format!("{}:", section_title(section))),
            section.units.join(", ")
        )?;
    }

    Ok(())
}

fn render_items(out: &mut String, groups: &[UnitGroup]) -> std::fmt::Result {
    let sections: Vec<&Section> = groups
        .iter()
        .flat_map(|g| g.sections.iter())
        .filter(|s| !s.units.is_empty())
        .collect();

    if sections.is_empty() {
        return writeln!(out, "No items available.");
    }

    writeln!(out, "Available items:")?;
    writeln!(out)?;

    for section in sections {
        writeln!(
            out,
            "  {} ({})",
            Style::new().cyan().apply_to(section_title(section)),
            section.units.len()
        )?;
        for unit in &section.units {
            writeln!(out, "    {unit}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", Style::new().bold().apply_to("Usage:"))?;
    writeln!(out, "  skillport <item-name>")?;
    writeln!(out, "  skillport <category>/<item-name>")
}

/// Capitalized category directory name (e.g. "skills" -> "Skills")
fn section_title(section: &Section) -> String {
    let dir = section.category.dir;
    let mut chars = dir.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
