//! Skillport - Claude plugin installer
//!
//! Copies the skills, agents and commands bundled in a package into the per-user
//! Claude directory, either all at once or filtered to a single plugin or item.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod domain;
mod error;
mod installer;
mod ui;

use cli::{Cli, Mode};
use config::Settings;
use error::Result;

fn run(cli: &Cli) -> Result<()> {
    match cli.mode() {
        Mode::Completions(shell) => commands::completions::run(shell),
        Mode::List => commands::list::run(&Settings::from_cli(cli)?),
        Mode::Install(target) => commands::install::run(&Settings::from_cli(cli)?, Some(&target)),
        Mode::InstallAll => commands::install::run(&Settings::from_cli(cli)?, None),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        ui::print_error(&e);
        std::process::exit(1);
    }
}
