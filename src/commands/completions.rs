//! Shell completions command

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;
use crate::error::Result;

/// Generate shell completions on standard output
pub fn run(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "skillport", &mut std::io::stdout().lock());

    Ok(())
}
