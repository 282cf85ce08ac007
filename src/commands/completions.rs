//! Handler for the `completions` command.

use clap::CommandFactory;
use clap_complete::{Shell, generate};
use colored::*;

use copylint_lib::exit_codes::exit;

use crate::Cli;

/// Print a completion script for `shell`, or for the shell named by `$SHELL`.
pub fn handle_completions(shell: Option<Shell>, list: bool) {
    if list {
        for shell in [Shell::Bash, Shell::Elvish, Shell::Fish, Shell::PowerShell, Shell::Zsh] {
            println!("{shell}");
        }
        return;
    }

    let Some(shell) = shell.or_else(Shell::from_env) else {
        eprintln!(
            "{}: Could not detect shell from $SHELL; pass one explicitly",
            "Error".red().bold()
        );
        exit::tool_error();
    };

    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, &mut std::io::stdout());
}
