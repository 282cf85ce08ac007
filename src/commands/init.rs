//! Handler for the `init` command.

use colored::*;

use copylint_lib::config::{self as copylint_config, CONFIG_FILE_NAME};
use copylint_lib::exit_codes::exit;

/// Handle the init command: create a new configuration file.
pub fn handle_init(output: Option<String>) {
    let output_path = output.as_deref().unwrap_or(CONFIG_FILE_NAME);

    match copylint_config::create_default_config(output_path) {
        Ok(()) => {
            println!("Created default configuration file: {output_path}");
            println!("\nNext steps:");
            println!("  - Edit {} to adjust excludes and extensions", output_path.cyan());
            println!("  - Run {} to check your documents", "copylint check .".cyan());
        }
        Err(e) => {
            eprintln!("{}: Failed to create config file: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}
