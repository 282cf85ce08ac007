//! Shared CLI utility functions used across command handlers.

use anyhow::Context;
use colored::*;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use copylint_lib::config::{self as copylint_config, Config};
use copylint_lib::exit_codes::exit;

use crate::CheckArgs;

/// Apply CLI argument overrides to a loaded config.
pub fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if args.no_exclude {
        config.global.exclude.clear();
    } else {
        config.global.exclude.extend(args.exclude_patterns());
    }

    if let Some(respect_gitignore) = args.respect_gitignore {
        config.global.respect_gitignore = respect_gitignore;
    }

    if let Some(format) = args.output_format {
        config.global.output_format = Some(format);
    }
}

/// Read file content as a UTF-8 string.
pub fn read_file_efficiently(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}

/// Read all of standard input.
pub fn read_stdin() -> anyhow::Result<String> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read from stdin")?;
    Ok(content)
}

/// Load configuration with standard CLI error handling.
pub fn load_config_with_cli_error_handling(config_path: Option<&str>, no_config: bool) -> Config {
    match copylint_config::resolve_config(config_path, no_config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "Config error".red().bold(), e);
            exit::tool_error();
        }
    }
}
