//! Configuration for the command-line tool, loaded from `.copylint.toml`.
//!
//! The lint engine itself takes no configuration: the rule set is fixed.
//! These settings only decide which files the CLI visits and how it reports.

use crate::output::OutputFormat;
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up during discovery
pub const CONFIG_FILE_NAME: &str = ".copylint.toml";

/// Represents the complete configuration loaded from `.copylint.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Global configuration options
    #[serde(default)]
    pub global: GlobalConfig,
}

/// Global configuration options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct GlobalConfig {
    /// Files and directories to skip (glob patterns)
    pub exclude: Vec<String>,

    /// File extensions visited when walking directories
    #[serde(alias = "include_extensions")]
    pub include_extensions: Vec<String>,

    /// Respect .gitignore files when scanning directories
    #[serde(alias = "respect_gitignore")]
    pub respect_gitignore: bool,

    /// Report format used when `--output-format` is not given
    #[serde(skip_serializing_if = "Option::is_none", alias = "output_format")]
    pub output_format: Option<OutputFormat>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            exclude: default_exclude(),
            include_extensions: default_include_extensions(),
            respect_gitignore: true,
            output_format: None,
        }
    }
}

fn default_exclude() -> Vec<String> {
    [".git", "node_modules", "vendor", "dist", "build", "target"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_include_extensions() -> Vec<String> {
    ["md", "markdown", "txt"].into_iter().map(String::from).collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    /// Configuration file already exists
    #[error("Configuration file already exists at {path}")]
    FileExists { path: String },

    /// An exclude pattern is not a valid glob
    #[error("Invalid exclude pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Compile the exclude patterns.
    ///
    /// A bare name such as `node_modules` matches that name at any depth and
    /// everything below it.
    pub fn exclude_matcher(&self) -> Result<ExcludeMatcher, ConfigError> {
        ExcludeMatcher::new(&self.global.exclude)
    }

    /// Whether `path` has one of the configured extensions (case-insensitive).
    pub fn has_included_extension(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.global
            .include_extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

/// Compiled exclude globs
#[derive(Debug, Clone)]
pub struct ExcludeMatcher {
    globset: GlobSet,
}

impl ExcludeMatcher {
    pub fn new(patterns: &[String]) -> Result<Self, ConfigError> {
        let mut builder = GlobSetBuilder::new();

        for pattern in patterns {
            let pattern = pattern.trim().trim_end_matches('/');
            if pattern.is_empty() {
                continue;
            }
            for expanded in expand_pattern(pattern) {
                let glob = Glob::new(&expanded).map_err(|e| ConfigError::InvalidGlob {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })?;
                builder.add(glob);
            }
        }

        let globset = builder.build().map_err(|e| ConfigError::InvalidGlob {
            pattern: patterns.join(", "),
            message: e.to_string(),
        })?;

        Ok(Self { globset })
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        let normalized = path.strip_prefix("./").unwrap_or(path);
        self.globset.is_match(normalized)
    }
}

/// `docs` becomes `docs`, `**/docs`, `docs/**` and `**/docs/**`
fn expand_pattern(pattern: &str) -> Vec<String> {
    let mut expanded = vec![pattern.to_string(), format!("{pattern}/**")];
    if !pattern.starts_with("**/") && !pattern.starts_with('/') {
        expanded.push(format!("**/{pattern}"));
        expanded.push(format!("**/{pattern}/**"));
    }
    expanded
}

/// Load a specific config file.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        source,
        path: path.display().to_string(),
    })?;
    let config = Config::from_toml_str(&content)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Find `.copylint.toml` in `start` or the closest ancestor that has one.
pub fn discover(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Resolve the configuration the CLI runs with.
///
/// An explicit path must load; otherwise discovery starts from the current
/// directory and falls back to defaults when nothing is found.
pub fn resolve_config(explicit: Option<&str>, no_config: bool) -> Result<Config, ConfigError> {
    if no_config {
        log::debug!("Config discovery disabled, using defaults");
        return Ok(Config::default());
    }

    if let Some(path) = explicit {
        return load_config(Path::new(path));
    }

    let cwd = std::env::current_dir().map_err(|source| ConfigError::IoError {
        source,
        path: ".".to_string(),
    })?;

    match discover(&cwd) {
        Some(path) => load_config(&path),
        None => {
            log::debug!("No {CONFIG_FILE_NAME} found from {}, using defaults", cwd.display());
            Ok(Config::default())
        }
    }
}

/// Contents written by `copylint init`
pub fn default_config_content() -> String {
    r#"# copylint configuration file

# Global configuration options
[global]
# File/directory patterns to skip when walking directories
exclude = [
    ".git",
    "node_modules",
    "vendor",
    "dist",
    "build",
    "target",
]

# Extensions that are checked when a directory is given
include-extensions = ["md", "markdown", "txt"]

# Skip files ignored by .gitignore
respect-gitignore = true

# Default report format: "text" or "json"
# output-format = "text"
"#
    .to_string()
}

/// Create a default configuration file at the specified path
pub fn create_default_config(path: &str) -> Result<(), ConfigError> {
    if Path::new(path).exists() {
        return Err(ConfigError::FileExists { path: path.to_string() });
    }

    fs::write(path, default_config_content()).map_err(|source| ConfigError::IoError {
        source,
        path: path.to_string(),
    })
}
