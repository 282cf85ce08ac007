//! File discovery and per-file linting for the `check` and `fmt` commands.

use anyhow::{Context, bail};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

use copylint_lib::config::{Config, ExcludeMatcher};
use copylint_lib::output::FileReport;
use copylint_lib::{fix_all, lint};

use crate::cli_utils::{read_file_efficiently, read_stdin};

/// Display name used for standard input
pub const STDIN_NAME: &str = "<stdin>";

/// Something to lint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Stdin,
    File(PathBuf),
}

impl Target {
    pub fn display_path(&self) -> String {
        match self {
            Target::Stdin => STDIN_NAME.to_string(),
            Target::File(path) => path.display().to_string(),
        }
    }
}

/// Outcome of linting one target
#[derive(Debug, Clone)]
pub struct ProcessedFile {
    pub report: FileReport,
    /// Fixed text when fixing standard input, for the caller to print
    pub fixed_stdin: Option<String>,
}

/// Expand command-line paths into lint targets.
///
/// `-` means standard input (at most once). Directories are walked, keeping
/// files with a configured extension. Files named explicitly are linted
/// whatever their extension. Exclude patterns apply to both. No paths means
/// the current directory.
pub fn collect_targets(paths: &[String], config: &Config) -> anyhow::Result<Vec<Target>> {
    let exclude = config.exclude_matcher()?;
    let default_paths = [".".to_string()];
    let paths = if paths.is_empty() { &default_paths[..] } else { paths };

    let mut targets = Vec::new();
    let mut seen_stdin = false;

    for raw in paths {
        if raw == "-" {
            if !seen_stdin {
                targets.push(Target::Stdin);
                seen_stdin = true;
            }
            continue;
        }

        let path = Path::new(raw);
        if !path.exists() {
            bail!("Path not found: {raw}");
        }

        if path.is_dir() {
            let mut files = walk_directory(path, config, &exclude);
            files.sort();
            targets.extend(files.into_iter().map(Target::File));
        } else if exclude.is_excluded(path) {
            log::debug!("Skipping excluded file {}", path.display());
        } else {
            targets.push(Target::File(path.to_path_buf()));
        }
    }

    let mut seen = std::collections::HashSet::new();
    targets.retain(|target| match target {
        Target::File(path) => seen.insert(path.clone()),
        Target::Stdin => true,
    });

    Ok(targets)
}

fn walk_directory(root: &Path, config: &Config, exclude: &ExcludeMatcher) -> Vec<PathBuf> {
    let respect_gitignore = config.global.respect_gitignore;
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(true)
        .git_ignore(respect_gitignore)
        .git_global(respect_gitignore)
        .git_exclude(respect_gitignore)
        .require_git(false);

    let prune_root = root.to_path_buf();
    let prune = exclude.clone();
    builder.filter_entry(move |entry| {
        let relative = entry.path().strip_prefix(&prune_root).unwrap_or(entry.path());
        relative.as_os_str().is_empty() || !prune.is_excluded(relative)
    });

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if !config.has_included_extension(entry.path()) {
            log::debug!("Skipping {} (extension not included)", entry.path().display());
            continue;
        }
        files.push(entry.into_path());
    }

    log::debug!("Found {} file(s) under {}", files.len(), root.display());
    files
}

/// Lint one target, writing the fixed text back to files when `fix` is set.
pub fn process_target(target: &Target, fix: bool) -> anyhow::Result<ProcessedFile> {
    let content = match target {
        Target::Stdin => read_stdin()?,
        Target::File(path) => read_file_efficiently(path)?,
    };

    let result = lint(&content);
    let mut report = FileReport::new(target.display_path(), result);
    let mut fixed_stdin = None;

    if fix {
        let fixed = fix_all(&content);
        if !fixed.converged {
            log::warn!("{}: fixes did not converge", report.path);
        }
        report.fixes_applied = fixed.fixes_applied;
        match target {
            Target::Stdin => fixed_stdin = Some(fixed.content),
            Target::File(path) if fixed.content != content => {
                fs::write(path, &fixed.content)
                    .with_context(|| format!("Failed to write file {}", path.display()))?;
                report.fixed = true;
            }
            Target::File(_) => {}
        }
    }

    Ok(ProcessedFile { report, fixed_stdin })
}

/// Lint every target, in parallel when the `parallel` feature is on.
/// Results come back in target order.
pub fn process_targets(targets: &[Target], fix: bool) -> Vec<anyhow::Result<ProcessedFile>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        targets.par_iter().map(|target| process_target(target, fix)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        targets.iter().map(|target| process_target(target, fix)).collect()
    }
}
