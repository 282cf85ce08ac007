//! Report formatting for the command-line tool

pub mod json;
pub mod text;

use crate::types::LintResult;
use serde::{Deserialize, Serialize};

/// How `check` reports its findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per issue plus a summary
    #[default]
    Text,
    /// A JSON array with one entry per file
    Json,
}

/// Lint outcome for one input
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Display path, `<stdin>` for standard input
    pub path: String,
    pub result: LintResult,
    /// Whether the fixed text was written back
    pub fixed: bool,
    /// Edits applied across every fix pass, zero when not fixing
    pub fixes_applied: usize,
}

impl FileReport {
    pub fn new(path: impl Into<String>, result: LintResult) -> Self {
        Self {
            path: path.into(),
            result,
            fixed: false,
            fixes_applied: 0,
        }
    }
}
