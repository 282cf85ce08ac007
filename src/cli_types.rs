use clap::Args;
use copylint_lib::output::OutputFormat;

/// Fix mode determines exit code behavior: Check exits 1 on violations, CheckFix and Format exit 0 once fixed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixMode {
    #[default]
    Check,
    CheckFix,
    Format,
}

impl FixMode {
    pub fn writes_fixes(self) -> bool {
        matches!(self, FixMode::CheckFix | FixMode::Format)
    }
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files or directories to lint (use '-' for stdin)
    #[arg(required = false)]
    pub paths: Vec<String>,

    /// Rewrite files with every issue fixed
    #[arg(short, long, default_value = "false")]
    pub fix: bool,

    /// Exclude specific files or directories (comma-separated glob patterns)
    #[arg(long)]
    pub exclude: Option<String>,

    /// Disable all exclude patterns (lint all files regardless of exclude configuration)
    #[arg(long, help = "Disable all exclude patterns")]
    pub no_exclude: bool,

    /// Respect .gitignore files when scanning directories
    /// When not specified, uses config file value (default: true)
    #[arg(
        long,
        num_args(0..=1),
        require_equals(true),
        default_missing_value = "true",
        help = "Respect .gitignore files when scanning directories (does not apply to explicitly provided paths)"
    )]
    pub respect_gitignore: Option<bool>,

    /// Print the offending source line under each issue
    #[arg(long)]
    pub show_context: bool,

    /// Show statistics summary of rule violations
    #[arg(long)]
    pub stats: bool,

    /// Suppress per-issue lines
    #[arg(short, long, help = "Print the summary only, without per-issue lines")]
    pub quiet: bool,

    /// Output format for linting results (default: text).
    ///
    /// Precedence: --output-format > config file > text
    #[arg(long, short = 'o', value_enum)]
    pub output_format: Option<OutputFormat>,

    #[arg(skip)]
    pub fix_mode: FixMode,
}

impl CheckArgs {
    /// Extra exclude patterns given on the command line
    pub fn exclude_patterns(&self) -> Vec<String> {
        self.exclude
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
