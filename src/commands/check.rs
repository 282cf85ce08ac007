//! Handler for the `check` and `fmt` commands.

use colored::*;
use std::io::{self, Write};

use copylint_lib::exit_codes::exit;
use copylint_lib::output::{FileReport, OutputFormat, json, text};
use copylint_lib::types::LintStats;

use crate::cli_utils::{apply_cli_overrides, load_config_with_cli_error_handling};
use crate::file_processor::{self, ProcessedFile};
use crate::{CheckArgs, FixMode};

/// Run the check/fmt command.
pub fn run_check(args: &CheckArgs, config_path: Option<&str>, no_config: bool) {
    let mut config = load_config_with_cli_error_handling(config_path, no_config);
    apply_cli_overrides(&mut config, args);

    let targets = match file_processor::collect_targets(&args.paths, &config) {
        Ok(targets) => targets,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            exit::tool_error();
        }
    };

    if targets.is_empty() {
        if !args.quiet {
            eprintln!("{}: No files to check", "warning".yellow().bold());
        }
        return;
    }

    let fix = args.fix_mode.writes_fixes();
    let mut had_errors = false;
    let mut processed: Vec<ProcessedFile> = Vec::with_capacity(targets.len());

    for result in file_processor::process_targets(&targets, fix) {
        match result {
            Ok(file) => processed.push(file),
            Err(e) => {
                eprintln!("{}: {:#}", "Error".red().bold(), e);
                had_errors = true;
            }
        }
    }

    let mut stdout = io::stdout().lock();
    for file in &processed {
        if let Some(fixed) = &file.fixed_stdin {
            let _ = write!(stdout, "{fixed}");
        }
    }
    let printing_stdin_fix = processed.iter().any(|f| f.fixed_stdin.is_some());

    let reports: Vec<FileReport> = processed.into_iter().map(|f| f.report).collect();
    let mut stats = LintStats::empty();
    for report in &reports {
        stats.merge(&report.result.stats);
    }

    let format = config.global.output_format.unwrap_or_default();
    match format {
        OutputFormat::Json => match json::format_json(&reports) {
            Ok(rendered) if !printing_stdin_fix => {
                let _ = writeln!(stdout, "{rendered}");
            }
            Ok(rendered) => eprintln!("{rendered}"),
            Err(e) => {
                eprintln!("{}: Failed to serialize results: {}", "Error".red().bold(), e);
                exit::tool_error();
            }
        },
        OutputFormat::Text => {
            let mut lines = Vec::new();
            if !args.quiet && !args.stats {
                for report in &reports {
                    lines.extend(text::format_report(report, args.show_context));
                }
            }
            if args.stats {
                lines.extend(text::format_stats(&stats));
            }
            let files_with_issues = reports.iter().filter(|r| r.result.has_issues()).count();
            let fixes_applied = fix.then(|| reports.iter().map(|r| r.fixes_applied).sum());
            lines.push(text::format_summary(reports.len(), files_with_issues, &stats, fixes_applied));

            // stdout carries the fixed text when formatting stdin
            for line in lines {
                if printing_stdin_fix {
                    eprintln!("{line}");
                } else {
                    let _ = writeln!(stdout, "{line}");
                }
            }
        }
    }
    let _ = stdout.flush();
    drop(stdout);

    if had_errors {
        exit::tool_error();
    }

    if stats.total_issues > 0 && args.fix_mode == FixMode::Check {
        exit::violations_found();
    }
}
