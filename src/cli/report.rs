//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format: severity and message, a
//! clickable `--> path:line:col` location, and a source-line gutter with a
//! caret under the offending column.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output. Issues are expected in
/// file/line/col order (see `commands::helper::finish`).
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let max_line_width = calculate_max_line_width(issues);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(source_files: usize) {
    print_success_to(source_files, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(source_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "No direct useEffect usage found (checked {} source {})",
            source_files,
            if source_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();

    let severity = issue.severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.rule().to_string().dimmed().cyan()
    );

    match loc {
        ReportLocation::Source(ctx) => {
            // Clickable location: --> path:line:col
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line(),
                ctx.col()
            );

            let caret_char = match severity {
                Severity::Error => "^".red(),
                Severity::Warning => "^".yellow(),
            };

            let _ = writeln!(
                writer,
                "{:>width$} {}",
                "",
                "|".blue(),
                width = max_line_width
            );
            let _ = writeln!(
                writer,
                "{:>width$} {} {}",
                ctx.line().to_string().blue(),
                "|".blue(),
                ctx.source_line,
                width = max_line_width
            );

            // Caret pointing to the column (col is 1-based)
            let prefix = if ctx.col() > 1 {
                ctx.source_line
                    .chars()
                    .take(ctx.col() - 1)
                    .collect::<String>()
            } else {
                String::new()
            };
            let caret_padding = UnicodeWidthStr::width(prefix.as_str());
            let _ = writeln!(
                writer,
                "{:>width$} {} {:>padding$}{}",
                "",
                "|".blue(),
                "",
                caret_char,
                width = max_line_width,
                padding = caret_padding
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            if total_problems == 1 {
                "problem"
            } else {
                "problems"
            },
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

/// Print the full result of a command run.
pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Init(InitSummary { created }) => {
            if *created {
                println!("{} Created {}", SUCCESS_MARK.green(), CONFIG_FILE_NAME);
            }
        }
        CommandSummary::Check => {
            if result.issues.is_empty() {
                print_success(result.source_files_checked);
            } else {
                report(&result.issues);
            }

            if verbose && result.parse_error_count > 0 {
                eprintln!(
                    "{} {} file(s) could not be parsed",
                    "warning:".bold().yellow(),
                    result.parse_error_count
                );
            }
        }
    }
}
