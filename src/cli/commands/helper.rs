use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, ReportLocation, Severity};

/// Sort key for stable report ordering: file, then line, then column.
pub fn issue_sort_key(issue: &Issue) -> (String, usize, usize) {
    match issue.location() {
        ReportLocation::Source(ctx) => (ctx.file_path().to_string(), ctx.line(), ctx.col()),
        ReportLocation::File { path } => (path.to_string(), 0, 0),
    }
}

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    source_files_checked: usize,
) -> CommandResult {
    issues.sort_by_key(issue_sort_key);

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    CommandResult {
        summary,
        issues,
        error_count,
        warning_count,
        parse_error_count,
        source_files_checked,
    }
}
