use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a majboori command.
pub struct CommandResult {
    pub summary: CommandSummary,
    /// All issues found, sorted by file/line/col.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    pub error_count: usize,
    pub warning_count: usize,
    /// Number of files that failed to parse (subset of the warnings).
    pub parse_error_count: usize,
    /// Number of source files (TS/TSX/JS/JSX) that were checked.
    pub source_files_checked: usize,
}
