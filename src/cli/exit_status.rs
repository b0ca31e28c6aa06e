use std::process::ExitCode;

/// Process exit status. Codes follow the linter convention callers script
/// against: 0 for a clean run, 1 when the check found errors, 2 when the
/// run itself failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed and found nothing.
    Success = 0,
    /// Run completed and found at least one error-severity issue.
    Failure = 1,
    /// The run itself failed (bad config, unreadable project root).
    Error = 2,
}

impl ExitStatus {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
