//! Issue types for analysis results.
//!
//! Each issue is self-contained with all information needed by the reporter
//! to display it (location, source context, message). The fixed message
//! template for rule findings lives with the rule itself; issues only carry
//! positions.

use crate::core::SourceContext;
use crate::rules::no_use_effect;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    NoUseEffect,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::NoUseEffect => write!(f, "{}", no_use_effect::RULE_NAME),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Direct usage of `useEffect` in source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseEffectIssue {
    pub context: SourceContext,
}

impl UseEffectIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::NoUseEffect
    }
}

/// A source file that could not be parsed.
///
/// Parse failures are findings, not fatal errors. One broken file must never
/// abort the analysis of the rest of the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    /// Parser error description.
    pub message: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue enum
// ============================================================

/// Location of an issue as seen by the reporter.
#[derive(Debug, Clone, Copy)]
pub enum ReportLocation<'a> {
    /// A position inside a parsed source file.
    Source(&'a SourceContext),
    /// A whole file, with no usable position (e.g. parse errors).
    File { path: &'a str },
}

/// All issue kinds produced by a check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UseEffect(UseEffectIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::UseEffect(_) => UseEffectIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::UseEffect(_) => UseEffectIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }

    /// Human-readable message. Rule findings use a fixed template with no
    /// interpolated values; every occurrence reads identically.
    pub fn message(&self) -> &str {
        match self {
            Issue::UseEffect(_) => no_use_effect::MESSAGE,
            Issue::ParseError(issue) => &issue.message,
        }
    }

    pub fn location(&self) -> ReportLocation<'_> {
        match self {
            Issue::UseEffect(issue) => ReportLocation::Source(&issue.context),
            Issue::ParseError(issue) => ReportLocation::File {
                path: &issue.file_path,
            },
        }
    }
}
