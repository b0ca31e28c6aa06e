//! Per-file analysis pipeline: read, parse, run rules, convert diagnostics
//! into reportable issues.
//!
//! Every file gets a fresh rule context (allocated inside
//! [`crate::linter::run_rule`]), so files can be analyzed in parallel with
//! no shared mutable state beyond the source map's position bookkeeping.

use std::fs;
use std::sync::Arc;

use rayon::prelude::*;
use swc_common::{SourceMap, Span};

use crate::core::parser::parse_source;
use crate::core::source::{SourceContext, SourceLocation};
use crate::issues::{Issue, ParseErrorIssue, UseEffectIssue};
use crate::linter::run_rule;
use crate::rules::no_use_effect::NoUseEffect;

/// Analyze every file in parallel, returning all issues found.
///
/// Unreadable or unparsable files become `ParseError` issues; they never
/// abort the run.
pub fn analyze_files(files: &[String]) -> Vec<Issue> {
    let source_map: Arc<SourceMap> = Arc::new(SourceMap::default());

    files
        .par_iter()
        .flat_map(|file_path| analyze_file(file_path, source_map.clone()))
        .collect()
}

fn analyze_file(file_path: &str, source_map: Arc<SourceMap>) -> Vec<Issue> {
    let code = match fs::read_to_string(file_path) {
        Ok(code) => code,
        Err(err) => {
            return vec![Issue::ParseError(ParseErrorIssue {
                file_path: file_path.to_string(),
                message: format!("Failed to read file: {}", err),
            })];
        }
    };

    analyze_source(file_path, code, source_map)
}

/// Analyze a single file's source text.
pub fn analyze_source(file_path: &str, code: String, source_map: Arc<SourceMap>) -> Vec<Issue> {
    let parsed = match parse_source(code, file_path, source_map) {
        Ok(parsed) => parsed,
        Err(err) => {
            return vec![Issue::ParseError(ParseErrorIssue {
                file_path: file_path.to_string(),
                message: err.to_string(),
            })];
        }
    };

    run_rule(&NoUseEffect, &parsed.module)
        .into_iter()
        .map(|diagnostic| {
            Issue::UseEffect(UseEffectIssue {
                context: span_context(&parsed.source_map, diagnostic.span, file_path),
            })
        })
        .collect()
}

/// Turn a diagnostic span into a file/line/col position with the source
/// line text for the report gutter.
fn span_context(source_map: &SourceMap, span: Span, file_path: &str) -> SourceContext {
    let loc = source_map.lookup_char_pos(span.lo);
    let source_line = loc
        .file
        .get_line(loc.line - 1)
        .map(|cow| cow.to_string())
        .unwrap_or_default();

    SourceContext::new(
        SourceLocation::new(file_path, loc.line, loc.col_display + 1),
        source_line,
    )
}
