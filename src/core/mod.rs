//! Core analysis: file discovery, parsing, and the per-file lint pipeline.

pub mod analyze;
pub mod parser;
pub mod scanner;
pub mod source;

pub use analyze::{analyze_files, analyze_source};
pub use parser::{ParsedSource, parse_source};
pub use scanner::{ScanResult, scan_files};
pub use source::{SourceContext, SourceLocation};
