//! Majboori - direct useEffect checker for React projects
//!
//! Majboori is a CLI tool and library that scans React/Next.js source files
//! and reports every direct usage of `useEffect`, steering callers toward the
//! `useMajboori` wrapper which requires an explicit justification string.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, file scanning, and per-file analysis
//! - `issues`: Issue type definitions
//! - `linter`: Rule engine (rule metadata, per-file rule context, traversal)
//! - `rules`: Lint rule implementations and the plugin registry

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod linter;
pub mod rules;
