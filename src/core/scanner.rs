use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// File extensions the analyzer can parse.
const SOURCE_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js"];

/// Result of scanning files.
pub struct ScanResult {
    /// Source files to analyze, sorted so reports are deterministic.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

/// Ignore patterns split by matching strategy: entries with wildcards match
/// the full path as globs, entries without are directory prefixes relative
/// to the project root.
struct IgnoreList {
    prefixes: Vec<PathBuf>,
    globs: Vec<Pattern>,
}

impl IgnoreList {
    fn build(base_dir: &str, patterns: &[String], ignore_test_files: bool, verbose: bool) -> Self {
        let mut prefixes = Vec::new();
        let mut globs = Vec::new();

        for p in patterns {
            if p.contains('*') || p.contains('?') {
                match Pattern::new(p) {
                    Ok(pattern) => globs.push(pattern),
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid ignore pattern '{}': {}",
                                "warning:".bold().yellow(),
                                p,
                                e
                            );
                        }
                    }
                }
            } else {
                prefixes.push(Path::new(base_dir).join(p));
            }
        }

        // Test files rarely reach for useEffect directly, but when they do it
        // is usually deliberate scaffolding; skip them unless configured
        // otherwise.
        if ignore_test_files {
            globs.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        Self { prefixes, globs }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.prefixes.iter().any(|prefix| path.starts_with(prefix)) {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.globs.iter().any(|p| p.matches(&path_str))
    }
}

/// Directories to walk: the configured include roots, or the project root
/// when none are set. A configured root that does not exist is skipped
/// rather than aborting the scan.
fn scan_roots(base_dir: &str, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![PathBuf::from(base_dir)];
    }

    let mut roots = Vec::new();
    for include in includes {
        let path = Path::new(base_dir).join(include);
        if path.exists() {
            roots.push(path);
        } else if verbose {
            eprintln!(
                "{} Include path does not exist: {}",
                "warning:".bold().yellow(),
                path.display()
            );
        }
    }
    roots
}

pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let ignores = IgnoreList::build(base_dir, ignore_patterns, ignore_test_files, verbose);

    // BTreeSet deduplicates overlapping include roots and keeps paths sorted.
    let mut files: BTreeSet<String> = BTreeSet::new();
    let mut skipped_count = 0;

    for root in scan_roots(base_dir, includes, verbose) {
        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();

            if ignores.is_ignored(path) {
                continue;
            }

            if path.is_file() && is_source_file(path) {
                files.insert(path.to_string_lossy().into_owned());
            }
        }
    }

    ScanResult {
        files: files.into_iter().collect(),
        skipped_count,
    }
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
