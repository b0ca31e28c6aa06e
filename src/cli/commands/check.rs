use anyhow::Result;
use colored::Colorize;

use super::super::args::CheckCommand;
use super::{
    CommandResult, CommandSummary,
    helper::finish,
};
use crate::config::load_config;
use crate::core::{analyze_files, scan_files};
use crate::rules;

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let common = &cmd.common;
    let base_dir = common.path.to_string_lossy();

    let loaded = load_config(&common.path)?;
    let config = loaded.config;

    if common.verbose {
        eprintln!(
            "{} {} v{}",
            "info:".bold(),
            rules::PLUGIN_NAME,
            rules::PLUGIN_VERSION
        );
        if !loaded.from_file {
            eprintln!("{} No config file found, using defaults", "info:".bold());
        }
        for (name, severity) in rules::recommended() {
            eprintln!("{} Enabled rule: {} ({})", "info:".bold(), name, severity);
        }
    }

    let scan = scan_files(
        &base_dir,
        &config.includes,
        &config.effective_ignores(),
        config.ignore_test_files,
        common.verbose,
    );

    if common.verbose && scan.skipped_count > 0 {
        eprintln!(
            "{} Skipped {} inaccessible paths",
            "warning:".bold().yellow(),
            scan.skipped_count
        );
    }

    let issues = analyze_files(&scan.files);

    Ok(finish(CommandSummary::Check, issues, scan.files.len()))
}
