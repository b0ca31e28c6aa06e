//! Rule implementations and the plugin surface.
//!
//! The plugin surface is what a host configuration layer consumes: a plugin
//! name and version, every rule addressable by its stable string key, and a
//! recommended preset that turns the recommended rules on at error severity.
//! Severity policy lives here; rules themselves only produce findings.

pub mod no_use_effect;

use crate::issues::Severity;
use crate::linter::RuleMeta;

pub const PLUGIN_NAME: &str = "majboori";
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

static ALL_METAS: [&RuleMeta; 1] = [&no_use_effect::META];

/// Metadata for every registered rule.
pub fn all_metas() -> &'static [&'static RuleMeta] {
    &ALL_METAS
}

/// Look up a rule by its stable string key.
pub fn find(name: &str) -> Option<&'static RuleMeta> {
    all_metas().iter().copied().find(|meta| meta.name == name)
}

/// The recommended preset: every recommended rule at error severity.
pub fn recommended() -> Vec<(&'static str, Severity)> {
    all_metas()
        .iter()
        .filter(|meta| meta.recommended)
        .map(|meta| (meta.name, Severity::Error))
        .collect()
}
