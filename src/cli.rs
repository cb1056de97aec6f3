//! CLI argument definitions for the skeleton installer.
//!
//! Separated from the entrypoint to keep the binary focused on
//! orchestration and exit-code mapping.

use camino::Utf8PathBuf;
use clap::Parser;

/// Personalize the middleware package skeleton.
#[derive(Parser, Debug)]
#[command(name = "skeleton-installer")]
#[command(version, about)]
#[command(long_about = concat!(
    "Personalize the middleware package skeleton.\n\n",
    "The installer asks for your vendor and project namespaces, package ",
    "name, and author details, then rewrites composer.json and the ",
    "namespace declarations of the files under src/ and tests/. It is ",
    "meant to run exactly once, right after the skeleton is created.\n\n",
    "Nothing is modified until you confirm the collected settings.",
))]
pub struct Cli {
    /// Root of the skeleton project to personalize.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_root: Utf8PathBuf,
}

impl Default for Cli {
    /// A `Cli` pointing at the current directory, for programmatic use
    /// in tests.
    fn default() -> Self {
        Self {
            project_root: Utf8PathBuf::from("."),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
