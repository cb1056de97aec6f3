//! Installation flow: questionnaire, manifest pass, rewrite passes.
//!
//! The flow is strictly sequential and runs exactly once under operator
//! supervision. Nothing is mutated before the operator confirms; after
//! confirmation the passes are deliberately non-transactional, so a
//! failure partway leaves earlier writes in place.

use crate::answers::Answers;
use crate::collect::collect_until_confirmed;
use crate::console::Console;
use crate::error::Result;
use crate::manifest;
use crate::rewrite::{RewriteReport, rewrite_directory};
use crate::syntax::SyntaxRewriter;
use camino::Utf8Path;

/// Process exit code reported on operator cancellation.
pub const EXIT_CANCELLED: i32 = 9;

/// Directory passes performed by the installer, with the namespace each
/// one receives: `src/` gets the vendor namespace, `tests/` the test
/// vendor namespace.
const SOURCE_DIRECTORIES: [&str; 2] = ["src", "tests"];

/// How a completed run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The skeleton was personalized; per-directory reports attached.
    Completed {
        /// One report per rewritten directory, in pass order.
        reports: Vec<DirectoryReport>,
    },
    /// The operator cancelled at the confirmation step; nothing was
    /// mutated.
    Cancelled,
}

/// The rewrite report of one directory pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryReport {
    /// Directory the pass ran over, relative to the project root.
    pub directory: String,
    /// Per-file outcomes of the pass.
    pub report: RewriteReport,
}

/// Run the whole installation flow against the given project root.
///
/// # Errors
///
/// Returns an error when the terminal streams fail, the manifest cannot
/// be parsed or written, or a rewrite directory is missing. Operator
/// cancellation is not an error; it is [`InstallOutcome::Cancelled`].
pub fn run(
    console: &mut Console<'_>,
    project_root: &Utf8Path,
    syntax: &dyn SyntaxRewriter,
) -> Result<InstallOutcome> {
    console.title("Welcome to the middleware skeleton installer.")?;

    let Some(answers) = collect_until_confirmed(console)? else {
        console.error("Installation cancelled.")?;
        return Ok(InstallOutcome::Cancelled);
    };

    console.text("Creating your middleware package now.")?;
    update_manifest(console, project_root, &answers)?;
    let reports = update_source_files(console, project_root, &answers, syntax)?;
    render_summary(console, &reports)?;
    console.success("Your middleware package is ready.")?;

    Ok(InstallOutcome::Completed { reports })
}

/// The manifest pass: read, mutate in memory, replace on disk.
fn update_manifest(
    console: &mut Console<'_>,
    project_root: &Utf8Path,
    answers: &Answers,
) -> Result<()> {
    console.section("Updating composer.json")?;

    let path = manifest::manifest_path(project_root);
    console.text("Reading composer.json")?;
    let mut document = manifest::load(&path)?;

    console.text("Replacing package name and authors")?;
    console.text("Updating autoload mappings")?;
    console.text("Removing bootstrap-only entries")?;
    manifest::apply(&mut document, answers);

    console.text("Writing updated composer.json")?;
    manifest::store(&path, &document)?;
    console.success("Updated composer.json")?;
    Ok(())
}

/// The two directory passes, narrated per file.
fn update_source_files(
    console: &mut Console<'_>,
    project_root: &Utf8Path,
    answers: &Answers,
    syntax: &dyn SyntaxRewriter,
) -> Result<Vec<DirectoryReport>> {
    console.section("Updating namespaces in source files")?;

    let mut reports = Vec::new();
    for directory in SOURCE_DIRECTORIES {
        let namespace = namespace_for_directory(directory, answers);
        let report = rewrite_directory(&project_root.join(directory), &namespace, syntax)?;
        for entry in report.entries() {
            console.text(&format!("{directory}/{}: {}", entry.file, entry.outcome))?;
        }
        reports.push(DirectoryReport {
            directory: directory.to_owned(),
            report,
        });
    }
    Ok(reports)
}

fn namespace_for_directory(directory: &str, answers: &Answers) -> String {
    if directory == "tests" {
        answers.test_namespace()
    } else {
        answers.source_namespace()
    }
}

/// Render the end-of-run summary, listing any per-file failures.
fn render_summary(console: &mut Console<'_>, reports: &[DirectoryReport]) -> Result<()> {
    console.section("Summary")?;
    for entry in reports {
        console.text(&format!(
            "{}/: {} updated, {} skipped, {} failed",
            entry.directory,
            entry.report.updated(),
            entry.report.skipped(),
            entry.report.failed(),
        ))?;
    }

    let mut any_failed = false;
    for entry in reports {
        for failure in entry.report.failures() {
            any_failed = true;
            console.text(&format!(
                "  {}/{}: {}",
                entry.directory, failure.file, failure.outcome
            ))?;
        }
    }
    if any_failed {
        console.error("Some files could not be rewritten; review them manually.")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "install_tests.rs"]
mod tests;
