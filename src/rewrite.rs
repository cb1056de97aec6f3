//! Namespace rewrite: the per-directory file pass of the installer.
//!
//! Each target directory is scanned non-recursively; every regular file
//! directly inside it gets its first top-level namespace declaration
//! replaced with the computed target. Files without a declaration are
//! left byte-identical. Files that fail to parse are recorded in the
//! report and the batch continues; failures are surfaced to the operator
//! in the end-of-run summary instead of being silently swallowed.

use crate::error::{InstallerError, Result};
use crate::syntax::SyntaxRewriter;
use camino::Utf8Path;
use std::fmt;

/// What happened to one file during the rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The declaration was renamed and the file rewritten.
    Updated,
    /// No namespace declaration was found; the file was not touched.
    NoDeclaration,
    /// The file could not be read or parsed; the file was not touched.
    ParseFailed {
        /// Description of the read or parse failure.
        reason: String,
    },
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated => write!(f, "namespace updated"),
            Self::NoDeclaration => write!(f, "skipped (no namespace declaration)"),
            Self::ParseFailed { reason } => write!(f, "failed: {reason}"),
        }
    }
}

/// Outcome of one file, paired with its name within the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// File name relative to the scanned directory.
    pub file: String,
    /// What the pass did with it.
    pub outcome: FileOutcome,
}

/// Aggregated per-file outcomes of one directory pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    entries: Vec<FileReport>,
}

impl RewriteReport {
    /// Per-file entries in directory-listing order.
    #[must_use]
    pub fn entries(&self) -> &[FileReport] {
        &self.entries
    }

    /// Number of files whose declaration was rewritten.
    #[must_use]
    pub fn updated(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::Updated))
    }

    /// Number of files skipped for lack of a declaration.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::NoDeclaration))
    }

    /// Number of files that failed to read or parse.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::ParseFailed { .. }))
    }

    /// The entries that failed, for the operator-facing summary.
    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.outcome, FileOutcome::ParseFailed { .. }))
    }

    fn count(&self, matcher: impl Fn(&FileOutcome) -> bool) -> usize {
        self.entries
            .iter()
            .filter(|entry| matcher(&entry.outcome))
            .count()
    }
}

/// Rewrite the namespace declaration of every file directly inside `dir`.
///
/// Subdirectories are not descended into. Files are processed in name
/// order so the narration and report are deterministic.
///
/// # Errors
///
/// Returns [`InstallerError::DirectoryNotFound`] when `dir` does not
/// exist, and an I/O error when writing a rewritten file fails. Read and
/// parse failures of individual files never abort the pass; they are
/// recorded in the report.
pub fn rewrite_directory(
    dir: &Utf8Path,
    namespace: &str,
    syntax: &dyn SyntaxRewriter,
) -> Result<RewriteReport> {
    if !dir.is_dir() {
        return Err(InstallerError::DirectoryNotFound {
            path: dir.to_owned(),
        });
    }

    let mut files = Vec::new();
    for entry in dir.read_dir_utf8()? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.file_name().to_owned());
        }
    }
    files.sort();

    let mut report = RewriteReport::default();
    for file in files {
        let outcome = rewrite_file(&dir.join(&file), namespace, syntax)?;
        log::debug!("{dir}/{file}: {outcome}");
        report.entries.push(FileReport { file, outcome });
    }
    Ok(report)
}

/// Rewrite a single file, classifying the result.
///
/// Read and parse problems become [`FileOutcome::ParseFailed`]; only a
/// failed write of an already-rewritten file is propagated as an error.
fn rewrite_file(
    path: &Utf8Path,
    namespace: &str,
    syntax: &dyn SyntaxRewriter,
) -> Result<FileOutcome> {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(source) => {
            return Ok(FileOutcome::ParseFailed {
                reason: source.to_string(),
            });
        }
    };

    let mut tree = match syntax.parse(&source) {
        Ok(tree) => tree,
        Err(source) => {
            return Ok(FileOutcome::ParseFailed {
                reason: source.to_string(),
            });
        }
    };

    let Some(index) = syntax.first_namespace(&tree) else {
        return Ok(FileOutcome::NoDeclaration);
    };

    syntax.rename_namespace(&mut tree, index, namespace);
    std::fs::write(path, syntax.serialize(&tree))?;
    Ok(FileOutcome::Updated)
}

#[cfg(test)]
#[path = "rewrite_tests.rs"]
mod tests;
