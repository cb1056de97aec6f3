//! Error types for the skeleton installer.
//!
//! This module defines semantic error variants for the failures the
//! installer can hit. Operator cancellation is deliberately not an error;
//! it is modelled as [`crate::install::InstallOutcome::Cancelled`] and
//! mapped to its own exit code by the binary.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur during skeleton installation.
#[derive(Debug, Error)]
pub enum InstallerError {
    /// The package manifest was not found at the discovery path.
    #[error("manifest not found at {path}")]
    ManifestNotFound {
        /// Path where the manifest was expected.
        path: Utf8PathBuf,
    },

    /// The package manifest could not be parsed as a JSON object.
    ///
    /// This is fatal: the installer aborts rather than guess at a
    /// partially understood document.
    #[error("invalid manifest at {path}: {reason}")]
    ManifestParse {
        /// Path to the unparseable manifest.
        path: Utf8PathBuf,
        /// Description of the parse error.
        reason: String,
    },

    /// Writing the mutated manifest back to disk failed.
    #[error("failed to write manifest at {path}: {reason}")]
    ManifestWrite {
        /// Path to the manifest being written.
        path: Utf8PathBuf,
        /// Description of the write failure.
        reason: String,
    },

    /// A namespace rewrite target directory does not exist.
    #[error("source directory not found at {path}")]
    DirectoryNotFound {
        /// Path to the missing directory.
        path: Utf8PathBuf,
    },

    /// The interactive input stream reached end-of-file mid-prompt.
    ///
    /// Surfacing this as a hard error keeps the email validation loop
    /// from spinning forever on a closed stdin.
    #[error("input stream closed before all questions were answered")]
    InputClosed,

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`InstallerError`].
pub type Result<T> = std::result::Result<T, InstallerError>;
