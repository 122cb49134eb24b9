//! Domain-specific error types for lnmc.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Internal modules return typed errors (e.g., [`ManifestError`],
//! [`ActionError`]) while the binary converts them to [`anyhow::Error`] via
//! the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! LnmcError
//! ├── Usage(UsageError)      : invalid command-line path arguments
//! ├── Manifest(ManifestError): unreadable or mis-shaped manifest
//! └── EntriesFailed          : one or more entries hit a filesystem fault
//! ```
//!
//! [`ActionError`] describes the individual faults; the engine wraps them in
//! [`anyhow::Error`] with the path context of the entry being processed.
//! [`ResolveError`] is yielded by the resolver for a directory it cannot
//! list.
//!
//! Per-entry conditions that merely skip an entry (missing source, existing
//! destination without `--rewrite`) are not errors; they are reported as
//! [`Event`](crate::logging::Event)s.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for lnmc.
#[derive(Error, Debug)]
pub enum LnmcError {
    /// A command-line argument is invalid.
    #[error("Usage error: {0}")]
    Usage(#[from] UsageError),

    /// The manifest file could not be read or has the wrong shape.
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// At least one entry failed with a filesystem fault.
    #[error("{count} of {total} entries failed")]
    EntriesFailed {
        /// Number of failed entries.
        count: usize,
        /// Number of entries processed.
        total: usize,
    },
}

/// Errors in the path arguments given on the command line.
#[derive(Error, Debug)]
pub enum UsageError {
    /// A required path does not exist.
    #[error("{what} does not exist: {}", .path.display())]
    MissingPath {
        /// Which argument the path was given for.
        what: &'static str,
        /// The offending path.
        path: PathBuf,
    },

    /// A path that must be a directory is something else.
    #[error("{what} is not a directory: {}", .path.display())]
    NotADirectory {
        /// Which argument the path was given for.
        what: &'static str,
        /// The offending path.
        path: PathBuf,
    },

    /// The manifest path is not a regular file.
    #[error("manifest is not a regular file: {}", .path.display())]
    NotAFile {
        /// The offending path.
        path: PathBuf,
    },

    /// The destination directory cannot be written to.
    #[error("destination directory is not writable: {}", .path.display())]
    NotWritable {
        /// The offending path.
        path: PathBuf,
    },
}

/// Errors raised while loading the manifest file.
///
/// Every variant names the manifest file so the message is actionable on
/// its own.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest could not be read from disk.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// Path to the manifest.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The manifest is not valid YAML.
    #[error("invalid YAML in {}: {source}", .path.display())]
    Parse {
        /// Path to the manifest.
        path: PathBuf,
        /// Underlying parser error.
        source: serde_yaml::Error,
    },

    /// The manifest contains no document.
    #[error("{} is empty", .path.display())]
    Empty {
        /// Path to the manifest.
        path: PathBuf,
    },

    /// The top-level document is not a mapping.
    #[error("{} must contain a mapping of directories, found {found}", .path.display())]
    NotAMapping {
        /// Path to the manifest.
        path: PathBuf,
        /// Kind of value found instead.
        found: &'static str,
    },

    /// A directory key is not a string.
    #[error("{}: directory keys must be strings, found {found}", .path.display())]
    InvalidKey {
        /// Path to the manifest.
        path: PathBuf,
        /// Kind of value found instead.
        found: &'static str,
    },

    /// A directory value is neither `null` nor a list.
    #[error("{}: entries of '{directory}' must be null or a list, found {found}", .path.display())]
    InvalidEntries {
        /// Path to the manifest.
        path: PathBuf,
        /// The directory key whose value is wrong.
        directory: String,
        /// Kind of value found instead.
        found: &'static str,
    },

    /// An item in an entry list is not a string.
    #[error("{}: entry names in '{directory}' must be strings, found {found}", .path.display())]
    InvalidEntryName {
        /// Path to the manifest.
        path: PathBuf,
        /// The directory key containing the bad item.
        directory: String,
        /// Kind of value found instead.
        found: &'static str,
    },
}

/// Filesystem faults that abort a single entry.
#[derive(Error, Debug)]
pub enum ActionError {
    /// The copy source is neither a regular file nor a directory.
    #[error("cannot copy {}: not a regular file or directory", .path.display())]
    UnsupportedFileType {
        /// The socket, FIFO, device, etc. that was encountered.
        path: PathBuf,
    },

    /// The destination is the source, or one contains the other, so
    /// replacing the destination would destroy the source.
    #[error("{} overlaps its source {}", .dst.display(), .src.display())]
    SameSourceAndDestination {
        /// Canonical source path.
        src: PathBuf,
        /// Absolute destination path.
        dst: PathBuf,
    },

    /// The directory that should contain the destination does not exist.
    #[error("destination directory does not exist: {}", .path.display())]
    DestinationParentMissing {
        /// The missing parent directory.
        path: PathBuf,
    },
}

/// A source directory that could not be listed for "all entries".
#[derive(Error, Debug)]
#[error("cannot list {}: {source}", .dir.display())]
pub struct ResolveError {
    /// The directory that was being listed.
    pub dir: PathBuf,
    /// Underlying I/O error.
    pub source: io::Error,
}

impl ResolveError {
    /// Whether the directory simply does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.source.kind() == io::ErrorKind::NotFound
    }
}
