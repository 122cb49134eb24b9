//! Run configuration and manifest loading.
pub mod manifest;

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::UsageError;

/// What to create at each destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Create a symbolic link to the source.
    #[default]
    Link,
    /// Copy the source file or directory tree.
    Copy,
}

/// Settings for one invocation. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root the manifest's directory keys are relative to.
    pub src: PathBuf,
    /// Directory receiving the links or copies.
    pub dst: PathBuf,
    /// Replace destinations that already exist.
    pub rewrite: bool,
    /// Show informational events.
    pub verbose: bool,
    /// Link or copy.
    pub mode: Mode,
}

impl Config {
    /// Create a configuration without validating the paths.
    #[must_use]
    pub fn new(src: impl Into<PathBuf>, dst: impl Into<PathBuf>) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            rewrite: false,
            verbose: false,
            mode: Mode::Link,
        }
    }

    /// Return a copy with the rewrite policy set.
    #[must_use]
    pub fn with_rewrite(self, rewrite: bool) -> Self {
        Self { rewrite, ..self }
    }

    /// Return a copy with the given mode.
    #[must_use]
    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    /// Validate the command-line paths and build the run configuration.
    ///
    /// The manifest must be a regular file, the source root a directory, and
    /// the destination root a writable directory.
    ///
    /// # Errors
    ///
    /// Returns a [`UsageError`] naming the first invalid argument.
    pub fn from_cli(cli: &Cli) -> Result<Self, UsageError> {
        require_file(&cli.manifest)?;
        require_dir("source root", &cli.src)?;
        require_dir("destination root", &cli.dst)?;
        require_writable(&cli.dst)?;

        Ok(Self {
            src: cli.src.clone(),
            dst: cli.dst.clone(),
            rewrite: cli.rewrite,
            verbose: cli.verbose,
            mode: if cli.copy { Mode::Copy } else { Mode::Link },
        })
    }
}

fn require_file(path: &Path) -> Result<(), UsageError> {
    if !path.exists() {
        return Err(UsageError::MissingPath {
            what: "manifest",
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(UsageError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn require_dir(what: &'static str, path: &Path) -> Result<(), UsageError> {
    if !path.exists() {
        return Err(UsageError::MissingPath {
            what,
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(UsageError::NotADirectory {
            what,
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn require_writable(path: &Path) -> Result<(), UsageError> {
    // Mode bits ignore ownership; creating a file is the real check.
    if tempfile::tempfile_in(path).is_err() {
        return Err(UsageError::NotWritable {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
