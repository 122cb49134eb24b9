//! Filesystem action engine: gate each destination, then link or copy.
//!
//! Every entry goes through the same sequence: the source must exist and
//! must not overlap the destination, the destination is classified and either kept (entry skipped) or removed when
//! rewriting, and only then is the link or copy created. Destination state is
//! re-read for every entry, so later entries see what earlier ones did.
//!
//! There is a gap between classifying a destination and acting on it; a
//! concurrent change to the destination tree during a run is not guarded
//! against and surfaces as a filesystem fault for that entry.
use anyhow::{Context as _, Result};
use std::fmt;
use std::path::Path;

use crate::config::manifest::Manifest;
use crate::config::{Config, Mode};
use crate::error::ActionError;
use crate::logging::{EntryStatus, Event, Log};
use crate::resolve::{PathPair, resolve};
use crate::resources::fs;
use crate::resources::probe::{DestinationState, classify};

/// Links or copies manifest entries according to a [`Config`].
pub struct FileSystemActions<'a> {
    config: &'a Config,
    log: &'a dyn Log,
}

impl fmt::Debug for FileSystemActions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSystemActions")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

impl<'a> FileSystemActions<'a> {
    /// Create an engine reporting through `log`.
    #[must_use]
    pub const fn new(config: &'a Config, log: &'a dyn Log) -> Self {
        Self { config, log }
    }

    /// Create a symbolic link at `pair.dst` pointing at the absolute path of
    /// `pair.src`.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination is or contains the source (or
    /// the reverse), the existing destination cannot be removed, the
    /// destination directory does not exist, or the link cannot be created.
    pub fn link_entry(&self, pair: &PathPair) -> Result<EntryStatus> {
        if !self.source_exists(&pair.src) {
            return Ok(EntryStatus::Skipped);
        }

        let src = dunce::canonicalize(&pair.src)
            .with_context(|| format!("resolving {}", pair.src.display()))?;
        let dst = fs::absolute_destination(&pair.dst)?;
        ensure_disjoint(&src, &dst)?;

        if !self.can_proceed(&dst)? {
            return Ok(EntryStatus::Skipped);
        }

        fs::create_symlink(&src, &dst)?;
        self.log.emit(&Event::LinkCreated { src, dst });
        Ok(EntryStatus::Linked)
    }

    /// Copy the file or directory tree at `pair.src` to `pair.dst`.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination is or contains the source (or
    /// the reverse), the existing destination cannot be removed, the
    /// destination directory does not exist, the source contains something
    /// that is neither a file nor a directory, or any copy fails.
    pub fn copy_entry(&self, pair: &PathPair) -> Result<EntryStatus> {
        if !self.source_exists(&pair.src) {
            return Ok(EntryStatus::Skipped);
        }

        let src = dunce::canonicalize(&pair.src)
            .with_context(|| format!("resolving {}", pair.src.display()))?;
        let dst = fs::absolute_destination(&pair.dst)?;
        ensure_disjoint(&src, &dst)?;

        if !self.can_proceed(&dst)? {
            return Ok(EntryStatus::Skipped);
        }

        fs::copy_entry(&pair.src, &dst)?;
        self.log.emit(&Event::Copied {
            src: pair.src.clone(),
            dst,
        });
        Ok(EntryStatus::Copied)
    }

    /// Decide whether `dst` may be written, clearing it first when the
    /// rewrite policy allows.
    ///
    /// Returns `true` when the destination is absent, or was present and has
    /// been removed. Any existing destination is reported as an event.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing destination cannot be removed.
    pub fn can_proceed(&self, dst: &Path) -> Result<bool> {
        let rewrite = self.config.rewrite;

        match classify(dst) {
            DestinationState::Absent => return Ok(true),
            DestinationState::BrokenSymlink => {
                self.log.emit(&Event::BrokenSymlinkFound {
                    dst: dst.to_path_buf(),
                    rewrite,
                });
                if rewrite {
                    fs::remove_symlink(dst)?;
                }
            }
            DestinationState::ValidSymlink => {
                self.log.emit(&Event::SymlinkExists {
                    dst: dst.to_path_buf(),
                    rewrite,
                });
                if rewrite {
                    fs::remove_symlink(dst)?;
                }
            }
            DestinationState::RealEntry => {
                self.log.emit(&Event::EntryExists {
                    dst: dst.to_path_buf(),
                    rewrite,
                });
                if rewrite {
                    fs::remove_entry(dst)?;
                }
            }
        }

        Ok(rewrite)
    }

    /// Link every entry of `manifest`.
    pub fn link_all(&self, manifest: &Manifest) {
        self.apply_each(manifest, Self::link_entry);
    }

    /// Copy every entry of `manifest`.
    pub fn copy_all(&self, manifest: &Manifest) {
        self.apply_each(manifest, Self::copy_entry);
    }

    /// Link or copy every entry of `manifest`, as selected by the config.
    pub fn run(&self, manifest: &Manifest) {
        match self.config.mode {
            Mode::Link => self.link_all(manifest),
            Mode::Copy => self.copy_all(manifest),
        }
    }

    fn apply_each(
        &self,
        manifest: &Manifest,
        action: impl Fn(&Self, &PathPair) -> Result<EntryStatus>,
    ) {
        for resolved in resolve(manifest, &self.config.src, &self.config.dst) {
            match resolved {
                Ok(pair) => match action(self, &pair) {
                    Ok(status) => self.log.record_entry(&pair.dst, status),
                    Err(e) => {
                        self.log.error(&format!("{}: {e:#}", pair.dst.display()));
                        self.log.record_entry(&pair.dst, EntryStatus::Failed);
                    }
                },
                Err(e) if e.is_not_found() => {
                    self.log.emit(&Event::SourceMissing { src: e.dir.clone() });
                    self.log.record_entry(&e.dir, EntryStatus::Skipped);
                }
                Err(e) => {
                    self.log.error(&e.to_string());
                    self.log.record_entry(&e.dir, EntryStatus::Failed);
                }
            }
        }
    }

    fn source_exists(&self, src: &Path) -> bool {
        if src.exists() {
            return true;
        }
        self.log.emit(&Event::SourceMissing {
            src: src.to_path_buf(),
        });
        false
    }
}

/// Fail when `dst` is `src`, lies inside it, or contains it: clearing the
/// destination would delete the source.
fn ensure_disjoint(src: &Path, dst: &Path) -> Result<()> {
    if dst.starts_with(src) || src.starts_with(dst) {
        return Err(ActionError::SameSourceAndDestination {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
        }
        .into());
    }
    Ok(())
}
