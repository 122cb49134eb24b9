//! Manifest resolution: directory keys and entry names to path pairs.
//!
//! Resolution is lazy and single-pass. Directories using the "all entries"
//! form are listed only when the iterator reaches them, in whatever order
//! the filesystem enumerates them; that order is not guaranteed to be
//! stable between runs. Resolving again lists the filesystem again.
use std::ffi::OsStr;
use std::fmt;
use std::fs::ReadDir;
use std::path::{Path, PathBuf};
use std::slice;

use crate::config::manifest::{Entries, Manifest};
use crate::error::ResolveError;

/// A source path and the destination it should appear at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPair {
    /// Existing file or directory under the source root.
    pub src: PathBuf,
    /// Where the link or copy goes under the destination root.
    pub dst: PathBuf,
}

impl PathPair {
    /// Create a pair.
    #[must_use]
    pub fn new(src: impl Into<PathBuf>, dst: impl Into<PathBuf>) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
        }
    }
}

impl fmt::Display for PathPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.src.display(), self.dst.display())
    }
}

/// Resolve `manifest` against the source and destination roots.
///
/// No paths are checked here; a listed name that does not exist still
/// yields a pair, and the engine reports it when it gets there.
#[must_use]
pub fn resolve<'a>(manifest: &'a Manifest, src_root: &'a Path, dst_root: &'a Path) -> Resolve<'a> {
    Resolve {
        directories: manifest.iter().collect::<Vec<_>>().into_iter(),
        src_root,
        dst_root,
        current: None,
    }
}

/// Names still to be produced for the directory being resolved.
enum Pending<'a> {
    Listed(slice::Iter<'a, String>),
    Listing(ReadDir),
}

/// Lazy iterator returned by [`resolve`].
pub struct Resolve<'a> {
    directories: std::vec::IntoIter<(&'a str, &'a Entries)>,
    src_root: &'a Path,
    dst_root: &'a Path,
    current: Option<(PathBuf, Pending<'a>)>,
}

impl fmt::Debug for Resolve<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolve")
            .field("src_root", &self.src_root)
            .field("dst_root", &self.dst_root)
            .field("remaining_directories", &self.directories.len())
            .field("current", &self.current.as_ref().map(|(dir, _)| dir))
            .finish()
    }
}

fn make_pair(src_dir: &Path, dst_root: &Path, name: &OsStr) -> PathPair {
    PathPair::new(src_dir.join(name), dst_root.join(name))
}

impl Iterator for Resolve<'_> {
    type Item = Result<PathPair, ResolveError>;

    fn next(&mut self) -> Option<Self::Item> {
        let dst_root = self.dst_root;
        loop {
            if let Some((src_dir, pending)) = &mut self.current {
                let src_dir: &Path = src_dir.as_path();
                let next = match pending {
                    Pending::Listed(names) => names
                        .next()
                        .map(|name| Ok(make_pair(src_dir, dst_root, OsStr::new(name)))),
                    Pending::Listing(read_dir) => read_dir.next().map(|entry| {
                        entry
                            .map(|e| make_pair(src_dir, dst_root, &e.file_name()))
                            .map_err(|source| ResolveError {
                                dir: src_dir.to_path_buf(),
                                source,
                            })
                    }),
                };
                if next.is_some() {
                    return next;
                }
                self.current = None;
            }

            let (key, entries) = self.directories.next()?;
            let src_dir = self.src_root.join(key);
            match entries {
                Entries::Listed(names) => {
                    self.current = Some((src_dir, Pending::Listed(names.iter())));
                }
                Entries::All => match std::fs::read_dir(&src_dir) {
                    Ok(read_dir) => self.current = Some((src_dir, Pending::Listing(read_dir))),
                    Err(source) => {
                        return Some(Err(ResolveError {
                            dir: src_dir,
                            source,
                        }));
                    }
                },
            }
        }
    }
}
