//! Structured events reported while processing a manifest.
//!
//! Every event renders with a fixed leading phrase so output can be matched
//! by prefix; the path that follows is the only variable part of the prefix.
use std::fmt;
use std::path::PathBuf;

/// How prominently an event is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Progress detail, shown only in verbose mode.
    Info,
    /// Something was skipped or replaced.
    Warning,
    /// Something is in the way and was left alone.
    Error,
}

/// A single thing that happened to one entry (or to the run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The manifest was read.
    ManifestLoaded {
        /// Path of the manifest file.
        path: PathBuf,
        /// Number of directory keys.
        directories: usize,
    },
    /// The resolved source does not exist; the entry is skipped.
    SourceMissing {
        /// The missing source path.
        src: PathBuf,
    },
    /// The destination is a symlink whose target is gone.
    BrokenSymlinkFound {
        /// The destination path.
        dst: PathBuf,
        /// Whether the link is removed and replaced.
        rewrite: bool,
    },
    /// The destination is already a working symlink.
    SymlinkExists {
        /// The destination path.
        dst: PathBuf,
        /// Whether the link is removed and replaced.
        rewrite: bool,
    },
    /// A real file or directory occupies the destination.
    EntryExists {
        /// The destination path.
        dst: PathBuf,
        /// Whether the entry is removed and replaced.
        rewrite: bool,
    },
    /// A symbolic link was created.
    LinkCreated {
        /// Absolute path the link points to.
        src: PathBuf,
        /// Absolute path of the link.
        dst: PathBuf,
    },
    /// A file or directory tree was copied.
    Copied {
        /// The copied source.
        src: PathBuf,
        /// The new copy.
        dst: PathBuf,
    },
}

impl Event {
    /// Display severity of this event.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::ManifestLoaded { .. }
            | Self::SymlinkExists { .. }
            | Self::LinkCreated { .. }
            | Self::Copied { .. } => Severity::Info,
            Self::SourceMissing { .. } | Self::BrokenSymlinkFound { .. } => Severity::Warning,
            Self::EntryExists { rewrite, .. } => {
                if *rewrite {
                    Severity::Warning
                } else {
                    Severity::Error
                }
            }
        }
    }

    /// Stable machine-readable tag, recorded as a structured field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ManifestLoaded { .. } => "manifest_loaded",
            Self::SourceMissing { .. } => "source_missing",
            Self::BrokenSymlinkFound { .. } => "broken_symlink_found",
            Self::SymlinkExists { .. } => "symlink_exists",
            Self::EntryExists { .. } => "entry_exists",
            Self::LinkCreated { .. } => "link_created",
            Self::Copied { .. } => "copied",
        }
    }
}

const fn action(rewrite: bool) -> &'static str {
    if rewrite { "replacing" } else { "skipping" }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ManifestLoaded { path, directories } => write!(
                f,
                "Read manifest {} ({directories} directories)",
                path.display()
            ),
            Self::SourceMissing { src } => write!(
                f,
                "The source file or directory {} does not exist. Check the manifest and try again.",
                src.display()
            ),
            Self::BrokenSymlinkFound { dst, rewrite } => write!(
                f,
                "A broken symbolic link already exists: {} ({})",
                dst.display(),
                action(*rewrite)
            ),
            Self::SymlinkExists { dst, rewrite } => write!(
                f,
                "A symbolic link already exists: {} ({})",
                dst.display(),
                action(*rewrite)
            ),
            Self::EntryExists { dst, rewrite } => write!(
                f,
                "A file or directory already exists: {} ({})",
                dst.display(),
                action(*rewrite)
            ),
            Self::LinkCreated { src, dst } => write!(
                f,
                "Created symbolic link {} -> {}",
                dst.display(),
                src.display()
            ),
            Self::Copied { src, dst } => {
                write!(f, "Copied {} -> {}", src.display(), dst.display())
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn conflict_messages_have_stable_prefixes() {
        let dst = PathBuf::from("dst/a.txt");
        let cases = [
            (
                Event::SymlinkExists {
                    dst: dst.clone(),
                    rewrite: false,
                },
                "A symbolic link already exists: dst/a.txt",
            ),
            (
                Event::BrokenSymlinkFound {
                    dst: dst.clone(),
                    rewrite: true,
                },
                "A broken symbolic link already exists: dst/a.txt",
            ),
            (
                Event::EntryExists {
                    dst,
                    rewrite: false,
                },
                "A file or directory already exists: dst/a.txt",
            ),
        ];
        for (event, prefix) in cases {
            assert!(
                event.to_string().starts_with(prefix),
                "{event} does not start with {prefix}"
            );
        }
    }

    #[test]
    fn rewrite_decision_is_part_of_message() {
        let skipped = Event::SymlinkExists {
            dst: PathBuf::from("x"),
            rewrite: false,
        };
        let replaced = Event::SymlinkExists {
            dst: PathBuf::from("x"),
            rewrite: true,
        };
        assert!(skipped.to_string().ends_with("(skipping)"));
        assert!(replaced.to_string().ends_with("(replacing)"));
    }

    #[test]
    fn source_missing_message() {
        let event = Event::SourceMissing {
            src: PathBuf::from("src/configs/gone.txt"),
        };
        assert_eq!(
            event.to_string(),
            "The source file or directory src/configs/gone.txt does not exist. Check the manifest and try again."
        );
        assert_eq!(event.severity(), Severity::Warning);
    }

    #[test]
    fn link_created_names_link_then_target() {
        let event = Event::LinkCreated {
            src: PathBuf::from("/abs/src/a.txt"),
            dst: PathBuf::from("/abs/dst/a.txt"),
        };
        assert_eq!(
            event.to_string(),
            "Created symbolic link /abs/dst/a.txt -> /abs/src/a.txt"
        );
    }

    #[test]
    fn real_entry_in_the_way_is_an_error_only_when_kept() {
        let kept = Event::EntryExists {
            dst: PathBuf::from("x"),
            rewrite: false,
        };
        let replaced = Event::EntryExists {
            dst: PathBuf::from("x"),
            rewrite: true,
        };
        assert_eq!(kept.severity(), Severity::Error);
        assert_eq!(replaced.severity(), Severity::Warning);
    }

    #[test]
    fn symlink_conflicts_are_distinguishable_from_real_entries() {
        let link = Event::SymlinkExists {
            dst: PathBuf::from("x"),
            rewrite: false,
        };
        let broken = Event::BrokenSymlinkFound {
            dst: PathBuf::from("x"),
            rewrite: false,
        };
        let entry = Event::EntryExists {
            dst: PathBuf::from("x"),
            rewrite: false,
        };
        assert_ne!(link.kind(), entry.kind());
        assert_ne!(broken.kind(), entry.kind());
        assert_ne!(link.kind(), broken.kind());
    }
}
