//! Destination probing.
use std::path::Path;

/// What currently occupies a destination path.
///
/// Computed fresh on every call; an earlier entry in the same run may have
/// created or removed the path.
///
/// # Examples
///
/// ```
/// use lnmc::resources::probe::{DestinationState, classify};
///
/// let state = classify(std::path::Path::new("/definitely/not/here"));
/// assert_eq!(state, DestinationState::Absent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationState {
    /// Nothing is there.
    Absent,
    /// A symbolic link whose target exists.
    ValidSymlink,
    /// A symbolic link whose target is gone.
    BrokenSymlink,
    /// A regular file or directory (not a link).
    RealEntry,
}

/// Classify `path` without following or modifying anything.
///
/// A link is only considered valid when its target can be resolved; a path
/// that cannot be inspected at all is treated as absent.
#[must_use]
pub fn classify(path: &Path) -> DestinationState {
    let is_symlink = path
        .symlink_metadata()
        .is_ok_and(|m| m.file_type().is_symlink());
    let resolves = std::fs::metadata(path).is_ok();

    match (is_symlink, resolves) {
        (true, false) => DestinationState::BrokenSymlink,
        (true, true) => DestinationState::ValidSymlink,
        (false, true) => DestinationState::RealEntry,
        (false, false) => DestinationState::Absent,
    }
}
