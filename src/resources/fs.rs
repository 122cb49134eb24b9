//! File-system primitives used by the action engine.
use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ActionError;

/// Resolve `dst` to an absolute path without requiring it to exist.
///
/// The parent directory is canonicalized and the file name re-attached, so
/// an existing link at `dst` is not followed. The parent must exist; this
/// crate never creates destination directory structure.
///
/// # Errors
///
/// Returns [`ActionError::DestinationParentMissing`] if the parent does not
/// exist, or an I/O error if it cannot be canonicalized.
pub fn absolute_destination(dst: &Path) -> Result<PathBuf> {
    let parent = dst
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    if !parent.is_dir() {
        return Err(ActionError::DestinationParentMissing {
            path: parent.to_path_buf(),
        }
        .into());
    }
    let parent = dunce::canonicalize(parent)
        .with_context(|| format!("resolving {}", parent.display()))?;
    Ok(match dst.file_name() {
        Some(name) => parent.join(name),
        None => parent,
    })
}

/// Create a symlink at `link` pointing to `target`.
///
/// # Errors
///
/// Returns an error if the link cannot be created.
pub fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(target, link).with_context(|| {
            format!(
                "creating symlink {} -> {}",
                link.display(),
                target.display()
            )
        })?;
    }

    #[cfg(windows)]
    {
        let result = if target.is_dir() {
            std::os::windows::fs::symlink_dir(target, link)
        } else {
            std::os::windows::fs::symlink_file(target, link)
        };
        result.with_context(|| {
            format!(
                "creating symlink {} -> {}",
                link.display(),
                target.display()
            )
        })?;
    }

    Ok(())
}

/// Remove a symlink (valid or dangling) without touching its target.
///
/// On Windows, directory symlinks must be removed with `remove_dir` (not
/// `remove_file`); `symlink_metadata().is_dir()` is `false` for them, so the
/// raw `FILE_ATTRIBUTE_DIRECTORY` flag is checked instead.
///
/// # Errors
///
/// Returns an error if the link cannot be inspected or removed.
pub fn remove_symlink(path: &Path) -> Result<()> {
    let meta =
        fs::symlink_metadata(path).with_context(|| format!("reading metadata: {}", path.display()))?;
    if is_dir_like(&meta) {
        fs::remove_dir(path).with_context(|| format!("removing link: {}", path.display()))?;
    } else {
        fs::remove_file(path).with_context(|| format!("removing link: {}", path.display()))?;
    }
    Ok(())
}

/// Check if metadata represents a directory-like entry.
fn is_dir_like(meta: &fs::Metadata) -> bool {
    #[cfg(windows)]
    {
        use std::os::windows::fs::MetadataExt;
        meta.file_attributes() & 0x10 != 0 // FILE_ATTRIBUTE_DIRECTORY
    }
    #[cfg(not(windows))]
    {
        meta.is_dir()
    }
}

/// Remove a real file or directory. Directories are removed recursively;
/// symlinks inside them are unlinked, never followed.
///
/// # Errors
///
/// Returns an error if anything under `path` cannot be removed.
pub fn remove_entry(path: &Path) -> Result<()> {
    let meta =
        fs::symlink_metadata(path).with_context(|| format!("reading metadata: {}", path.display()))?;
    if meta.is_dir() {
        fs::remove_dir_all(path).with_context(|| format!("removing directory: {}", path.display()))
    } else {
        fs::remove_file(path).with_context(|| format!("removing file: {}", path.display()))
    }
}

/// Copy a file or a whole directory tree from `src` to `dst`.
///
/// # Errors
///
/// Returns [`ActionError::UnsupportedFileType`] for anything that is neither
/// a regular file nor a directory, or an I/O error if copying fails.
pub fn copy_entry(src: &Path, dst: &Path) -> Result<()> {
    let meta = fs::metadata(src).with_context(|| format!("reading metadata: {}", src.display()))?;
    if meta.is_dir() {
        copy_dir_recursive(src, dst)
    } else if meta.is_file() {
        copy_file(src, dst, &meta)
    } else {
        Err(ActionError::UnsupportedFileType {
            path: src.to_path_buf(),
        }
        .into())
    }
}

/// Copy a regular file's contents, permissions, and timestamps.
fn copy_file(src: &Path, dst: &Path, meta: &fs::Metadata) -> Result<()> {
    fs::copy(src, dst)
        .with_context(|| format!("copying {} to {}", src.display(), dst.display()))?;
    copy_times(dst, meta)
}

/// Recursively copy a directory tree.
///
/// Symlinks within the source tree are *followed*: their content is copied
/// rather than the link itself. Each directory gets the source directory's
/// permissions and timestamps once its contents are in place.
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir(dst).with_context(|| format!("creating directory {}", dst.display()))?;
    for entry in fs::read_dir(src).with_context(|| format!("reading directory {}", src.display()))?
    {
        let entry = entry.with_context(|| format!("reading entry in {}", src.display()))?;
        copy_entry(&entry.path(), &dst.join(entry.file_name()))?;
    }

    let meta = fs::metadata(src).with_context(|| format!("reading metadata: {}", src.display()))?;
    fs::set_permissions(dst, meta.permissions())
        .with_context(|| format!("setting permissions on {}", dst.display()))?;
    copy_times(dst, &meta)
}

/// Apply the access and modification times from `meta` to `dst`.
fn copy_times(dst: &Path, meta: &fs::Metadata) -> Result<()> {
    let atime = filetime::FileTime::from_last_access_time(meta);
    let mtime = filetime::FileTime::from_last_modification_time(meta);
    filetime::set_file_times(dst, atime, mtime)
        .with_context(|| format!("setting timestamps on {}", dst.display()))
}
