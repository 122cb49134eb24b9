// Shared helpers for integration tests.
//
// Provides a temporary source tree, destination directory and manifest so
// each integration test can run `lnmc` in isolation without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// An isolated source/destination pair backed by a [`tempfile::TempDir`].
///
/// Paths are canonical so link targets can be compared directly.
#[derive(Debug)]
pub struct Fixture {
    root: tempfile::TempDir,
    /// Source root passed to `lnmc`.
    pub src: PathBuf,
    /// Destination root passed to `lnmc`.
    pub dst: PathBuf,
    /// Manifest file passed to `lnmc`.
    pub manifest: PathBuf,
}

impl Fixture {
    /// Create empty `src/` and `dst/` directories and an empty manifest.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        let base = dunce::canonicalize(root.path()).expect("canonicalize temp dir");
        let src = base.join("src");
        let dst = base.join("dst");
        std::fs::create_dir(&src).expect("create src dir");
        std::fs::create_dir(&dst).expect("create dst dir");
        let manifest = base.join("directories.yaml");
        std::fs::write(&manifest, "").expect("write manifest");
        Self {
            root,
            src,
            dst,
            manifest,
        }
    }

    /// Replace the manifest contents.
    pub fn with_manifest(self, yaml: &str) -> Self {
        std::fs::write(&self.manifest, yaml).expect("write manifest");
        self
    }

    /// Create a file under the source root, including parent directories.
    pub fn with_source_file(self, rel: &str, content: &str) -> Self {
        write_file(&self.src.join(rel), content);
        self
    }

    /// Create a file under the destination root, including parent directories.
    pub fn with_destination_file(self, rel: &str, content: &str) -> Self {
        write_file(&self.dst.join(rel), content);
        self
    }

    /// Path to the temporary root holding `src/`, `dst/` and the manifest.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// An `lnmc` invocation with the fixture's manifest and roots.
    pub fn lnmc(&self) -> Command {
        let mut cmd = Command::cargo_bin("lnmc").expect("binary built");
        cmd.arg(&self.manifest).arg(&self.src).arg(&self.dst);
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Sorted names directly inside the destination root.
    pub fn destination_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.dst)
            .expect("read dst")
            .map(|e| {
                e.expect("dst entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(path, content).expect("write file");
}

/// A bare `lnmc` invocation with no arguments.
pub fn lnmc() -> Command {
    let mut cmd = Command::cargo_bin("lnmc").expect("binary built");
    cmd.env_remove("RUST_LOG");
    cmd
}
