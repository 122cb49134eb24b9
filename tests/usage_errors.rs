#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for argument and manifest validation.
//!
//! Every case here must fail before anything is written to the destination.

mod common;

use common::Fixture;
use predicates::prelude::*;

#[test]
fn no_arguments_prints_usage() {
    common::lnmc()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_prints_version() {
    common::lnmc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("lnmc "));
}

#[test]
fn missing_manifest_is_rejected() {
    let fx = Fixture::new();
    std::fs::remove_file(&fx.manifest).unwrap();

    fx.lnmc()
        .assert()
        .failure()
        .stderr(predicate::str::contains("manifest does not exist"));
}

#[test]
fn source_root_must_be_a_directory() {
    let fx = Fixture::new().with_manifest("configs: ~\n");

    common::lnmc()
        .arg(&fx.manifest)
        .arg(&fx.manifest)
        .arg(&fx.dst)
        .assert()
        .failure()
        .stderr(predicate::str::contains("source root is not a directory"));
}

#[test]
fn missing_destination_root_is_rejected() {
    let fx = Fixture::new().with_manifest("configs: ~\n");

    common::lnmc()
        .arg(&fx.manifest)
        .arg(&fx.src)
        .arg(fx.root_path().join("nowhere"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("destination root does not exist"));
}

#[test]
fn list_manifest_is_rejected_and_names_the_file() {
    let fx = Fixture::new()
        .with_source_file("configs/a.txt", "A")
        .with_manifest("- configs\n- other\n");

    fx.lnmc()
        .assert()
        .failure()
        .stderr(predicate::str::contains("directories.yaml"))
        .stderr(predicate::str::contains("must contain a mapping"));

    assert!(fx.destination_names().is_empty());
}

#[test]
fn scalar_entries_are_rejected() {
    let fx = Fixture::new().with_manifest("configs: a.txt\n");

    fx.lnmc()
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be null or a list"));
}

#[test]
fn empty_manifest_is_rejected() {
    let fx = Fixture::new();

    fx.lnmc()
        .assert()
        .failure()
        .stderr(predicate::str::contains("is empty"));
}
