//! Build script: embeds the version reported by `lnmc --version`.
//!
//! `LNMC_VERSION` from the environment wins; otherwise `git describe` is
//! used, and without either the package version applies at compile time.
use std::process::Command;

fn main() {
    // Prefer LNMC_VERSION env var if set (e.g., by a release workflow),
    // otherwise fall back to git describe for local development builds.
    if let Ok(version) = std::env::var("LNMC_VERSION") {
        println!("cargo:rustc-env=LNMC_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=LNMC_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=LNMC_VERSION");
}
