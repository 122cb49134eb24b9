//! Top-level command orchestration.
use std::path::Path;

use crate::actions::FileSystemActions;
use crate::cli::Cli;
use crate::config::Config;
use crate::config::manifest::Manifest;
use crate::error::LnmcError;
use crate::logging::{Event, Logger};

/// Validate the arguments, load the manifest, and process every entry.
///
/// # Errors
///
/// Returns [`LnmcError::Usage`] or [`LnmcError::Manifest`] before touching
/// the filesystem, or [`LnmcError::EntriesFailed`] after the run if any
/// entry hit a filesystem fault. Skipped entries are not errors.
pub fn run(cli: &Cli, log: &Logger) -> Result<(), LnmcError> {
    let config = Config::from_cli(cli)?;
    let manifest = load_manifest(&cli.manifest, log)?;

    log.debug(&format!(
        "mode {:?}, rewrite {}, {} -> {}",
        config.mode,
        config.rewrite,
        config.src.display(),
        config.dst.display()
    ));

    FileSystemActions::new(&config, log).run(&manifest);

    log.print_summary();

    let count = log.failure_count();
    if count > 0 {
        return Err(LnmcError::EntriesFailed {
            count,
            total: log.entries().len(),
        });
    }
    Ok(())
}

fn load_manifest(path: &Path, log: &Logger) -> Result<Manifest, LnmcError> {
    let manifest = Manifest::load(path)?;
    log.emit(&Event::ManifestLoaded {
        path: path.to_path_buf(),
        directories: manifest.len(),
    });
    Ok(manifest)
}
