//! Command-line interface definition.
use clap::Parser;
use std::path::PathBuf;

/// Create symbolic links (or copies) in batches from a YAML manifest.
///
/// The manifest maps directories under SRC to the files and subdirectories
/// that should appear in DST. A directory mapped to `null` contributes every
/// entry it contains.
///
#[cfg_attr(not(doctest), doc = "     $ lnmc directories.yaml ~/dotfiles ~/.config")]
#[derive(Parser, Debug)]
#[command(
    name = "lnmc",
    version = option_env!("LNMC_VERSION").unwrap_or(env!("CARGO_PKG_VERSION")),
    verbatim_doc_comment
)]
pub struct Cli {
    /// YAML manifest mapping source directories to entries
    pub manifest: PathBuf,

    /// Root directory the manifest keys are relative to
    pub src: PathBuf,

    /// Directory where the links or copies are created
    pub dst: PathBuf,

    /// Copy files and directories instead of creating symbolic links
    #[arg(long)]
    pub copy: bool,

    /// Overwrite existing files, directories and symbolic links
    #[arg(long, overrides_with = "no_rewrite")]
    pub rewrite: bool,

    /// Keep existing destinations untouched (default)
    #[arg(long = "no-rewrite", overrides_with = "rewrite")]
    pub no_rewrite: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_positional_paths() {
        let cli = Cli::parse_from(["lnmc", "dirs.yaml", "src", "dst"]);
        assert_eq!(cli.manifest, PathBuf::from("dirs.yaml"));
        assert_eq!(cli.src, PathBuf::from("src"));
        assert_eq!(cli.dst, PathBuf::from("dst"));
        assert!(!cli.copy);
        assert!(!cli.rewrite);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_copy() {
        let cli = Cli::parse_from(["lnmc", "m.yaml", "s", "d", "--copy"]);
        assert!(cli.copy);
    }

    #[test]
    fn parse_rewrite() {
        let cli = Cli::parse_from(["lnmc", "m.yaml", "s", "d", "--rewrite"]);
        assert!(cli.rewrite);
    }

    #[test]
    fn last_of_rewrite_and_no_rewrite_wins() {
        let cli = Cli::parse_from(["lnmc", "m.yaml", "s", "d", "--rewrite", "--no-rewrite"]);
        assert!(!cli.rewrite);

        let cli = Cli::parse_from(["lnmc", "m.yaml", "s", "d", "--no-rewrite", "--rewrite"]);
        assert!(cli.rewrite);
    }

    #[test]
    fn parse_verbose_short() {
        let cli = Cli::parse_from(["lnmc", "-v", "m.yaml", "s", "d"]);
        assert!(cli.verbose);
    }

    #[test]
    fn missing_positional_is_an_error() {
        let result = Cli::try_parse_from(["lnmc", "m.yaml", "s"]);
        assert!(result.is_err());
    }
}
