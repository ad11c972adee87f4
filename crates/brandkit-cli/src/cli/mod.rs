//! CLI for brandkit.

mod commands;

use anyhow::Result;
use brandkit_core::config;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{run_checksum, run_completions, run_quick};

/// Top-level CLI for brandkit.
#[derive(Debug, Parser)]
#[command(name = "brandkit")]
#[command(about = "Brand colors, fonts and logos as CSS, Tailwind config and verified downloads", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Plain output modes of `quick` (`--css`/`--tailwind` override text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct QuickArgs {
    /// Domains, brand IDs or other identifiers to fetch.
    #[arg(required = true, value_name = "IDENTIFIER")]
    pub identifiers: Vec<String>,

    /// Output format for the brand summary.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Output colors and fonts as CSS custom properties.
    #[arg(long)]
    pub css: bool,

    /// Output colors and fonts as a Tailwind CSS config.
    #[arg(long)]
    pub tailwind: bool,

    /// Download assets to DIR.
    #[arg(short, long, value_name = "DIR")]
    pub download: Option<PathBuf>,

    /// Download assets to `download_dir` from config.toml.
    #[arg(short = 'D', long, conflicts_with = "download")]
    pub download_default: bool,

    /// Write a `.sha256` file next to each download.
    #[arg(long)]
    pub sha256: bool,

    /// Verify downloads against a SHA-256 manifest file.
    #[arg(long, value_name = "FILE")]
    pub sha256_manifest: Option<PathBuf>,

    /// Write a SHA-256 manifest file for downloads.
    #[arg(long, value_name = "FILE")]
    pub sha256_manifest_out: Option<PathBuf>,

    /// Merge checksums into an existing manifest.
    #[arg(long)]
    pub sha256_manifest_append: bool,

    /// Fail when checksum verification mismatches.
    #[arg(long)]
    pub sha256_manifest_verify: bool,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch brand essentials and optionally download logos and favicon.
    Quick(QuickArgs),

    /// Compute SHA-256 of files, or verify them.
    Checksum {
        /// Files to hash.
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Expected digest; fails when a file does not match.
        #[arg(long, value_name = "HEX", conflicts_with = "manifest")]
        verify: Option<String>,

        /// Verify each file against this manifest instead of printing digests.
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,

        /// Directory the manifest's relative paths are rooted at.
        #[arg(long, value_name = "DIR", requires = "manifest")]
        root: Option<PathBuf>,
    },

    /// Print a shell completion script to stdout.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Quick(args) => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_quick(&cfg, args)?;
            }
            CliCommand::Checksum {
                paths,
                verify,
                manifest,
                root,
            } => run_checksum(&paths, verify.as_deref(), manifest.as_deref(), root.as_deref())?,
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
