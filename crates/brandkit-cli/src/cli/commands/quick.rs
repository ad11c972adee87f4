//! Quick command: export brand essentials and download assets.

use anyhow::{bail, Result};
use brandkit_core::brand::BrandApiClient;
use brandkit_core::config::BrandkitConfig;
use brandkit_core::download::BatchOutcome;
use brandkit_core::fetcher::CurlFetcher;
use brandkit_core::options::{ExportFlags, ExportOptions};
use brandkit_core::quick;
use std::io;

use crate::cli::{OutputFormat, QuickArgs};

/// Maps parsed arguments plus config defaults to raw export flags.
pub(crate) fn export_flags(args: &QuickArgs, cfg: &BrandkitConfig) -> Result<ExportFlags> {
    let download = match (&args.download, args.download_default) {
        (Some(dir), _) => Some(dir.clone()),
        (None, true) => match &cfg.download_dir {
            Some(dir) => Some(dir.clone()),
            None => bail!("--download-default requires download_dir in config.toml"),
        },
        (None, false) => None,
    };

    Ok(ExportFlags {
        json: args.output == OutputFormat::Json,
        css: args.css,
        tailwind: args.tailwind,
        download,
        sha256: args.sha256,
        sha256_manifest: args.sha256_manifest.clone(),
        sha256_manifest_out: args.sha256_manifest_out.clone(),
        sha256_manifest_append: args.sha256_manifest_append,
        sha256_manifest_verify: args.sha256_manifest_verify,
        user_agent: cfg.user_agent.clone(),
    })
}

/// Validate flags, then fetch, print and download. Flag errors surface before any request.
pub fn run_quick(cfg: &BrandkitConfig, args: QuickArgs) -> Result<()> {
    let opts = ExportOptions::from_flags(export_flags(&args, cfg)?)?;
    let api_key = cfg.api_key_from_env()?;

    let client = BrandApiClient::new(&cfg.api_base_url, &api_key, cfg.curl_options());
    let fetcher = CurlFetcher::new(cfg.curl_options());

    let stdout = io::stdout();
    let stderr = io::stderr();
    let outcome = quick::run_quick(
        &client,
        &fetcher,
        &args.identifiers,
        &opts,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;

    if let Some(report) = &outcome.downloads {
        match report.outcome() {
            BatchOutcome::Done => {
                tracing::info!(files = report.downloaded.len(), "downloads complete");
            }
            BatchOutcome::PartialFailure | BatchOutcome::TotalFailure => {
                tracing::warn!(
                    downloaded = report.downloaded.len(),
                    failed = report.failures.len(),
                    "some assets were not downloaded"
                );
            }
        }
    }
    Ok(())
}
