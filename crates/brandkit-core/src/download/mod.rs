//! Sequential batch download of brand assets with checksum bookkeeping.
//!
//! Brands are processed one at a time, assets within a brand one at a time.
//! A failed asset fetch is reported on the diagnostic stream and skipped.
//! Directory creation failure aborts the batch, as does a manifest
//! verification failure in strict mode.

mod plan;

pub use plan::{plan_assets, target_dir, AssetSlot, PlannedAsset};

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::brand::BrandAssetSet;
use crate::checksum::{build_entry, write_manifest, write_sidecar, ChecksumEntry, Manifest};
use crate::error::{BrandkitError, Result};
use crate::fetcher::{browser_headers, AssetFetcher};
use crate::storage::PartFile;

/// Download and checksum settings for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadOptions {
    /// Shared download root; batch runs add one subdirectory per brand.
    pub root: PathBuf,
    /// Write `<asset>.sha256` next to each downloaded file.
    pub write_sidecar: bool,
    /// Verify each download against this manifest.
    pub verify_manifest: Option<PathBuf>,
    /// Write a manifest of all downloads here after the batch.
    pub manifest_out: Option<PathBuf>,
    /// Merge into an existing `manifest_out` instead of replacing it.
    pub append_manifest: bool,
    /// Abort the batch on the first manifest verification failure.
    pub strict_verify: bool,
    /// Overrides the browser user agent sent with asset requests.
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedAsset {
    pub slot: AssetSlot,
    pub path: PathBuf,
}

/// An asset that could not be fetched or did not verify.
#[derive(Debug)]
pub struct AssetFailure {
    pub slot: AssetSlot,
    pub file_name: String,
    pub error: BrandkitError,
}

/// Terminal state of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every planned asset downloaded (or nothing was planned).
    Done,
    /// Some assets downloaded, some failed.
    PartialFailure,
    /// Assets were planned and none downloaded.
    TotalFailure,
}

/// Accumulated result of a batch: successes, failures and manifest entries.
#[derive(Debug, Default)]
pub struct DownloadReport {
    pub downloaded: Vec<DownloadedAsset>,
    pub failures: Vec<AssetFailure>,
    pub entries: Vec<ChecksumEntry>,
}

impl DownloadReport {
    pub fn outcome(&self) -> BatchOutcome {
        match (self.downloaded.is_empty(), self.failures.is_empty()) {
            (_, true) => BatchOutcome::Done,
            (true, false) => BatchOutcome::TotalFailure,
            (false, false) => BatchOutcome::PartialFailure,
        }
    }
}

/// Drives the fetcher over a batch of brands.
pub struct Downloader<'a, F: AssetFetcher + ?Sized> {
    fetcher: &'a F,
    opts: &'a DownloadOptions,
    headers: HashMap<String, String>,
}

impl<'a, F: AssetFetcher + ?Sized> Downloader<'a, F> {
    pub fn new(fetcher: &'a F, opts: &'a DownloadOptions) -> Self {
        Self {
            fetcher,
            opts,
            headers: browser_headers(opts.user_agent.as_deref()),
        }
    }

    /// Loads the verification manifest (if any), downloads the batch, then
    /// writes the output manifest (if any).
    pub fn run(&self, brands: &[BrandAssetSet], diag: &mut dyn Write) -> Result<DownloadReport> {
        let manifest = match &self.opts.verify_manifest {
            Some(path) => Some(Manifest::load(path)?),
            None => None,
        };

        let report = self.download_batch(brands, manifest.as_ref(), diag)?;
        tracing::info!(
            downloaded = report.downloaded.len(),
            failed = report.failures.len(),
            outcome = ?report.outcome(),
            "download batch finished"
        );

        if let Some(out) = &self.opts.manifest_out {
            write_manifest(out, &report.entries, self.opts.append_manifest)?;
        }
        Ok(report)
    }

    /// Downloads every brand's assets into its target directory.
    pub fn download_batch(
        &self,
        brands: &[BrandAssetSet],
        manifest: Option<&Manifest>,
        diag: &mut dyn Write,
    ) -> Result<DownloadReport> {
        brands
            .iter()
            .try_fold(DownloadReport::default(), |mut report, brand| {
                let dir = target_dir(&self.opts.root, brand, brands.len());
                if let Err(e) = fs::create_dir_all(&dir) {
                    let _ = writeln!(
                        diag,
                        "Error: failed to create directory {}: {}",
                        dir.display(),
                        e
                    );
                    return Err(BrandkitError::io(&dir, e));
                }
                for asset in plan_assets(brand, &dir) {
                    self.process_asset(&asset, manifest, &mut report, diag)?;
                }
                Ok(report)
            })
    }

    /// Fetches one asset, then applies the configured checksum steps.
    /// Only a strict manifest failure is returned as an error.
    fn process_asset(
        &self,
        asset: &PlannedAsset,
        manifest: Option<&Manifest>,
        report: &mut DownloadReport,
        diag: &mut dyn Write,
    ) -> Result<()> {
        let file_name = asset.file_name();

        if let Err(e) = self.fetch_to_disk(asset) {
            tracing::warn!(url = %asset.url, error = %e, "asset download failed");
            let _ = writeln!(diag, "Error: failed to download {}: {}", file_name, e);
            report.failures.push(AssetFailure {
                slot: asset.slot,
                file_name,
                error: e,
            });
            return Ok(());
        }

        let _ = writeln!(diag, "Downloaded: {}", asset.dest.display());
        report.downloaded.push(DownloadedAsset {
            slot: asset.slot,
            path: asset.dest.clone(),
        });

        if self.opts.write_sidecar {
            if let Err(e) = write_sidecar(&asset.dest) {
                let _ = writeln!(
                    diag,
                    "Error: failed to write checksum for {}: {}",
                    file_name, e
                );
            }
        }

        if let Some(manifest) = manifest {
            if let Err(e) = manifest.verify_file(&asset.dest, Some(&self.opts.root)) {
                let _ = writeln!(
                    diag,
                    "Error: checksum verification failed for {}: {}",
                    file_name, e
                );
                if self.opts.strict_verify {
                    return Err(e);
                }
                report.failures.push(AssetFailure {
                    slot: asset.slot,
                    file_name: file_name.clone(),
                    error: e,
                });
            }
        }

        if self.opts.manifest_out.is_some() {
            match build_entry(&asset.dest, Some(&self.opts.root)) {
                Ok(entry) => report.entries.push(entry),
                Err(e) => {
                    let _ = writeln!(
                        diag,
                        "Error: failed to compute checksum for {}: {}",
                        file_name, e
                    );
                }
            }
        }
        Ok(())
    }

    /// Streams the asset into `<dest>.part` and renames it on a 2xx status.
    fn fetch_to_disk(&self, asset: &PlannedAsset) -> Result<()> {
        let mut part = PartFile::create(&asset.dest)?;
        let status = self.fetcher.fetch(&asset.url, &self.headers, &mut part)?;
        if !(200..300).contains(&status) {
            return Err(BrandkitError::HttpStatus {
                url: asset.url.clone(),
                status,
            });
        }
        part.finalize(&asset.dest)?;
        tracing::debug!(path = %asset.dest.display(), "asset saved");
        Ok(())
    }
}
