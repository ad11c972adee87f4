//! The `quick` pipeline: fetch brands, print the export, then download assets.

use std::io::Write;

use crate::brand::{fetch_batch, BrandAssetSet, BrandSource};
use crate::download::{DownloadReport, Downloader};
use crate::error::{BrandkitError, Result};
use crate::export::render;
use crate::fetcher::AssetFetcher;
use crate::options::ExportOptions;

/// What a `quick` run produced.
#[derive(Debug)]
pub struct QuickOutcome {
    pub brands: Vec<BrandAssetSet>,
    pub downloads: Option<DownloadReport>,
}

/// Runs one invocation. Export text is written to `out` before any download
/// starts; per-item failures go to `diag`.
pub fn run_quick<S, F>(
    source: &S,
    fetcher: &F,
    identifiers: &[String],
    opts: &ExportOptions,
    out: &mut dyn Write,
    diag: &mut dyn Write,
) -> Result<QuickOutcome>
where
    S: BrandSource + ?Sized,
    F: AssetFetcher + ?Sized,
{
    if identifiers.is_empty() {
        return Err(BrandkitError::validation("at least one identifier is required"));
    }

    let brands = fetch_batch(source, identifiers, diag)?;

    let rendered = render(&brands, opts.format)?;
    writeln!(out, "{}", rendered).map_err(|e| BrandkitError::io("<stdout>", e))?;
    out.flush().map_err(|e| BrandkitError::io("<stdout>", e))?;

    let downloads = match &opts.download {
        Some(dl) => Some(Downloader::new(fetcher, dl).run(&brands, diag)?),
        None => None,
    };

    Ok(QuickOutcome { brands, downloads })
}
