//! Per-invocation export options.
//!
//! Raw flags are validated once into an immutable `ExportOptions`, before any
//! network activity, and passed by reference into the pipeline.

use std::path::PathBuf;

use crate::download::DownloadOptions;
use crate::error::{BrandkitError, Result};
use crate::export::ExportFormat;

/// Flags as parsed from the command line, not yet validated.
#[derive(Debug, Clone, Default)]
pub struct ExportFlags {
    /// `--output json`.
    pub json: bool,
    pub css: bool,
    pub tailwind: bool,
    /// `--download <dir>`.
    pub download: Option<PathBuf>,
    /// `--sha256`: sidecar per downloaded file.
    pub sha256: bool,
    /// `--sha256-manifest <file>`: verify downloads against it.
    pub sha256_manifest: Option<PathBuf>,
    /// `--sha256-manifest-out <file>`.
    pub sha256_manifest_out: Option<PathBuf>,
    pub sha256_manifest_append: bool,
    /// `--sha256-manifest-verify`: fail the batch on mismatch.
    pub sha256_manifest_verify: bool,
    pub user_agent: Option<String>,
}

/// Validated options for one `quick` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Present when assets should be downloaded.
    pub download: Option<DownloadOptions>,
}

impl ExportOptions {
    /// Checks flag combinations and builds the options.
    pub fn from_flags(flags: ExportFlags) -> Result<Self> {
        if flags.css && flags.json {
            return Err(BrandkitError::validation(
                "--css and --output json are mutually exclusive",
            ));
        }
        if flags.tailwind && flags.json {
            return Err(BrandkitError::validation(
                "--tailwind and --output json are mutually exclusive",
            ));
        }
        if flags.tailwind && flags.css {
            return Err(BrandkitError::validation(
                "--tailwind and --css are mutually exclusive",
            ));
        }

        let download = match flags.download {
            Some(root) => {
                if flags.sha256_manifest_append && flags.sha256_manifest_out.is_none() {
                    return Err(BrandkitError::validation(
                        "--sha256-manifest-append requires --sha256-manifest-out",
                    ));
                }
                if flags.sha256_manifest_verify && flags.sha256_manifest.is_none() {
                    return Err(BrandkitError::validation(
                        "--sha256-manifest-verify requires --sha256-manifest",
                    ));
                }
                Some(DownloadOptions {
                    root,
                    write_sidecar: flags.sha256,
                    verify_manifest: flags.sha256_manifest,
                    manifest_out: flags.sha256_manifest_out,
                    append_manifest: flags.sha256_manifest_append,
                    strict_verify: flags.sha256_manifest_verify,
                    user_agent: flags.user_agent,
                })
            }
            None => {
                if flags.sha256_manifest.is_some() {
                    return Err(BrandkitError::validation(
                        "--sha256-manifest requires --download",
                    ));
                }
                if flags.sha256_manifest_out.is_some() {
                    return Err(BrandkitError::validation(
                        "--sha256-manifest-out requires --download",
                    ));
                }
                if flags.sha256_manifest_append {
                    return Err(BrandkitError::validation(
                        "--sha256-manifest-append requires --sha256-manifest-out",
                    ));
                }
                if flags.sha256_manifest_verify {
                    return Err(BrandkitError::validation(
                        "--sha256-manifest-verify requires --sha256-manifest",
                    ));
                }
                None
            }
        };

        let format = if flags.css {
            ExportFormat::Css
        } else if flags.tailwind {
            ExportFormat::Tailwind
        } else if flags.json {
            ExportFormat::Json
        } else {
            ExportFormat::Text
        };

        Ok(Self { format, download })
    }
}
