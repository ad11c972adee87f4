//! Error taxonomy for export, download and checksum operations.
//!
//! Per-asset network and checksum failures are recoverable: the download
//! orchestrator reports them and moves on. Everything else aborts the command.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrandkitError>;

#[derive(Debug, Error)]
pub enum BrandkitError {
    /// File or directory could not be created, read or written.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Transport failure (DNS, connect, TLS, timeout, aborted write to the sink).
    #[error("{url}: {reason}")]
    Network { url: String, reason: String },

    /// Non-2xx HTTP status on an asset fetch.
    #[error("HTTP {status}")]
    HttpStatus { url: String, status: u32 },

    /// Computed digest differs from the expected one.
    #[error("sha256 mismatch for {}: expected {expected}, got {actual}", path.display())]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    /// Manifest has neither the root-relative path nor the base name of the file.
    #[error("no manifest entry for {name}")]
    NoManifestEntry { name: String },

    /// Invalid flag combination or an empty manifest write.
    #[error("{0}")]
    Validation(String),

    /// Brand API returned an error status.
    #[error("API error ({status}): {message}")]
    Api { status: u32, message: String },

    /// JSON encode/decode failure (Brand API payloads, JSON output).
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// Every identifier in the batch failed to fetch.
    #[error("failed to fetch all identifiers: {}", .0.join("; "))]
    NothingFetched(Vec<String>),

    /// Missing credentials or unreadable configuration.
    #[error("{0}")]
    Config(String),
}

impl BrandkitError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BrandkitError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        BrandkitError::Validation(msg.into())
    }

    /// True for failures that only skip one asset and never unwind a batch.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BrandkitError::Network { .. }
                | BrandkitError::HttpStatus { .. }
                | BrandkitError::ChecksumMismatch { .. }
                | BrandkitError::NoManifestEntry { .. }
        )
    }
}
