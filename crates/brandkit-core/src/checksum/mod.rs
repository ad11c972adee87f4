//! SHA-256 checksums for downloaded assets: digests, sidecar files and
//! `sha256sum`-style manifests.
//!
//! Hashing runs after a download completes, never inline with the transfer.

mod manifest;

pub use manifest::{write_manifest, Manifest};

use std::fs::{self, File};
use std::io::Read;
use std::path::{Component, Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{BrandkitError, Result};

const BUF_SIZE: usize = 64 * 1024;

/// Suffix of the per-file checksum written next to an asset.
pub const SIDECAR_SUFFIX: &str = ".sha256";

/// Compute SHA-256 of a file and return the digest as lowercase hex.
/// Reads in chunks to keep memory use bounded.
pub fn sha256_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).map_err(|e| BrandkitError::io(path, e))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f.read(&mut buf).map_err(|e| BrandkitError::io(path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Case-insensitive comparison of the file digest against `expected` (trimmed).
pub fn verify_sha256(path: &Path, expected: &str) -> Result<bool> {
    let sum = sha256_path(path)?;
    Ok(sum.eq_ignore_ascii_case(expected.trim()))
}

/// Like `verify_sha256` but a mismatch is an error carrying both digests.
pub fn ensure_sha256(path: &Path, expected: &str) -> Result<()> {
    let actual = sha256_path(path)?;
    if actual.eq_ignore_ascii_case(expected.trim()) {
        Ok(())
    } else {
        Err(BrandkitError::ChecksumMismatch {
            path: path.to_path_buf(),
            expected: expected.trim().to_string(),
            actual,
        })
    }
}

/// Path of the sidecar for `path` (`logo.svg` → `logo.svg.sha256`).
pub fn sidecar_path(path: &Path) -> PathBuf {
    let mut o = path.as_os_str().to_owned();
    o.push(SIDECAR_SUFFIX);
    PathBuf::from(o)
}

/// Writes `<hex>  <basename>\n` to `<path>.sha256` and returns the sidecar path.
pub fn write_sidecar(path: &Path) -> Result<PathBuf> {
    let sum = sha256_path(path)?;
    let out = sidecar_path(path);
    let content = format!("{}  {}\n", sum, base_name(path));
    fs::write(&out, content).map_err(|e| BrandkitError::io(&out, e))?;
    tracing::debug!(path = %out.display(), "wrote checksum sidecar");
    Ok(out)
}

/// One manifest line: a relative path and its hex digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumEntry {
    pub relative_path: String,
    pub hex_digest: String,
}

impl ChecksumEntry {
    pub fn new(relative_path: &str, hex_digest: &str) -> Self {
        Self {
            relative_path: relative_path.to_string(),
            hex_digest: hex_digest.to_string(),
        }
    }
}

pub(crate) fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Lexically cleans `path`: drops `.` and resolves `..` against the preceding
/// component. The filesystem is not consulted, so symlinks are not followed.
fn clean_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for c in path.components() {
        match c {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// `path` relative to `root` with `/` separators, when that is meaningful
/// (root given, path under it, result neither empty nor `.`). Both paths are
/// cleaned first, so `./brands` and `brands` name the same root.
pub(crate) fn relative_key(path: &Path, root: Option<&Path>) -> Option<String> {
    let root = root.filter(|r| !r.as_os_str().is_empty())?;
    let path = clean_path(path);
    let root = clean_path(root);
    let rel = path.strip_prefix(&root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    let key = parts.join("/");
    if key.is_empty() || key == "." {
        None
    } else {
        Some(key)
    }
}

/// Digest of `path`, keyed by its path relative to `root`, or by base name.
pub fn build_entry(path: &Path, root: Option<&Path>) -> Result<ChecksumEntry> {
    let hex_digest = sha256_path(path)?;
    let relative_path = relative_key(path, root).unwrap_or_else(|| base_name(path));
    Ok(ChecksumEntry {
        relative_path,
        hex_digest,
    })
}
