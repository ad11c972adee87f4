//! `sha256sum`-compatible manifest: `<hex>  <relative path>` per line.
//!
//! Keys are unique and kept sorted; merging is last-write-wins per key, so
//! re-running an append with the same files leaves the manifest unchanged.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use super::{base_name, relative_key, sha256_path, ChecksumEntry};
use crate::error::{BrandkitError, Result};
use crate::storage::write_atomic;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: BTreeMap<String, String>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses manifest text. Blank lines, `#` comments and lines with fewer
    /// than two fields are skipped; a leading `*` (binary mode) or `./` on the
    /// path is dropped.
    pub fn parse(text: &str) -> Self {
        let mut m = Manifest::new();
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let mut fields = trimmed.split_whitespace();
            let (hash, file) = match (fields.next(), fields.next()) {
                (Some(h), Some(f)) => (h, f),
                _ => continue,
            };
            let file = file.strip_prefix('*').unwrap_or(file);
            let file = file.strip_prefix("./").unwrap_or(file);
            if !file.is_empty() {
                m.entries.insert(file.to_string(), hash.to_string());
            }
        }
        m
    }

    /// Reads and parses the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| BrandkitError::io(path, e))?;
        Ok(Self::parse(&text))
    }

    /// Like `load`, but a missing file is an empty manifest.
    pub fn load_or_empty(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(BrandkitError::io(path, e)),
        }
    }

    pub fn get(&self, relative_path: &str) -> Option<&str> {
        self.entries.get(relative_path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by relative path.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Inserts or overwrites; entries with an empty path or digest are ignored.
    pub fn insert(&mut self, entry: &ChecksumEntry) {
        if entry.relative_path.is_empty() || entry.hex_digest.is_empty() {
            return;
        }
        self.entries
            .insert(entry.relative_path.clone(), entry.hex_digest.clone());
    }

    pub fn merge(&mut self, entries: &[ChecksumEntry]) {
        for e in entries {
            self.insert(e);
        }
    }

    /// One `<hex>  <path>\n` line per entry, sorted by path.
    pub fn render(&self) -> String {
        self.iter()
            .map(|(path, hex)| format!("{}  {}\n", hex, path))
            .collect()
    }

    /// Checks `path` against its entry, looked up by root-relative path first
    /// and then by base name.
    pub fn verify_file(&self, path: &Path, root: Option<&Path>) -> Result<()> {
        let name = base_name(path);
        let expected = relative_key(path, root)
            .and_then(|rel| self.get(&rel))
            .or_else(|| self.get(&name))
            .ok_or_else(|| BrandkitError::NoManifestEntry { name: name.clone() })?;

        let actual = sha256_path(path)?;
        if actual.eq_ignore_ascii_case(expected.trim()) {
            Ok(())
        } else {
            Err(BrandkitError::ChecksumMismatch {
                path: path.to_path_buf(),
                expected: expected.to_string(),
                actual,
            })
        }
    }
}

impl FromIterator<ChecksumEntry> for Manifest {
    fn from_iter<I: IntoIterator<Item = ChecksumEntry>>(iter: I) -> Self {
        let mut m = Manifest::new();
        for e in iter {
            m.insert(&e);
        }
        m
    }
}

/// Writes `entries` to the manifest at `path`, sorted by relative path.
///
/// With `append`, an existing manifest is read first (absent = empty) and the
/// new entries overwrite matching keys. Refuses to write an empty manifest.
/// The file is replaced via a `.part` file and rename.
pub fn write_manifest(path: &Path, entries: &[ChecksumEntry], append: bool) -> Result<()> {
    if entries.is_empty() && !append {
        return Err(BrandkitError::validation("no downloaded files to write"));
    }

    let mut merged = if append {
        Manifest::load_or_empty(path)?
    } else {
        Manifest::new()
    };
    merged.merge(entries);
    if merged.is_empty() {
        return Err(BrandkitError::validation("no downloaded files to write"));
    }

    write_atomic(path, merged.render().as_bytes())?;

    tracing::info!(path = %path.display(), entries = merged.len(), append, "wrote sha256 manifest");
    Ok(())
}
