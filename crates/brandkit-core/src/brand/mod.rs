//! Brand data model and the `BrandSource` seam.
//!
//! A `BrandAssetSet` is built once per identifier from the Brand API payload
//! and is read-only afterwards. Color and font order is arrival order; the
//! naming and export layers depend on it.

mod api;
mod identifier;

pub use api::{
    BrandApiClient, BrandPayload, ColorPayload, FontPayload, LogoFormatPayload, LogoPayload,
};
pub use identifier::{normalize_domain, normalize_identifier};

use std::io::Write;

use serde::Serialize;

use crate::error::{BrandkitError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorEntry {
    /// `#RRGGBB`, case preserved.
    pub hex: String,
    #[serde(rename = "type")]
    pub semantic_type: String,
    pub brightness: i64,
}

impl ColorEntry {
    pub fn new(hex: &str, semantic_type: &str) -> Self {
        Self {
            hex: hex.to_string(),
            semantic_type: semantic_type.to_string(),
            brightness: 0,
        }
    }
}

/// Two fonts are the same iff `(name, semantic_type)` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FontEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub semantic_type: String,
}

impl FontEntry {
    pub fn new(name: &str, semantic_type: &str) -> Self {
        Self {
            name: name.to_string(),
            semantic_type: semantic_type.to_string(),
        }
    }
}

/// Essentials of one brand: display name, domain, derived asset URLs, palette and fonts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BrandAssetSet {
    pub name: String,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_light: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_dark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    pub colors: Vec<ColorEntry>,
    pub fonts: Vec<FontEntry>,
}

impl BrandAssetSet {
    pub fn new(name: &str, domain: &str) -> Self {
        Self {
            name: name.to_string(),
            domain: domain.to_string(),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, semantic_type: &str, hex: &str) -> Self {
        self.colors.push(ColorEntry::new(hex, semantic_type));
        self
    }

    pub fn with_font(mut self, semantic_type: &str, name: &str) -> Self {
        self.fonts.push(FontEntry::new(name, semantic_type));
        self
    }
}

/// Returns the brand record for an identifier (domain, brand id, ISIN, ...).
pub trait BrandSource {
    fn fetch_brand(&self, identifier: &str) -> Result<BrandAssetSet>;
}

/// Fetches every identifier in order, continuing past failures.
///
/// Each failure is written to `diag` as `Error fetching <id>: <err>`. Fails only
/// when no identifier could be fetched at all.
pub fn fetch_batch<S: BrandSource + ?Sized>(
    source: &S,
    identifiers: &[String],
    diag: &mut dyn Write,
) -> Result<Vec<BrandAssetSet>> {
    let (brands, failures) = identifiers.iter().fold(
        (Vec::new(), Vec::new()),
        |(mut brands, mut failures), id| {
            match source.fetch_brand(id) {
                Ok(brand) => {
                    tracing::debug!(identifier = %id, name = %brand.name, "fetched brand");
                    brands.push(brand);
                }
                Err(e) => {
                    tracing::warn!(identifier = %id, error = %e, "brand fetch failed");
                    let _ = writeln!(diag, "Error fetching {}: {}", id, e);
                    failures.push(format!("{}: {}", id, e));
                }
            }
            (brands, failures)
        },
    );

    if brands.is_empty() {
        return Err(BrandkitError::NothingFetched(failures));
    }
    Ok(brands)
}
