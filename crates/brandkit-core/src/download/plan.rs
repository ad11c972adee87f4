//! Where each brand's assets go and what they are called.

use std::path::{Path, PathBuf};

use crate::brand::BrandAssetSet;
use crate::export::hyphen_token;
use crate::fetcher::extension_from_url;

/// The three well-known asset slots of a brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSlot {
    LogoLight,
    LogoDark,
    Favicon,
}

impl AssetSlot {
    pub const ALL: [AssetSlot; 3] = [AssetSlot::LogoLight, AssetSlot::LogoDark, AssetSlot::Favicon];

    fn url<'a>(&self, brand: &'a BrandAssetSet) -> Option<&'a str> {
        let url = match self {
            AssetSlot::LogoLight => brand.logo_light.as_deref(),
            AssetSlot::LogoDark => brand.logo_dark.as_deref(),
            AssetSlot::Favicon => brand.favicon.as_deref(),
        };
        url.filter(|u| !u.is_empty())
    }

    /// `logo-light.svg`, `logo-dark.svg`, or `favicon` plus the URL's extension.
    pub fn file_name(&self, url: &str) -> String {
        match self {
            AssetSlot::LogoLight => "logo-light.svg".to_string(),
            AssetSlot::LogoDark => "logo-dark.svg".to_string(),
            AssetSlot::Favicon => format!("favicon{}", extension_from_url(url)),
        }
    }
}

/// One asset to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAsset {
    pub slot: AssetSlot,
    pub url: String,
    pub dest: PathBuf,
}

impl PlannedAsset {
    pub fn file_name(&self) -> String {
        self.dest
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// The shared root for a single brand, `<root>/<domain token>` in batch mode.
pub fn target_dir(root: &Path, brand: &BrandAssetSet, batch_len: usize) -> PathBuf {
    if batch_len > 1 {
        root.join(hyphen_token(&brand.domain))
    } else {
        root.to_path_buf()
    }
}

/// Assets with a non-empty URL, in slot order.
pub fn plan_assets(brand: &BrandAssetSet, dir: &Path) -> Vec<PlannedAsset> {
    AssetSlot::ALL
        .iter()
        .filter_map(|slot| {
            slot.url(brand).map(|url| PlannedAsset {
                slot: *slot,
                url: url.to_string(),
                dest: dir.join(slot.file_name(url)),
            })
        })
        .collect()
}
