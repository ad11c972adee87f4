//! Brand API client (`GET /v2/brands/{identifier}`) and its wire payload.

use std::collections::HashMap;

use serde::Deserialize;

use super::{normalize_identifier, BrandAssetSet, BrandSource, ColorEntry, FontEntry};
use crate::error::{BrandkitError, Result};
use crate::fetcher::{perform_get, CurlOptions};

/// Brand API response, reduced to the fields the exporters use.
/// The API sends `null` for many string fields, hence the `Option`s.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub logos: Vec<LogoPayload>,
    #[serde(default)]
    pub colors: Vec<ColorPayload>,
    #[serde(default)]
    pub fonts: Vec<FontPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogoPayload {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub formats: Vec<LogoFormatPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogoFormatPayload {
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorPayload {
    #[serde(default)]
    pub hex: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub brightness: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FontPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Picks the light/dark SVG logos and the favicon.
///
/// Favicon: first format of the first `icon` logo, any format. Logos: first
/// `svg` format of a `logo` with the matching theme.
fn find_logos(logos: &[LogoPayload]) -> (Option<String>, Option<String>, Option<String>) {
    let mut light = None;
    let mut dark = None;
    let mut favicon = None;

    for logo in logos {
        let kind = logo.kind.as_deref().unwrap_or("");
        let theme = logo.theme.as_deref().unwrap_or("");
        for f in &logo.formats {
            let src = match f.src.as_deref() {
                Some(s) if !s.is_empty() => s,
                _ => continue,
            };
            if kind == "icon" && favicon.is_none() {
                favicon = Some(src.to_string());
            }
            if kind != "logo" || f.format.as_deref() != Some("svg") {
                continue;
            }
            if theme == "light" && light.is_none() {
                light = Some(src.to_string());
            }
            if theme == "dark" && dark.is_none() {
                dark = Some(src.to_string());
            }
        }
    }
    (light, dark, favicon)
}

impl From<BrandPayload> for BrandAssetSet {
    fn from(p: BrandPayload) -> Self {
        let (logo_light, logo_dark, favicon) = find_logos(&p.logos);
        BrandAssetSet {
            name: p.name.unwrap_or_default(),
            domain: p.domain.unwrap_or_default(),
            logo_light,
            logo_dark,
            favicon,
            colors: p
                .colors
                .into_iter()
                .map(|c| ColorEntry {
                    hex: c.hex.unwrap_or_default(),
                    semantic_type: c.kind.unwrap_or_default(),
                    brightness: c.brightness.unwrap_or_default(),
                })
                .collect(),
            fonts: p
                .fonts
                .into_iter()
                .map(|f| FontEntry {
                    name: f.name.unwrap_or_default(),
                    semantic_type: f.kind.unwrap_or_default(),
                })
                .collect(),
        }
    }
}

/// Maps an error status to a user-facing API error.
fn api_error(status: u32, body: &[u8]) -> BrandkitError {
    let message = match status {
        401 => "Invalid API key. Set BRANDFETCH_API_KEY or api_key in config.toml.".to_string(),
        404 => "Brand not found".to_string(),
        429 => "Rate limit exceeded. Try again later.".to_string(),
        _ => String::from_utf8_lossy(body).trim().to_string(),
    };
    BrandkitError::Api { status, message }
}

/// Brand API over libcurl, authenticated with a bearer key.
#[derive(Debug, Clone)]
pub struct BrandApiClient {
    base_url: String,
    api_key: String,
    curl: CurlOptions,
}

impl BrandApiClient {
    pub fn new(base_url: &str, api_key: &str, curl: CurlOptions) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            curl,
        }
    }

    /// `{base}/v2/brands/{identifier}` with the identifier percent-encoded as one segment.
    pub fn brand_url(&self, identifier: &str) -> Result<String> {
        let mut u = url::Url::parse(&self.base_url)
            .map_err(|e| BrandkitError::Config(format!("invalid api_base_url: {}", e)))?;
        u.path_segments_mut()
            .map_err(|_| BrandkitError::Config("api_base_url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["v2", "brands", identifier]);
        Ok(u.to_string())
    }
}

impl BrandSource for BrandApiClient {
    fn fetch_brand(&self, identifier: &str) -> Result<BrandAssetSet> {
        let id = normalize_identifier(identifier);
        if id.is_empty() {
            return Err(BrandkitError::validation("identifier is required"));
        }
        let url = self.brand_url(&id)?;

        let mut headers = HashMap::new();
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        );
        headers.insert("Accept".to_string(), "application/json".to_string());

        let mut body = Vec::new();
        let status = perform_get(&url, &headers, self.curl, &mut body)?;
        if status != 200 {
            return Err(api_error(status, &body));
        }

        let payload: BrandPayload = serde_json::from_slice(&body)?;
        tracing::info!(identifier = %id, colors = payload.colors.len(), fonts = payload.fonts.len(), "brand fetched");
        Ok(payload.into())
    }
}
