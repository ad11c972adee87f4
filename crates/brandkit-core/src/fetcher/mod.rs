//! Asset retrieval.
//!
//! The orchestrator talks to an `AssetFetcher`; the production implementation
//! is libcurl via the `curl` crate, blocking on the calling thread.

mod http;
mod url_ext;

pub use http::{perform_get, CurlFetcher};
pub use url_ext::extension_from_url;

use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

use crate::error::Result;

/// Chrome on macOS. CDNs in front of logo hosts reject obvious bot agents with 403.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const BROWSER_ACCEPT: &str = "image/svg+xml,image/webp,image/apng,image/*,*/*;q=0.8";

/// Retrieves raw bytes for a URL.
pub trait AssetFetcher {
    /// GETs `url` with `headers`, streaming the response body into `sink`.
    /// Returns the final HTTP status; transport failures are errors.
    fn fetch(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        sink: &mut dyn Write,
    ) -> Result<u32>;
}

/// Timeouts applied to every curl handle.
#[derive(Debug, Clone, Copy)]
pub struct CurlOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for CurlOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Request headers that make an asset fetch look like an ordinary browser.
pub fn browser_headers(user_agent: Option<&str>) -> HashMap<String, String> {
    let mut h = HashMap::new();
    h.insert(
        "User-Agent".to_string(),
        user_agent.unwrap_or(BROWSER_USER_AGENT).to_string(),
    );
    h.insert("Accept".to_string(), BROWSER_ACCEPT.to_string());
    h.insert("Accept-Language".to_string(), "en-US,en;q=0.9".to_string());
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_headers_default_agent() {
        let h = browser_headers(None);
        assert!(h["User-Agent"].starts_with("Mozilla/5.0"));
        assert!(h["Accept"].contains("image/svg+xml"));
        assert_eq!(h["Accept-Language"], "en-US,en;q=0.9");
    }

    #[test]
    fn browser_headers_override_agent() {
        let h = browser_headers(Some("custom/1.0"));
        assert_eq!(h["User-Agent"], "custom/1.0");
    }
}
