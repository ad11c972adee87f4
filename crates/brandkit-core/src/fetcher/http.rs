//! libcurl-backed GET.

use std::collections::HashMap;
use std::io::{self, Write};

use super::{AssetFetcher, CurlOptions};
use crate::error::{BrandkitError, Result};

/// Blocking fetcher; one curl handle per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlFetcher {
    opts: CurlOptions,
}

impl CurlFetcher {
    pub fn new(opts: CurlOptions) -> Self {
        Self { opts }
    }
}

impl AssetFetcher for CurlFetcher {
    fn fetch(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        sink: &mut dyn Write,
    ) -> Result<u32> {
        perform_get(url, headers, self.opts, sink)
    }
}

/// Performs a GET following redirects, writing the body to `sink` as it arrives.
///
/// Returns the HTTP status of the final response. A sink write failure aborts
/// the transfer and is reported as a `Network` error with a `write aborted` reason.
pub fn perform_get(
    url: &str,
    headers: &HashMap<String, String>,
    opts: CurlOptions,
    sink: &mut dyn Write,
) -> Result<u32> {
    let net = |e: curl::Error| BrandkitError::Network {
        url: url.to_string(),
        reason: e.to_string(),
    };

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(net)?;
    easy.follow_location(true).map_err(net)?;
    easy.max_redirections(10).map_err(net)?;
    easy.connect_timeout(opts.connect_timeout).map_err(net)?;
    easy.timeout(opts.timeout).map_err(net)?;

    let mut list = curl::easy::List::new();
    for (k, v) in headers {
        list.append(&format!("{}: {}", k.trim(), v.trim()))
            .map_err(net)?;
    }
    if !headers.is_empty() {
        easy.http_headers(list).map_err(net)?;
    }

    let mut write_err: Option<io::Error> = None;
    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| match sink.write_all(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    write_err = Some(e);
                    Ok(0) // abort transfer
                }
            })
            .map_err(net)?;
        transfer.perform()
    };

    if let Some(e) = write_err {
        return Err(BrandkitError::Network {
            url: url.to_string(),
            reason: format!("write aborted: {}", e),
        });
    }
    performed.map_err(net)?;

    let code = easy.response_code().map_err(net)?;
    tracing::debug!(url, status = code, "GET complete");
    Ok(code)
}
