//! Integration test: local HTTP server, curl fetcher and the download orchestrator.
//!
//! Serves logos and a favicon per path, downloads a batch into a temp dir and
//! checks files, diagnostics, sidecars and the manifest.

mod common;

use std::collections::HashMap;
use std::fs;

use brandkit_core::brand::BrandAssetSet;
use brandkit_core::checksum::{sha256_path, Manifest};
use brandkit_core::download::{BatchOutcome, DownloadOptions, Downloader};
use brandkit_core::fetcher::{AssetFetcher, CurlFetcher, CurlOptions};
use brandkit_core::BrandkitError;
use common::asset_server::{self, Route};
use tempfile::tempdir;

fn routes() -> HashMap<String, Route> {
    let mut r = HashMap::new();
    r.insert(
        "/stripe/light.svg".to_string(),
        Route::ok("image/svg+xml", b"<svg>stripe light</svg>"),
    );
    r.insert(
        "/stripe/dark.svg".to_string(),
        Route::ok("image/svg+xml", b"<svg>stripe dark</svg>"),
    );
    r.insert("/stripe/icon.png".to_string(), Route::status(404));
    r.insert(
        "/github/light.svg".to_string(),
        Route::ok("image/svg+xml", b"<svg>github</svg>"),
    );
    r.insert(
        "/github/favicon.ico".to_string(),
        Route::ok("image/x-icon", b"\x00\x00\x01\x00"),
    );
    r
}

fn stripe(server: &asset_server::AssetServer) -> BrandAssetSet {
    let mut b = BrandAssetSet::new("Stripe", "stripe.com");
    b.logo_light = Some(server.url("/stripe/light.svg"));
    b.logo_dark = Some(server.url("/stripe/dark.svg"));
    b.favicon = Some(server.url("/stripe/icon.png"));
    b
}

fn github(server: &asset_server::AssetServer) -> BrandAssetSet {
    let mut b = BrandAssetSet::new("GitHub", "github.com");
    b.logo_light = Some(server.url("/github/light.svg"));
    b.favicon = Some(server.url("/github/favicon.ico?v=3"));
    b
}

#[test]
fn curl_fetcher_reports_status_and_streams_body() {
    let server = asset_server::start(routes());
    let fetcher = CurlFetcher::new(CurlOptions::default());

    let mut body = Vec::new();
    let status = fetcher
        .fetch(&server.url("/stripe/light.svg"), &HashMap::new(), &mut body)
        .unwrap();
    assert_eq!(status, 200);
    assert_eq!(body, b"<svg>stripe light</svg>");

    let mut body = Vec::new();
    let status = fetcher
        .fetch(&server.url("/missing"), &HashMap::new(), &mut body)
        .unwrap();
    assert_eq!(status, 404);
}

#[test]
fn curl_fetcher_transport_error_is_network_error() {
    // Bind then drop to get a port nobody listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let fetcher = CurlFetcher::new(CurlOptions::default());
    let mut body = Vec::new();
    let err = fetcher
        .fetch(
            &format!("http://127.0.0.1:{}/logo.svg", port),
            &HashMap::new(),
            &mut body,
        )
        .unwrap_err();
    assert!(matches!(err, BrandkitError::Network { .. }));
    assert!(err.is_recoverable());
}

/// Sink that rejects every write, like a full disk.
struct RejectingSink;

impl std::io::Write for RejectingSink {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("no space left on device"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn curl_fetcher_sink_failure_aborts_with_url() {
    let server = asset_server::start(routes());
    let fetcher = CurlFetcher::new(CurlOptions::default());
    let url = server.url("/stripe/light.svg");

    let err = fetcher
        .fetch(&url, &HashMap::new(), &mut RejectingSink)
        .unwrap_err();

    match err {
        BrandkitError::Network { url: failed, reason } => {
            assert_eq!(failed, url);
            assert!(reason.starts_with("write aborted: no space left on device"));
        }
        other => panic!("expected network error, got {other:?}"),
    }
}

#[test]
fn single_brand_download_with_missing_favicon() {
    let server = asset_server::start(routes());
    let dir = tempdir().unwrap();
    let opts = DownloadOptions {
        root: dir.path().to_path_buf(),
        write_sidecar: true,
        ..Default::default()
    };
    let fetcher = CurlFetcher::new(CurlOptions::default());
    let mut diag = Vec::new();

    let report = Downloader::new(&fetcher, &opts)
        .run(&[stripe(&server)], &mut diag)
        .unwrap();

    assert_eq!(report.outcome(), BatchOutcome::PartialFailure);
    assert_eq!(
        fs::read(dir.path().join("logo-light.svg")).unwrap(),
        b"<svg>stripe light</svg>"
    );
    assert!(dir.path().join("logo-dark.svg").exists());
    assert!(!dir.path().join("favicon.png").exists());
    assert!(!dir.path().join("favicon.png.part").exists());

    let sidecar = fs::read_to_string(dir.path().join("logo-dark.svg.sha256")).unwrap();
    let digest = sha256_path(&dir.path().join("logo-dark.svg")).unwrap();
    assert_eq!(sidecar, format!("{}  logo-dark.svg\n", digest));

    let diag = String::from_utf8(diag).unwrap();
    let failures: Vec<&str> = diag.lines().filter(|l| l.starts_with("Error:")).collect();
    assert_eq!(failures, ["Error: failed to download favicon.png: HTTP 404"]);

    let ua = server.header_for("/stripe/light.svg", "User-Agent").unwrap();
    assert!(ua.contains("Chrome/120"));
    let accept = server.header_for("/stripe/light.svg", "Accept").unwrap();
    assert!(accept.starts_with("image/svg+xml"));
}

#[test]
fn batch_download_writes_manifest_then_verifies_against_it() {
    let server = asset_server::start(routes());
    let work = tempdir().unwrap();
    let root = work.path().join("brands");
    let manifest_path = work.path().join("SHA256SUMS");
    let fetcher = CurlFetcher::new(CurlOptions::default());
    let brands = [stripe(&server), github(&server)];

    let opts = DownloadOptions {
        root: root.clone(),
        manifest_out: Some(manifest_path.clone()),
        ..Default::default()
    };
    let mut diag = Vec::new();
    let report = Downloader::new(&fetcher, &opts).run(&brands, &mut diag).unwrap();
    assert_eq!(report.downloaded.len(), 4);
    assert!(root.join("stripe/logo-light.svg").exists());
    assert!(root.join("github/favicon.ico").exists());

    let manifest = Manifest::load(&manifest_path).unwrap();
    let keys: Vec<&str> = manifest.iter().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        [
            "github/favicon.ico",
            "github/logo-light.svg",
            "stripe/logo-dark.svg",
            "stripe/logo-light.svg"
        ]
    );

    // Re-download into a fresh root, strictly verified against the manifest.
    let verify_root = work.path().join("again");
    let strict = DownloadOptions {
        root: verify_root.clone(),
        verify_manifest: Some(manifest_path.clone()),
        strict_verify: true,
        ..Default::default()
    };
    let mut diag = Vec::new();
    let report = Downloader::new(&fetcher, &strict).run(&brands, &mut diag).unwrap();
    assert_eq!(report.downloaded.len(), 4);
    let diag = String::from_utf8(diag).unwrap();
    assert!(!diag.contains("checksum verification failed"));
}

#[test]
fn append_manifest_accumulates_across_runs() {
    let server = asset_server::start(routes());
    let work = tempdir().unwrap();
    let manifest_path = work.path().join("SHA256SUMS");
    let fetcher = CurlFetcher::new(CurlOptions::default());

    for (root, brand) in [("one", stripe(&server)), ("two", github(&server))] {
        let opts = DownloadOptions {
            root: work.path().join(root),
            manifest_out: Some(manifest_path.clone()),
            append_manifest: true,
            ..Default::default()
        };
        let mut diag = Vec::new();
        Downloader::new(&fetcher, &opts).run(&[brand], &mut diag).unwrap();
    }

    let text = fs::read_to_string(&manifest_path).unwrap();
    let names: Vec<&str> = text
        .lines()
        .filter_map(|l| l.split_whitespace().nth(1))
        .collect();
    assert_eq!(names, ["favicon.ico", "logo-dark.svg", "logo-light.svg"]);
}
