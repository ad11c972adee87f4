//! Identity tokens derived from a brand's domain for batch namespacing.

/// Suffixes trimmed from a domain, applied in this order, each at most once.
const STRIPPED_TLDS: [&str; 5] = [".com", ".io", ".org", ".net", ".co"];

fn strip_tlds(domain: &str) -> &str {
    STRIPPED_TLDS
        .iter()
        .fold(domain, |d, tld| d.strip_suffix(tld).unwrap_or(d))
}

/// CSS variable prefix and download subdirectory: `stripe.com` → `stripe`,
/// `docs.github.io` → `docs-github`.
pub fn hyphen_token(domain: &str) -> String {
    strip_tlds(domain).replace('.', "-")
}

/// Object key for the nested module format: dots and hyphens become `_`.
pub fn underscore_token(domain: &str) -> String {
    strip_tlds(domain).replace(['.', '-'], "_")
}
