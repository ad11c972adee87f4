//! Identifier normalization for Brand API lookups.

/// Lowercases and strips scheme, `www.` and a trailing slash.
pub fn normalize_domain(domain: &str) -> String {
    let lower = domain.to_lowercase();
    let d = lower.strip_prefix("https://").unwrap_or(&lower);
    let d = d.strip_prefix("http://").unwrap_or(d);
    let d = d.strip_prefix("www.").unwrap_or(d);
    let d = d.strip_suffix('/').unwrap_or(d);
    d.to_string()
}

/// Normalizes domain-like identifiers and keeps brand ids (`id_...`, `urn:...`)
/// and other opaque identifiers (ticker, ISIN) intact.
pub fn normalize_identifier(identifier: &str) -> String {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let lower = trimmed.to_lowercase();
    if lower.starts_with("id_") || lower.starts_with("urn:") {
        return trimmed.to_string();
    }

    if lower.contains("://") || lower.starts_with("www.") || trimmed.contains('.') {
        return normalize_domain(trimmed);
    }

    trimmed.to_string()
}
