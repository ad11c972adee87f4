//! File extension inference from a URL path.

/// Returns the lowercased extension of the last URL path segment, dot included
/// (`".ico"`), or an empty string when the URL does not parse or has none.
/// Query string and fragment are ignored.
pub fn extension_from_url(url: &str) -> String {
    let parsed = match url::Url::parse(url) {
        Ok(u) => u,
        Err(_) => return String::new(),
    };
    let last = parsed.path().rsplit('/').next().unwrap_or("");
    match last.rfind('.') {
        Some(i) => last[i..].to_lowercase(),
        None => String::new(),
    }
}
