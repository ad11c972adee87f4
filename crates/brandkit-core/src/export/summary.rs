//! Plain text and JSON renderings of brand essentials.

use std::fmt::Write;

use crate::brand::BrandAssetSet;
use crate::error::Result;

/// Human-readable summary of one brand.
pub fn render_text(brand: &BrandAssetSet) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", brand.name, brand.domain);

    out.push_str("\nLogos (SVG):\n");
    if let Some(light) = &brand.logo_light {
        let _ = writeln!(out, "  light: {}", light);
    }
    if let Some(dark) = &brand.logo_dark {
        let _ = writeln!(out, "  dark:  {}", dark);
    }
    if brand.logo_light.is_none() && brand.logo_dark.is_none() {
        out.push_str("  (no SVG available)\n");
    }

    if let Some(favicon) = &brand.favicon {
        let _ = write!(out, "\nFavicon:\n  {}\n", favicon);
    }

    if !brand.colors.is_empty() {
        out.push_str("\nColors:\n");
        for c in &brand.colors {
            let _ = writeln!(out, "  {} ({})", c.hex, c.semantic_type);
        }
    }

    if !brand.fonts.is_empty() {
        out.push_str("\nFonts:\n");
        for f in &brand.fonts {
            let _ = writeln!(out, "  {} ({})", f.name, f.semantic_type);
        }
    }

    out
}

/// Brands separated by a blank line; empty input renders nothing.
pub fn render_text_batch(brands: &[BrandAssetSet]) -> String {
    brands
        .iter()
        .map(render_text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One brand as a JSON object, several as an array.
pub fn render_json_batch(brands: &[BrandAssetSet]) -> Result<String> {
    let json = match brands {
        [single] => serde_json::to_string_pretty(single)?,
        _ => serde_json::to_string_pretty(brands)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_logos() {
        let brand = BrandAssetSet::new("Acme", "acme.com")
            .with_color("accent", "#FF0000")
            .with_font("body", "Inter");
        let expected = "Acme (acme.com)\n\nLogos (SVG):\n  (no SVG available)\n\nColors:\n  #FF0000 (accent)\n\nFonts:\n  Inter (body)\n";
        assert_eq!(render_text(&brand), expected);
    }

    #[test]
    fn text_with_logos_and_favicon() {
        let mut brand = BrandAssetSet::new("Acme", "acme.com");
        brand.logo_light = Some("https://cdn/l.svg".into());
        brand.favicon = Some("https://cdn/f.ico".into());
        let out = render_text(&brand);
        assert!(out.contains("  light: https://cdn/l.svg\n"));
        assert!(!out.contains("no SVG"));
        assert!(out.contains("\nFavicon:\n  https://cdn/f.ico\n"));
    }

    #[test]
    fn text_batch_separated_by_blank_line() {
        let brands = vec![BrandAssetSet::new("A", "a.com"), BrandAssetSet::new("B", "b.com")];
        let out = render_text_batch(&brands);
        assert!(out.contains("(no SVG available)\n\nB (b.com)\n"));
        assert_eq!(render_text_batch(&[]), "");
    }

    #[test]
    fn json_object_vs_array() {
        let one = vec![BrandAssetSet::new("A", "a.com")];
        assert!(render_json_batch(&one).unwrap().starts_with('{'));
        let two = vec![BrandAssetSet::new("A", "a.com"), BrandAssetSet::new("B", "b.com")];
        let parsed: serde_json::Value = serde_json::from_str(&render_json_batch(&two).unwrap()).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[1]["domain"], "b.com");
    }
}
