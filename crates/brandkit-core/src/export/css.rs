//! Flat custom-property block (`:root { --color-accent: #635BFF; }`).

use std::fmt::Write;

use super::namespace::hyphen_token;
use crate::brand::BrandAssetSet;
use crate::naming::{allocate_colors, allocate_fonts};

fn font_value(name: &str) -> String {
    format!("'{}', sans-serif", name)
}

fn push_colors(out: &mut String, brand: &BrandAssetSet, prefix: &str) {
    for (name, c) in allocate_colors(prefix, &brand.colors) {
        let _ = writeln!(out, "  {}: {};", name, c.hex);
    }
}

fn push_fonts(out: &mut String, brand: &BrandAssetSet, prefix: &str) {
    for (name, f) in allocate_fonts(prefix, &brand.fonts) {
        let _ = writeln!(out, "  {}: {};", name, font_value(&f.name));
    }
}

/// Renders one brand. Section comments appear only for non-empty sections.
pub fn render_css(brand: &BrandAssetSet) -> String {
    let mut out = String::from(":root {\n");

    if !brand.colors.is_empty() {
        out.push_str("  /* Colors */\n");
        push_colors(&mut out, brand, "--color");
    }

    if !brand.fonts.is_empty() {
        if !brand.colors.is_empty() {
            out.push('\n');
        }
        out.push_str("  /* Fonts */\n");
        push_fonts(&mut out, brand, "--font");
    }

    out.push('}');
    out
}

/// Renders several brands into one block, each brand's variables prefixed
/// with its domain token. One brand renders exactly like `render_css`.
pub fn render_css_batch(brands: &[BrandAssetSet]) -> String {
    match brands {
        [] => return ":root {\n}".to_string(),
        [single] => return render_css(single),
        _ => {}
    }

    let mut out = String::from(":root {\n");
    for (i, brand) in brands.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let token = hyphen_token(&brand.domain);
        let _ = writeln!(out, "  /* {} */", brand.name);
        push_colors(&mut out, brand, &format!("--{}-color", token));
        push_fonts(&mut out, brand, &format!("--{}-font", token));
    }
    out.push('}');
    out
}
