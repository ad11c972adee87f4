//! Nested module config for `tailwind.config.js` (`theme.extend`).
//!
//! Colors sharing a type nest as `type: { 1: '...', 2: '...' }`; fonts sharing
//! a type become `type1`, `type2` keys after de-duplication.

use std::fmt::Write;

use super::namespace::underscore_token;
use crate::brand::{BrandAssetSet, ColorEntry, FontEntry};
use crate::naming::{number_occurrences, unique_fonts};

const EXTEND_HINT: &str = "// Add to your tailwind.config.js theme.extend\n";

/// Groups hex values by semantic type, types in order of first appearance.
fn group_colors(colors: &[ColorEntry]) -> Vec<(&str, Vec<&str>)> {
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
    for c in colors {
        let kind = c.semantic_type.as_str();
        match groups.iter_mut().find(|(t, _)| *t == kind) {
            Some((_, hexes)) => hexes.push(c.hex.as_str()),
            None => groups.push((kind, vec![c.hex.as_str()])),
        }
    }
    groups
}

fn push_colors(out: &mut String, colors: &[ColorEntry], indent: &str) {
    for (kind, hexes) in group_colors(colors) {
        if let [hex] = hexes.as_slice() {
            let _ = writeln!(out, "{}{}: '{}',", indent, kind, hex);
            continue;
        }
        let _ = writeln!(out, "{}{}: {{", indent, kind);
        for (i, hex) in hexes.iter().enumerate() {
            let _ = writeln!(out, "{}  {}: '{}',", indent, i + 1, hex);
        }
        let _ = writeln!(out, "{}}},", indent);
    }
}

fn push_fonts(out: &mut String, fonts: &[FontEntry], indent: &str) {
    let unique = unique_fonts(fonts);
    let occs = number_occurrences(unique.iter().map(|f| f.semantic_type.as_str()));
    for (f, occ) in unique.into_iter().zip(occs) {
        let key = if occ.is_unique() {
            f.semantic_type.clone()
        } else {
            format!("{}{}", f.semantic_type, occ.index)
        };
        let _ = writeln!(out, "{}{}: ['\"{}\"', 'sans-serif'],", indent, key, f.name);
    }
}

/// Renders one brand's `module.exports` block.
pub fn render_tailwind(brand: &BrandAssetSet) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "// Tailwind CSS config for {}", brand.name);
    out.push_str(EXTEND_HINT);
    out.push_str("module.exports = {\n");

    if !brand.colors.is_empty() {
        out.push_str("  colors: {\n");
        push_colors(&mut out, &brand.colors, "    ");
        out.push_str("  },\n");
    }

    if !brand.fonts.is_empty() {
        out.push_str("  fontFamily: {\n");
        push_fonts(&mut out, &brand.fonts, "    ");
        out.push_str("  },\n");
    }

    out.push('}');
    out
}

/// Renders several brands, one sub-object per brand keyed by its domain token
/// under each of `colors` and `fontFamily`. One brand renders like `render_tailwind`.
pub fn render_tailwind_batch(brands: &[BrandAssetSet]) -> String {
    match brands {
        [] => return "module.exports = {\n}".to_string(),
        [single] => return render_tailwind(single),
        _ => {}
    }

    let mut out = String::from("// Tailwind CSS config for multiple brands\n");
    out.push_str(EXTEND_HINT);
    out.push_str("module.exports = {\n");

    if brands.iter().any(|b| !b.colors.is_empty()) {
        out.push_str("  colors: {\n");
        for brand in brands.iter().filter(|b| !b.colors.is_empty()) {
            let _ = writeln!(out, "    {}: {{", underscore_token(&brand.domain));
            push_colors(&mut out, &brand.colors, "      ");
            out.push_str("    },\n");
        }
        out.push_str("  },\n");
    }

    if brands.iter().any(|b| !b.fonts.is_empty()) {
        out.push_str("  fontFamily: {\n");
        for brand in brands.iter().filter(|b| !b.fonts.is_empty()) {
            let _ = writeln!(out, "    {}: {{", underscore_token(&brand.domain));
            push_fonts(&mut out, &brand.fonts, "      ");
            out.push_str("    },\n");
        }
        out.push_str("  },\n");
    }

    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_brand() {
        let brand = BrandAssetSet::new("Stripe", "stripe.com")
            .with_color("accent", "#635BFF")
            .with_color("dark", "#0A2540")
            .with_color("accent", "#00D4FF")
            .with_font("title", "Sohne")
            .with_font("body", "Inter")
            .with_font("body", "Roboto")
            .with_font("body", "Inter");
        let expected = r#"// Tailwind CSS config for Stripe
// Add to your tailwind.config.js theme.extend
module.exports = {
  colors: {
    accent: {
      1: '#635BFF',
      2: '#00D4FF',
    },
    dark: '#0A2540',
  },
  fontFamily: {
    title: ['"Sohne"', 'sans-serif'],
    body1: ['"Inter"', 'sans-serif'],
    body2: ['"Roboto"', 'sans-serif'],
  },
}"#;
        assert_eq!(render_tailwind(&brand), expected);
    }

    #[test]
    fn empty_brand_has_no_sections() {
        let brand = BrandAssetSet::new("Bare", "bare.com");
        assert_eq!(
            render_tailwind(&brand),
            "// Tailwind CSS config for Bare\n// Add to your tailwind.config.js theme.extend\nmodule.exports = {\n}"
        );
    }

    #[test]
    fn duplicate_font_does_not_force_numbering() {
        let brand = BrandAssetSet::new("X", "x.com")
            .with_font("body", "Inter")
            .with_font("body", "Inter");
        let out = render_tailwind(&brand);
        assert!(out.contains("    body: ['\"Inter\"', 'sans-serif'],\n"));
        assert!(!out.contains("body1"));
    }

    #[test]
    fn batch_empty_and_single() {
        assert_eq!(render_tailwind_batch(&[]), "module.exports = {\n}");
        let brand = BrandAssetSet::new("Stripe", "stripe.com").with_color("accent", "#635BFF");
        assert_eq!(
            render_tailwind_batch(std::slice::from_ref(&brand)),
            render_tailwind(&brand)
        );
    }

    #[test]
    fn batch_nests_per_brand() {
        let brands = vec![
            BrandAssetSet::new("Stripe", "stripe.com").with_color("accent", "#635BFF"),
            BrandAssetSet::new("My Brand", "my-brand.io")
                .with_color("dark", "#111111")
                .with_color("dark", "#222222")
                .with_font("body", "Inter"),
        ];
        let expected = r#"// Tailwind CSS config for multiple brands
// Add to your tailwind.config.js theme.extend
module.exports = {
  colors: {
    stripe: {
      accent: '#635BFF',
    },
    my_brand: {
      dark: {
        1: '#111111',
        2: '#222222',
      },
    },
  },
  fontFamily: {
    my_brand: {
      body: ['"Inter"', 'sans-serif'],
    },
  },
}"#;
        assert_eq!(render_tailwind_batch(&brands), expected);
    }

    #[test]
    fn batch_without_any_colors_skips_block() {
        let brands = vec![
            BrandAssetSet::new("A", "a.com").with_font("body", "Inter"),
            BrandAssetSet::new("B", "b.com"),
        ];
        let out = render_tailwind_batch(&brands);
        assert!(!out.contains("colors"));
        assert!(out.contains("  fontFamily: {\n    a: {\n"));
    }
}
