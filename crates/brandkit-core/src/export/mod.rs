//! Brand export renderers.
//!
//! Every renderer is infallible on content: empty hex values or font names are
//! written as-is. Only JSON serialization can fail.

mod css;
mod namespace;
mod summary;
mod tailwind;

pub use css::{render_css, render_css_batch};
pub use namespace::{hyphen_token, underscore_token};
pub use summary::{render_json_batch, render_text, render_text_batch};
pub use tailwind::{render_tailwind, render_tailwind_batch};

use crate::brand::BrandAssetSet;
use crate::error::Result;

/// What the primary output stream receives for a batch of brands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
    /// Flat custom-property block.
    Css,
    /// Nested Tailwind module config.
    Tailwind,
}

/// Renders `brands` in `format`, batch-aware.
pub fn render(brands: &[BrandAssetSet], format: ExportFormat) -> Result<String> {
    Ok(match format {
        ExportFormat::Text => render_text_batch(brands),
        ExportFormat::Json => render_json_batch(brands)?,
        ExportFormat::Css => render_css_batch(brands),
        ExportFormat::Tailwind => render_tailwind_batch(brands),
    })
}
