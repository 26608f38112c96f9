// PDF documents: text of every page, in page order.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::traits::TextExtractor;

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn format(&self) -> &'static str {
        "pdf"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["pdf"]
    }

    fn extract(&self, path: &Path) -> Result<String> {
        let doc = lopdf::Document::load(path)
            .with_context(|| format!("Failed to open PDF {}", path.display()))?;

        // get_pages is keyed by page number, so this is already page order
        let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
        debug!(path = %path.display(), pages = pages.len(), "Extracting PDF text");

        doc.extract_text(&pages)
            .with_context(|| format!("Failed to extract text from {}", path.display()))
    }
}
