// Plain-text documents, read as UTF-8.

use std::path::Path;

use anyhow::{Context, Result};

use super::traits::TextExtractor;

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn format(&self) -> &'static str {
        "text"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["txt"]
    }

    fn extract(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read text file {}", path.display()))
    }
}
