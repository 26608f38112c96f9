// Document text extraction: format-specific decoders behind one trait.
//
// `extract_text` is the only entry point the pipeline uses. It never fails:
// an unsupported or undecodable file is logged and comes back as empty text,
// which the comparison then reports as blank input.

pub mod discover;
pub mod docx;
pub mod pdf;
pub mod plain;
pub mod traits;

use std::path::Path;

use tracing::{info, warn};

use crate::notions::model::RawText;
use docx::DocxExtractor;
use pdf::PdfExtractor;
use plain::PlainTextExtractor;
use traits::TextExtractor;

/// All known extractors, in discovery priority order.
fn registry() -> Vec<Box<dyn TextExtractor>> {
    vec![
        Box::new(PlainTextExtractor),
        Box::new(DocxExtractor),
        Box::new(PdfExtractor),
    ]
}

/// Extensions with an extractor, in discovery priority order.
pub fn supported_extensions() -> Vec<&'static str> {
    registry()
        .iter()
        .flat_map(|e| e.extensions().iter().copied())
        .collect()
}

/// Lower-cased extension of `path`, if any.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

/// Pick the extractor for `path` by its extension.
pub fn extractor_for(path: &Path) -> Option<Box<dyn TextExtractor>> {
    let ext = extension_of(path)?;
    registry()
        .into_iter()
        .find(|e| e.extensions().contains(&ext.as_str()))
}

/// Extract the text of a document, or empty text if that is not possible.
pub fn extract_text(path: &Path) -> RawText {
    let Some(extractor) = extractor_for(path) else {
        warn!(path = %path.display(), "Unsupported document format");
        return RawText::empty();
    };

    match extractor.extract(path) {
        Ok(text) => {
            info!(
                path = %path.display(),
                format = extractor.format(),
                chars = text.chars().count(),
                "Extracted document text"
            );
            RawText::from(text)
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                format = extractor.format(),
                error = %format!("{e:#}"),
                "Failed to extract document text"
            );
            RawText::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_extension_selection_is_case_insensitive() {
        let extractor = extractor_for(&PathBuf::from("Contrat.PDF")).unwrap();
        assert_eq!(extractor.format(), "pdf");
        let extractor = extractor_for(&PathBuf::from("notes.Docx")).unwrap();
        assert_eq!(extractor.format(), "docx");
    }

    #[test]
    fn test_unknown_extension_has_no_extractor() {
        assert!(extractor_for(&PathBuf::from("sheet.xlsx")).is_none());
        assert!(extractor_for(&PathBuf::from("README")).is_none());
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(supported_extensions(), vec!["txt", "docx", "pdf"]);
    }

    #[test]
    fn test_missing_file_gives_empty_text() {
        let text = extract_text(&PathBuf::from("/nonexistent/notion-gap/input.txt"));
        assert!(text.is_blank());
    }
}
