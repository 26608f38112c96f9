// Word-processor (.docx) documents.
//
// Reads the top-level body paragraphs and joins them with newlines. Runs
// nested in hyperlinks are included; tables and headers are not.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, Run, RunChild};

use super::traits::TextExtractor;

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn format(&self) -> &'static str {
        "docx"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["docx"]
    }

    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let docx = docx_rs::read_docx(&bytes)
            .map_err(|e| anyhow!("Invalid docx {}: {e:?}", path.display()))?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                _ => None,
            })
            .collect();

        Ok(paragraphs.join("\n"))
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&paragraph.children, &mut text);
    text
}

fn push_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, out),
            ParagraphChild::Hyperlink(link) => push_children(&link.children, out),
            _ => {}
        }
    }
}

fn push_run(run: &Run, out: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Hyperlink, HyperlinkType};

    #[test]
    fn test_paragraph_text_includes_hyperlink_runs_and_tabs() {
        let paragraph = Paragraph::new()
            .add_run(Run::new().add_text("Voir").add_tab().add_text("annexe"))
            .add_hyperlink(
                Hyperlink::new("https://example.org/annexe", HyperlinkType::External)
                    .add_run(Run::new().add_text(" tarifaire")),
            );
        assert_eq!(paragraph_text(&paragraph), "Voir\tannexe tarifaire");
    }

    #[test]
    fn test_not_a_zip_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.docx");
        std::fs::write(&path, b"definitely not a zip archive").unwrap();
        assert!(DocxExtractor.extract(&path).is_err());
    }
}
