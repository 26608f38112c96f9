// Text extractor trait: one implementation per container format.
//
// The comparison core only ever sees `RawText`; which extractor produced it
// is decided by file extension in `extract::extractor_for`.

use std::path::Path;

use anyhow::Result;

/// Decodes one document container into plain text.
pub trait TextExtractor {
    /// Short format name used in logs.
    fn format(&self) -> &'static str;

    /// Lower-case file extensions (without the dot) this extractor handles.
    fn extensions(&self) -> &'static [&'static str];

    /// Read the file and return its text.
    fn extract(&self, path: &Path) -> Result<String>;
}
