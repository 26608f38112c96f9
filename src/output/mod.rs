// Output rendering: spreadsheet and chart exports, terminal display.

pub mod chart;
pub mod excel;
pub mod terminal;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// What an exporter did with a comparison result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    /// The file was written at this path.
    Written(PathBuf),
    /// The result was empty, so no file was created.
    NothingToExport,
}

/// Create the output directory (and parents) if it does not exist yet.
pub(crate) fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing, this respects UTF-8 character boundaries and will
/// never panic on accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("élément", 3), "élé...");
        assert_eq!(truncate_chars("court", 10), "court");
    }
}
