// Input discovery: pick the document to compare from an input directory.
//
// Extensions are tried in priority order (txt, docx, pdf); the first one
// with any match wins. Within it, the smallest file name is taken so the
// choice does not depend on directory listing order.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::{extension_of, supported_extensions};

/// Find the first supported document in `dir`, if there is one.
pub fn find_first_document(dir: &Path) -> Result<Option<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read input directory {}", dir.display()))?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    for ext in supported_extensions() {
        if let Some(found) = files
            .iter()
            .find(|path| extension_of(path).as_deref() == Some(ext))
        {
            debug!(dir = %dir.display(), file = %found.display(), "Selected input document");
            return Ok(Some(found.clone()));
        }
    }

    Ok(None)
}

/// Find the document pair to compare, one from each input directory.
///
/// Fails when either directory has no supported document.
pub fn find_input_pair(first_dir: &Path, second_dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let first = find_first_document(first_dir)?;
    let second = find_first_document(second_dir)?;
    match first.zip(second) {
        Some(pair) => Ok(pair),
        None => anyhow::bail!(
            "a file is required in '{}' and in '{}'",
            first_dir.display(),
            second_dir.display()
        ),
    }
}
