// Spreadsheet export of a full comparison result.
//
// One header row (Notion, Occurrences), then one row per entry in result
// order. An empty result writes nothing.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use super::ExportStatus;
use crate::notions::model::ComparisonResult;

/// File name of the spreadsheet inside the output directory.
pub const EXCEL_FILE_NAME: &str = "excel_results.xlsx";

const NOTION_HEADER: &str = "Notion";
const COUNT_HEADER: &str = "Occurrences";

/// Write `result` to `<output_dir>/excel_results.xlsx`.
pub fn write_table(result: &ComparisonResult, output_dir: &Path) -> Result<ExportStatus> {
    if result.is_empty() {
        return Ok(ExportStatus::NothingToExport);
    }

    super::ensure_dir(output_dir)?;
    let path = output_dir.join(EXCEL_FILE_NAME);

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string_with_format(0, 0, NOTION_HEADER, &header)?;
    worksheet.write_string_with_format(0, 1, COUNT_HEADER, &header)?;
    worksheet.set_column_width(0, 40)?;
    worksheet.set_column_width(1, 14)?;

    for (i, entry) in result.iter().enumerate() {
        let row = u32::try_from(i + 1).context("Too many rows for a worksheet")?;
        worksheet.write_string(row, 0, entry.notion.as_str())?;
        worksheet.write_number(row, 1, f64::from(entry.count))?;
    }

    workbook
        .save(&path)
        .with_context(|| format!("Failed to save spreadsheet {}", path.display()))?;

    info!(path = %path.display(), rows = result.len(), "Wrote spreadsheet");
    Ok(ExportStatus::Written(path))
}
