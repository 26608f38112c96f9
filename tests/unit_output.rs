// Unit tests for the spreadsheet and chart exports.

use calamine::{open_workbook, Data, Reader, Xlsx};
use notion_gap::notions::model::RawText;
use notion_gap::output::chart::{write_chart, CHART_FILE_NAME};
use notion_gap::output::excel::{write_table, EXCEL_FILE_NAME};
use notion_gap::output::ExportStatus;
use notion_gap::pipeline::compare::compare;

fn sample() -> notion_gap::notions::model::ComparisonResult {
    let comparison = compare(
        &RawText::from("contrat résiliation résiliation confidentialité"),
        &RawText::from("contrat signé"),
    );
    assert!(!comparison.result.is_empty());
    comparison.result
}

// ============================================================
// Spreadsheet
// ============================================================

#[test]
fn table_written_to_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("output");

    let status = write_table(&sample(), &out).unwrap();
    let expected = out.join(EXCEL_FILE_NAME);
    assert_eq!(status, ExportStatus::Written(expected.clone()));

    // xlsx is a zip container
    let bytes = std::fs::read(&expected).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn table_has_header_then_one_row_per_entry_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let result = sample();
    write_table(&result, dir.path()).unwrap();

    let mut workbook: Xlsx<_> = open_workbook(dir.path().join(EXCEL_FILE_NAME)).unwrap();
    let range = workbook.worksheet_range("Sheet1").unwrap();
    let rows: Vec<Vec<Data>> = range.rows().map(|row| row.to_vec()).collect();

    assert_eq!(rows.len(), result.len() + 1);
    assert_eq!(
        rows[0],
        vec![
            Data::String("Notion".to_string()),
            Data::String("Occurrences".to_string())
        ]
    );
    for (row, entry) in rows[1..].iter().zip(result.iter()) {
        assert_eq!(row[0], Data::String(entry.notion.as_str().to_string()));
        assert_eq!(row[1], Data::Float(f64::from(entry.count)));
    }
    assert_eq!(rows[1][0], Data::String("résiliation".to_string()));
    assert_eq!(rows[1][1], Data::Float(2.0));
}

// ============================================================
// Chart
// ============================================================

#[test]
fn chart_contains_title_and_top_notion() {
    let dir = tempfile::tempdir().unwrap();
    let status = write_chart(&sample(), dir.path(), 30).unwrap();
    let expected = dir.path().join(CHART_FILE_NAME);
    assert_eq!(status, ExportStatus::Written(expected.clone()));

    let svg = std::fs::read_to_string(&expected).unwrap();
    assert!(svg.contains("Top 30 of notions from file 1 which are missing in file 2"));
    assert!(svg.contains("résiliation"));
}

#[test]
fn chart_only_shows_requested_entries() {
    let dir = tempfile::tempdir().unwrap();
    let result = sample();
    assert!(result.len() > 1);

    write_chart(&result, dir.path(), 1).unwrap();
    let svg = std::fs::read_to_string(dir.path().join(CHART_FILE_NAME)).unwrap();
    assert!(svg.contains(result.entries()[0].notion.as_str()));
    assert!(!svg.contains(result.entries()[1].notion.as_str()));
}
