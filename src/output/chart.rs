// Horizontal bar chart of the top notions missing from document 2.
//
// Rendered as SVG so labels keep their text without a system font stack.
// The highest-ranked notion is drawn at the top; bar colours run along a
// viridis-like gradient from dark to light.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;
use tracing::info;

use super::{truncate_chars, ExportStatus};
use crate::notions::model::{ComparisonResult, RankedNotion};

/// File name of the chart inside the output directory.
pub const CHART_FILE_NAME: &str = "graph_results.svg";

/// Default number of notions shown.
pub const DEFAULT_CHART_TOP: usize = 30;

const WIDTH: u32 = 1000;
const ROW_HEIGHT: u32 = 22;
const CHROME_HEIGHT: u32 = 140;
const LABEL_CHARS: usize = 36;

/// Gradient stops, dark to light.
const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// Chart title for a given number of shown notions.
pub fn chart_title(top: usize) -> String {
    format!("Top {top} of notions from file 1 which are missing in file 2")
}

/// Render the first `top` entries of `result` to `<output_dir>/graph_results.svg`.
pub fn write_chart(
    result: &ComparisonResult,
    output_dir: &Path,
    top: usize,
) -> Result<ExportStatus> {
    let entries = result.top(top);
    if entries.is_empty() {
        return Ok(ExportStatus::NothingToExport);
    }

    super::ensure_dir(output_dir)?;
    let path = output_dir.join(CHART_FILE_NAME);

    draw(entries, &path, top)?;

    info!(path = %path.display(), bars = entries.len(), "Wrote chart");
    Ok(ExportStatus::Written(path))
}

/// Draw the bars for `entries` into an SVG file at `path`.
fn draw(entries: &[RankedNotion], path: &Path, top: usize) -> Result<()> {
    let rows = entries.len() as u32;
    let max_count = entries.iter().map(|e| e.count).max().unwrap_or(1);
    let labels: Vec<String> = entries
        .iter()
        .map(|e| truncate_chars(e.notion.as_str(), LABEL_CHARS))
        .collect();

    let height = CHROME_HEIGHT + ROW_HEIGHT * rows;
    let root = SVGBackend::new(path, (WIDTH, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(chart_title(top), ("sans-serif", 22))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(260)
        .build_cartesian_2d(0u32..(max_count + 1), (0u32..rows).into_segmented())?;

    // Row 0 is the bottom of the chart; entry 0 goes in the top row.
    let label_for = |row: u32| -> String {
        rows.checked_sub(row + 1)
            .and_then(|i| labels.get(i as usize))
            .cloned()
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(rows as usize + 1)
        .y_label_formatter(&|v| match v {
            SegmentValue::CenterOf(row) => label_for(*row),
            _ => String::new(),
        })
        .x_desc("Occurrences")
        .y_desc("Notion")
        .draw()?;

    chart.draw_series(entries.iter().enumerate().map(|(i, entry)| {
        let row = rows - 1 - i as u32;
        let color = gradient(i, entries.len());
        Rectangle::new(
            [
                (0, SegmentValue::Exact(row)),
                (entry.count, SegmentValue::Exact(row + 1)),
            ],
            color.filled(),
        )
    }))?;

    root.present()
        .with_context(|| format!("Failed to write chart {}", path.display()))?;
    Ok(())
}

/// Colour for bar `i` of `n`, interpolated along the gradient stops.
fn gradient(i: usize, n: usize) -> RGBColor {
    if n <= 1 {
        let (r, g, b) = VIRIDIS[0];
        return RGBColor(r, g, b);
    }
    let t = i as f64 / (n - 1) as f64 * (VIRIDIS.len() - 1) as f64;
    let lo = (t.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = t - lo as f64;
    let (a, b) = (VIRIDIS[lo], VIRIDIS[lo + 1]);
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
    RGBColor(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        let RGBColor(r, g, b) = gradient(0, 10);
        assert_eq!((r, g, b), (68, 1, 84));
        let RGBColor(r, g, b) = gradient(9, 10);
        assert_eq!((r, g, b), (253, 231, 37));
        let RGBColor(r, g, b) = gradient(0, 1);
        assert_eq!((r, g, b), (68, 1, 84));
    }

    #[test]
    fn test_title() {
        assert_eq!(
            chart_title(30),
            "Top 30 of notions from file 1 which are missing in file 2"
        );
    }

    #[test]
    fn test_empty_result_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let status = write_chart(&ComparisonResult::empty(), dir.path(), 30).unwrap();
        assert_eq!(status, ExportStatus::NothingToExport);
        assert!(!dir.path().join(CHART_FILE_NAME).exists());
    }

    #[test]
    fn test_written_status_carries_chart_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = ComparisonResult::from_ranked(vec![RankedNotion {
            notion: "réversibilité".into(),
            count: 2,
        }]);

        let status = write_chart(&result, dir.path(), 30).unwrap();
        let expected = dir.path().join(CHART_FILE_NAME);
        assert_eq!(status, ExportStatus::Written(expected.clone()));
        assert!(std::fs::metadata(&expected).unwrap().len() > 0);
    }
}
