use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::notions::vectorizer::DEFAULT_MAX_FEATURES;
use crate::output::chart::DEFAULT_CHART_TOP;

/// Central configuration loaded from environment variables.
///
/// Values are read once at startup. The .env file is loaded automatically
/// via dotenvy before this runs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding document 1
    pub first_dir: PathBuf,
    /// Directory holding document 2
    pub second_dir: PathBuf,
    /// Where the spreadsheet and chart are written
    pub output_dir: PathBuf,
    /// Vocabulary cap per document
    pub max_features: usize,
    /// Number of notions shown in the chart
    pub chart_top: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_dir: PathBuf::from("data/first"),
            second_dir: PathBuf::from("data/second"),
            output_dir: PathBuf::from("output"),
            max_features: DEFAULT_MAX_FEATURES,
            chart_top: DEFAULT_CHART_TOP,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional. A numeric setting that is present but not
    /// a positive integer is an error.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            first_dir: path_setting("NOTION_GAP_FIRST_DIR", defaults.first_dir),
            second_dir: path_setting("NOTION_GAP_SECOND_DIR", defaults.second_dir),
            output_dir: path_setting("NOTION_GAP_OUTPUT_DIR", defaults.output_dir),
            max_features: positive_setting(
                "NOTION_GAP_MAX_FEATURES",
                env::var("NOTION_GAP_MAX_FEATURES").ok(),
                defaults.max_features,
            )?,
            chart_top: positive_setting(
                "NOTION_GAP_CHART_TOP",
                env::var("NOTION_GAP_CHART_TOP").ok(),
                defaults.chart_top,
            )?,
        })
    }
}

fn path_setting(name: &str, default: PathBuf) -> PathBuf {
    env::var_os(name).map(PathBuf::from).unwrap_or(default)
}

/// Parse an optional raw value as a positive integer.
fn positive_setting(name: &str, raw: Option<String>, default: usize) -> Result<usize> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    let value: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("{name} must be a positive integer, got {raw:?}"))?;
    if value == 0 {
        anyhow::bail!("{name} must be a positive integer, got 0");
    }
    Ok(value)
}
