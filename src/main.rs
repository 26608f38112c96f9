use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use notion_gap::config::Config;
use notion_gap::extract::{discover, extract_text};
use notion_gap::notions::model::RawText;
use notion_gap::notions::stopwords::FRENCH;
use notion_gap::notions::vectorizer::Vectorizer;
use notion_gap::output::{chart, excel, terminal, ExportStatus};
use notion_gap::pipeline::compare::{compare_with, Comparison};

/// notion-gap: find the notions of one document that another drops.
///
/// Compares two documents (plain text, .docx or PDF) and ranks the words
/// and two-word phrases that occur in the first but never in the second.
#[derive(Parser)]
#[command(name = "notion-gap", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two documents and export the notions missing from the second
    Compare {
        /// First document (default: first file in NOTION_GAP_FIRST_DIR)
        #[arg(requires = "second")]
        first: Option<PathBuf>,

        /// Second document (default: first file in NOTION_GAP_SECOND_DIR)
        second: Option<PathBuf>,

        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the bounded vocabulary of a single document
    Vocabulary {
        /// The document to analyze
        file: PathBuf,

        /// Print the vocabulary as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the built-in stopwords
    Stopwords,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("notion_gap=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Compare {
            first,
            second,
            json,
        } => {
            let (first, second) = match (first, second) {
                (Some(first), Some(second)) => (first, second),
                _ => discover::find_input_pair(&config.first_dir, &config.second_dir)?,
            };

            if !json {
                println!("Compare : {} VS {}", display_name(&first), display_name(&second));
            }

            let first_text = extract_with_spinner(&first, !json)?;
            let second_text = extract_with_spinner(&second, !json)?;

            let vectorizer = Vectorizer::new(&FRENCH, config.max_features);
            let comparison = compare_with(&vectorizer, &first_text, &second_text);

            if json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                terminal::display_comparison(&comparison, config.chart_top);
            }

            if comparison.status.is_compared() {
                export(&comparison, &config, !json)?;
            }
        }

        Commands::Vocabulary { file, json } => {
            let text = extract_with_spinner(&file, !json)?;
            let vocabulary = Vectorizer::new(&FRENCH, config.max_features).vectorize(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&vocabulary.ranked())?);
            } else {
                if text.is_blank() {
                    println!(
                        "{}",
                        "The file is empty or could not be read.".yellow()
                    );
                    return Ok(());
                }
                terminal::display_vocabulary(&vocabulary, config.max_features);
            }
        }

        Commands::Stopwords => {
            terminal::display_stopwords(&FRENCH);
        }
    }

    Ok(())
}

/// Run both exports and report what each one did.
fn export(comparison: &Comparison, config: &Config, announce: bool) -> Result<()> {
    let table = excel::write_table(&comparison.result, &config.output_dir)?;
    let graph = chart::write_chart(&comparison.result, &config.output_dir, config.chart_top)?;

    if !announce {
        return Ok(());
    }

    match table {
        ExportStatus::Written(path) => println!("Excel file generated: {}", path.display()),
        ExportStatus::NothingToExport => {
            println!("No differences found between the 2 files.")
        }
    }
    match graph {
        ExportStatus::Written(path) => println!("Graph generated in {}", path.display()),
        ExportStatus::NothingToExport => {
            println!("No differences found between the 2 files.")
        }
    }
    Ok(())
}

/// Extract a document's text, showing a spinner while large files decode.
fn extract_with_spinner(path: &Path, show: bool) -> Result<RawText> {
    if !show {
        return Ok(extract_text(path));
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("  {spinner} {msg}")?);
    spinner.set_message(format!("Reading {}", display_name(path)));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let text = extract_text(path);
    spinner.finish_and_clear();
    info!(path = %path.display(), blank = text.is_blank(), "Document ready");
    Ok(text)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
