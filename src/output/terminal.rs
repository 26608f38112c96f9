// Ranked notion tables and skip notices for the terminal.
//
// Bigrams are tinted so two-word notions stand out from single words;
// long notions are shortened to keep the occurrence column aligned.

use colored::Colorize;

use super::truncate_chars;
use crate::notions::model::{ComparisonResult, FrequencyVocabulary};
use crate::notions::stopwords::StopwordFilter;
use crate::pipeline::compare::{Comparison, ComparisonStatus};

const NOTION_WIDTH: usize = 40;

/// Print the user-facing notice for a comparison that was skipped.
pub fn display_status(status: &ComparisonStatus) {
    match status {
        ComparisonStatus::Compared => {}
        ComparisonStatus::EmptyInput { .. } => {
            println!(
                "{}",
                "One of the files is empty or could not be read.".yellow()
            );
        }
        ComparisonStatus::NoVocabulary { .. } => {
            println!(
                "{}",
                "Could not extract enough valid terms for comparison.".yellow()
            );
        }
    }
}

/// Display the top of a comparison result as a ranked table.
pub fn display_comparison(comparison: &Comparison, limit: usize) {
    if !comparison.status.is_compared() {
        display_status(&comparison.status);
        return;
    }

    let result = &comparison.result;
    if result.is_empty() {
        println!("No differences found between the 2 files.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Notions missing in file 2 ({} found) ===", result.len()).bold()
    );
    println!();
    display_ranked(result, limit);
}

/// Display one document's vocabulary in ranking order.
pub fn display_vocabulary(vocabulary: &FrequencyVocabulary, limit: usize) {
    if vocabulary.is_empty() {
        println!("No notions found (empty text or only stopwords).");
        return;
    }

    println!(
        "\n{}",
        format!("=== Vocabulary ({} notions) ===", vocabulary.len()).bold()
    );
    println!();
    display_ranked(&vocabulary.ranked(), limit);
}

/// Print a stopword list, several words per line.
pub fn display_stopwords(filter: &StopwordFilter) {
    println!(
        "\n{}",
        format!("=== Stopwords ({} words) ===", filter.len()).bold()
    );
    for line in filter.sorted_words().chunks(10) {
        println!("  {}", line.join(", ").dimmed());
    }
}

fn display_ranked(result: &ComparisonResult, limit: usize) {
    println!(
        "  {:>4}  {:<width$} {:>11}",
        "Rank".dimmed(),
        "Notion".dimmed(),
        "Occurrences".dimmed(),
        width = NOTION_WIDTH,
    );
    println!("  {}", "-".repeat(NOTION_WIDTH + 18).dimmed());

    for (i, entry) in result.top(limit).iter().enumerate() {
        let notion = truncate_chars(entry.notion.as_str(), NOTION_WIDTH - 3);
        let notion = if entry.notion.is_bigram() {
            notion.cyan()
        } else {
            notion.normal()
        };
        println!(
            "  {:>4}. {:<width$} {:>11}",
            i + 1,
            notion,
            entry.count,
            width = NOTION_WIDTH,
        );
    }

    if result.len() > limit {
        println!(
            "  {}",
            format!("... and {} more", result.len() - limit).dimmed()
        );
    }
    println!();
}
