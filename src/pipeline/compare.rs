// Orchestration of one document-pair comparison.
//
// Blank input and empty vocabularies are expected outcomes, reported through
// `ComparisonStatus` rather than as errors. The caller decides what to tell
// the user and whether to produce any output.

use serde::Serialize;
use tracing::info;

use crate::notions::model::{ComparisonResult, RawText};
use crate::notions::ranker;
use crate::notions::vectorizer::Vectorizer;

/// How a comparison ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonStatus {
    /// Both documents were vectorized and ranked.
    Compared,
    /// One or both texts were empty or whitespace-only; nothing was compared.
    EmptyInput { first: bool, second: bool },
    /// A document produced no countable notions (e.g. only stopwords).
    NoVocabulary { first: bool, second: bool },
}

impl ComparisonStatus {
    pub fn is_compared(&self) -> bool {
        matches!(self, ComparisonStatus::Compared)
    }
}

/// Outcome of [`compare`]: the status plus the (possibly empty) result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub status: ComparisonStatus,
    pub result: ComparisonResult,
}

impl Comparison {
    fn skipped(status: ComparisonStatus) -> Self {
        Self {
            status,
            result: ComparisonResult::empty(),
        }
    }
}

/// Compare two documents with the default vectorizer.
pub fn compare(first: &RawText, second: &RawText) -> Comparison {
    compare_with(&Vectorizer::default(), first, second)
}

/// Compare two documents, vectorizing both with the same `vectorizer`.
pub fn compare_with(vectorizer: &Vectorizer<'_>, first: &RawText, second: &RawText) -> Comparison {
    let first_blank = first.is_blank();
    let second_blank = second.is_blank();
    if first_blank || second_blank {
        info!(first_blank, second_blank, "Skipping comparison: blank input");
        return Comparison::skipped(ComparisonStatus::EmptyInput {
            first: first_blank,
            second: second_blank,
        });
    }

    let first_vocab = vectorizer.vectorize(first);
    let second_vocab = vectorizer.vectorize(second);
    if first_vocab.is_empty() || second_vocab.is_empty() {
        info!(
            first = first_vocab.len(),
            second = second_vocab.len(),
            "Skipping comparison: no vocabulary"
        );
        return Comparison::skipped(ComparisonStatus::NoVocabulary {
            first: first_vocab.is_empty(),
            second: second_vocab.is_empty(),
        });
    }

    let result = ranker::rank(&first_vocab, &second_vocab);
    info!(
        first = first_vocab.len(),
        second = second_vocab.len(),
        missing = result.len(),
        "Compared vocabularies"
    );

    Comparison {
        status: ComparisonStatus::Compared,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_first_skips() {
        let comparison = compare(&RawText::from("   "), &RawText::from("contrat"));
        assert_eq!(
            comparison.status,
            ComparisonStatus::EmptyInput {
                first: true,
                second: false
            }
        );
        assert!(comparison.result.is_empty());
    }

    #[test]
    fn test_stopword_only_second_is_no_vocabulary() {
        let comparison = compare(&RawText::from("contrat signé"), &RawText::from("le la les"));
        assert_eq!(
            comparison.status,
            ComparisonStatus::NoVocabulary {
                first: false,
                second: true
            }
        );
        assert!(comparison.result.is_empty());
    }

    #[test]
    fn test_compared() {
        let comparison = compare(
            &RawText::from("le chat mange le chat"),
            &RawText::from("le chien mange"),
        );
        assert!(comparison.status.is_compared());
        assert_eq!(comparison.result.entries()[0].notion.as_str(), "chat");
        assert_eq!(comparison.result.entries()[0].count, 2);
    }
}
