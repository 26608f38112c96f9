// Difference ranking: notions of document 1 that document 2 never uses.
//
// The ordering defined here is also the one the vectorizer uses when it
// caps a vocabulary, so a notion's position is reproducible across runs.

use std::cmp::Ordering;

use super::model::{ComparisonResult, FrequencyVocabulary, RankedNotion};

/// Count descending, then notion ascending.
pub fn rank_order(a: &RankedNotion, b: &RankedNotion) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.notion.cmp(&b.notion))
}

/// Keep every entry of `first` whose notion is absent from `second`,
/// sorted by [`rank_order`].
pub fn rank(first: &FrequencyVocabulary, second: &FrequencyVocabulary) -> ComparisonResult {
    let mut missing: Vec<RankedNotion> = first
        .iter()
        .filter(|(notion, _)| !second.contains(notion))
        .map(|(notion, count)| RankedNotion {
            notion: notion.clone(),
            count,
        })
        .collect();

    missing.sort_by(rank_order);
    ComparisonResult::from_ranked(missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notions::model::RawText;
    use crate::notions::stopwords::StopwordFilter;
    use crate::notions::vectorizer::Vectorizer;

    fn vocab(text: &str) -> FrequencyVocabulary {
        let none = StopwordFilter::none();
        Vectorizer::new(&none, 100).vectorize(&RawText::from(text))
    }

    #[test]
    fn test_excludes_shared_notions() {
        let result = rank(&vocab("alpha beta"), &vocab("beta"));
        assert_eq!(result.pairs(), vec![("alpha", 1), ("alpha beta", 1)]);
    }

    #[test]
    fn test_ties_sorted_lexicographically() {
        let result = rank(&vocab("zz yy xx"), &FrequencyVocabulary::default());
        let notions: Vec<&str> = result.iter().map(|e| e.notion.as_str()).collect();
        assert_eq!(notions, vec!["xx", "yy", "yy xx", "zz", "zz yy"]);
    }

    #[test]
    fn test_empty_first_gives_empty_result() {
        let result = rank(&FrequencyVocabulary::default(), &vocab("alpha"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_identical_vocabularies_give_empty_result() {
        let v = vocab("contrat signé contrat");
        assert!(rank(&v, &v).is_empty());
    }
}
