// Vectorizer: one document's raw text to a bounded unigram/bigram vocabulary.
//
// Tokens are maximal runs of at least two word characters (letters, digits,
// underscore) in the lower-cased text. Stopwords are dropped before bigrams
// are formed, so a bigram pairs two consecutive surviving tokens.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::model::{FrequencyVocabulary, Notion, RankedNotion, RawText};
use super::ranker::rank_order;
use super::stopwords::{StopwordFilter, FRENCH};

/// Default vocabulary cap.
pub const DEFAULT_MAX_FEATURES: usize = 100;

/// Shortest run of word characters that counts as a token.
const MIN_TOKEN_CHARS: usize = 2;

/// Builds [`FrequencyVocabulary`] values with a fixed stopword list and cap.
#[derive(Debug, Clone)]
pub struct Vectorizer<'a> {
    stopwords: &'a StopwordFilter,
    max_features: usize,
}

impl Default for Vectorizer<'static> {
    fn default() -> Self {
        Self {
            stopwords: &FRENCH,
            max_features: DEFAULT_MAX_FEATURES,
        }
    }
}

impl<'a> Vectorizer<'a> {
    pub fn new(stopwords: &'a StopwordFilter, max_features: usize) -> Self {
        Self {
            stopwords,
            max_features,
        }
    }

    pub fn max_features(&self) -> usize {
        self.max_features
    }

    /// Count every unigram and bigram of `text`, keeping the
    /// `max_features` highest-ranked ones.
    ///
    /// Text without any surviving token gives an empty vocabulary.
    pub fn vectorize(&self, text: &RawText) -> FrequencyVocabulary {
        let tokens: Vec<String> = tokenize(text.as_str())
            .into_iter()
            .filter(|token| !self.stopwords.is_stopword(token))
            .collect();

        let mut counts: HashMap<Notion, u32> = HashMap::new();
        for token in &tokens {
            *counts.entry(Notion::unigram(token)).or_insert(0) += 1;
        }
        for pair in tokens.windows(2) {
            *counts.entry(Notion::bigram(&pair[0], &pair[1])).or_insert(0) += 1;
        }

        let distinct = counts.len();
        let vocabulary = FrequencyVocabulary::from_counts(self.cap(counts));
        debug!(
            tokens = tokens.len(),
            distinct,
            kept = vocabulary.len(),
            "Vectorized document"
        );
        vocabulary
    }

    /// Keep the top `max_features` notions by count, ties by notion.
    fn cap(&self, counts: HashMap<Notion, u32>) -> BTreeMap<Notion, u32> {
        if counts.len() <= self.max_features {
            return counts.into_iter().collect();
        }

        let mut ranked: Vec<RankedNotion> = counts
            .into_iter()
            .map(|(notion, count)| RankedNotion { notion, count })
            .collect();
        ranked.sort_by(rank_order);
        ranked.truncate(self.max_features);

        ranked.into_iter().map(|e| (e.notion, e.count)).collect()
    }
}

/// Vectorize with the built-in French stopwords.
pub fn vectorize(text: &RawText, max_features: usize) -> FrequencyVocabulary {
    Vectorizer::new(&FRENCH, max_features).vectorize(text)
}

/// Split text into lower-case word tokens of two or more characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for c in lowered.chars() {
        if is_word_char(c) {
            current.push(c);
            current_chars += 1;
            continue;
        }
        if current_chars >= MIN_TOKEN_CHARS {
            tokens.push(std::mem::take(&mut current));
        } else {
            current.clear();
        }
        current_chars = 0;
    }
    if current_chars >= MIN_TOKEN_CHARS {
        tokens.push(current);
    }

    tokens
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_short_and_punctuation() {
        assert_eq!(
            tokenize("L'article 3, alinéa b : Contrat_Cadre!"),
            vec!["article", "alinéa", "contrat_cadre"]
        );
    }

    #[test]
    fn test_tokenize_digits_and_edges() {
        assert_eq!(tokenize("2024 a 42x"), vec!["2024", "42x"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("a b c ... !").is_empty());
    }

    #[test]
    fn test_bigrams_skip_over_stopwords() {
        let filter = StopwordFilter::from_list(&["le"]);
        let text = RawText::from("le chat mange le chat");
        let vocab = Vectorizer::new(&filter, 100).vectorize(&text);
        assert_eq!(vocab.get(&Notion::unigram("chat")), Some(2));
        assert_eq!(vocab.get(&Notion::unigram("mange")), Some(1));
        assert_eq!(vocab.get(&Notion::bigram("chat", "mange")), Some(1));
        assert_eq!(vocab.get(&Notion::bigram("mange", "chat")), Some(1));
        assert!(!vocab.contains(&Notion::unigram("le")));
        assert_eq!(vocab.len(), 4);
    }

    #[test]
    fn test_cap_keeps_highest_counts() {
        let filter = StopwordFilter::none();
        let text = RawText::from("aa aa aa bb cc bb");
        let vocab = Vectorizer::new(&filter, 2).vectorize(&text);
        // "aa aa" ties with "bb" at 2 and sorts first
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.get(&Notion::unigram("aa")), Some(3));
        assert_eq!(vocab.get(&Notion::bigram("aa", "aa")), Some(2));
        assert!(!vocab.contains(&Notion::unigram("bb")));
    }

    #[test]
    fn test_cap_breaks_ties_lexicographically() {
        let filter = StopwordFilter::none();
        let vocab = Vectorizer::new(&filter, 1).vectorize(&RawText::from("zz yy"));
        // zz, yy, "zz yy" all count 1; "yy" sorts first
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec![(&Notion::unigram("yy"), 1)]);
    }

    #[test]
    fn test_only_stopwords_is_empty() {
        let vocab = vectorize(&RawText::from("le la les de du"), DEFAULT_MAX_FEATURES);
        assert!(vocab.is_empty());
    }
}
