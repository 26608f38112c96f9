// Data model for a document comparison.
//
// These are the values that flow between the vectorizer, the ranker and the
// output sinks. Everything here is built fresh for one comparison and held
// only in memory.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::ranker;

/// Decoded textual content of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawText(String);

impl RawText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when there is nothing but whitespace to compare.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for RawText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for RawText {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// A unigram or bigram used as a vocabulary key.
///
/// Bigrams are stored as the two words joined by a single space. The space
/// sorts below every word character, so ordering the joined string is the
/// same as ordering the word pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notion(String);

impl Notion {
    pub fn unigram(word: &str) -> Self {
        Self(word.to_string())
    }

    pub fn bigram(first: &str, second: &str) -> Self {
        let mut joined = String::with_capacity(first.len() + second.len() + 1);
        joined.push_str(first);
        joined.push(' ');
        joined.push_str(second);
        Self(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The one or two words making up this notion.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ')
    }

    pub fn is_bigram(&self) -> bool {
        self.0.contains(' ')
    }
}

impl fmt::Display for Notion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Notion {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// Bounded mapping from notion to occurrence count for one document.
///
/// Only the vectorizer builds these, so the size bound and stopword
/// exclusion hold for every instance handed to the ranker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyVocabulary {
    counts: BTreeMap<Notion, u32>,
}

impl FrequencyVocabulary {
    pub(crate) fn from_counts(counts: BTreeMap<Notion, u32>) -> Self {
        Self { counts }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn contains(&self, notion: &Notion) -> bool {
        self.counts.contains_key(notion)
    }

    pub fn get(&self, notion: &Notion) -> Option<u32> {
        self.counts.get(notion).copied()
    }

    /// Entries in lexicographic notion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Notion, u32)> {
        self.counts.iter().map(|(notion, count)| (notion, *count))
    }

    /// Entries in ranking order: count descending, then notion ascending.
    pub fn ranked(&self) -> ComparisonResult {
        let mut entries: Vec<RankedNotion> = self
            .iter()
            .map(|(notion, count)| RankedNotion {
                notion: notion.clone(),
                count,
            })
            .collect();
        entries.sort_by(ranker::rank_order);
        ComparisonResult(entries)
    }
}

/// One (notion, occurrences) row of a ranked result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedNotion {
    pub notion: Notion,
    pub count: u32,
}

/// Notions from document 1 missing in document 2, in ranking order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonResult(Vec<RankedNotion>);

impl ComparisonResult {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn from_ranked(entries: Vec<RankedNotion>) -> Self {
        Self(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[RankedNotion] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedNotion> {
        self.0.iter()
    }

    /// The first `n` entries (or all of them if there are fewer).
    pub fn top(&self, n: usize) -> &[RankedNotion] {
        &self.0[..n.min(self.0.len())]
    }

    /// Plain (notion, count) pairs, handy for assertions and exports.
    pub fn pairs(&self) -> Vec<(&str, u32)> {
        self.0.iter().map(|e| (e.notion.as_str(), e.count)).collect()
    }
}

impl<'a> IntoIterator for &'a ComparisonResult {
    type Item = &'a RankedNotion;
    type IntoIter = std::slice::Iter<'a, RankedNotion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
