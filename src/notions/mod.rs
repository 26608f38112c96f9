// Notion extraction and comparison: tokenizing, counting, set difference.

pub mod model;
pub mod ranker;
pub mod stopwords;
pub mod vectorizer;
