// Stopword filtering.
//
// A fixed list of French function words (articles, pronouns, conjunctions,
// auxiliary forms) that never count as notions. The list is static data,
// built into a lookup set once per process.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Built-in French stopword list.
pub const FRENCH_STOPWORDS: &[&str] = &[
    "ai", "aie", "aient", "aies", "ait", "alors", "as", "au", "aucun", "aura", "aurai",
    "auraient", "aurais", "aurait", "auras", "aurez", "auriez", "aurions", "aurons", "auront",
    "aux", "avaient", "avais", "avait", "avec", "avez", "aviez", "avions", "avons", "ayant",
    "ayante", "ayantes", "ayants", "ayez", "ayons", "bon", "car", "ce", "ceci", "cela", "ces",
    "cet", "cette", "choix", "chez", "combien", "comme", "comment", "dans", "de", "dedans",
    "dehors", "depuis", "des", "deux", "devrait", "doit", "donc", "dos", "droite", "du",
    "début", "elle", "elles", "en", "encore", "es", "est", "et", "eu", "eue", "eues", "eurent",
    "eus", "eusse", "eussent", "eusses", "eussiez", "eussions", "eut", "eux", "eûmes", "eût",
    "eûtes", "faire", "fait", "faites", "fois", "font", "force", "furent", "fus", "fusse",
    "fussent", "fusses", "fussiez", "fussions", "fut", "fûmes", "fût", "fûtes", "grâce",
    "haut", "hors", "ici", "il", "ils", "je", "juste", "la", "le", "les", "leur", "leurs",
    "lui", "ma", "maintenant", "mais", "me", "mes", "moi", "moins", "mon", "mot", "même", "ne",
    "ni", "nommés", "notre", "nous", "nouveaux", "on", "ont", "ou", "où", "par", "parce",
    "parole", "pas", "personne", "peu", "peut", "pièce", "plupart", "plus", "plusieurs",
    "pour", "pourquoi", "qu", "quand", "que", "quel", "quelle", "quelles", "quels", "qui",
    "sa", "sans", "se", "sera", "serai", "seraient", "serais", "serait", "seras", "serez",
    "seriez", "serions", "serons", "seront", "ses", "si", "sien", "soient", "sois", "soit",
    "sommes", "son", "sont", "sous", "soyez", "soyons", "suis", "sur", "ta", "tandis", "te",
    "tel", "telle", "telles", "tels", "tes", "toi", "ton", "tous", "tout", "toute", "toutes",
    "très", "tu", "un", "une", "valeur", "vers", "voie", "voient", "vont", "votre", "vous",
    "vu", "y", "étiez", "étions", "été", "étée", "étées", "étés", "êtes", "être",
];

/// Process-wide filter over [`FRENCH_STOPWORDS`].
pub static FRENCH: Lazy<StopwordFilter> =
    Lazy::new(|| StopwordFilter::from_list(FRENCH_STOPWORDS));

/// Set-membership test over a fixed list of ignorable words.
///
/// Words are matched after lower-casing, which is how the tokenizer
/// normalizes its output.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    words: HashSet<String>,
}

impl StopwordFilter {
    /// Build a filter from a word list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// A filter that lets every word through.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words in alphabetical order.
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}
