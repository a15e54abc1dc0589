//! Lexicon: the immutable linguistic resources shared by every normalization:
//! the English stopword set and a dictionary-form (noun) lemmatizer.
//!
//! Built once in `main` and carried in `AppState` as `Arc<Lexicon>`.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

/// English stopwords, as distributed with the NLTK corpus.
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
    "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself",
    "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an", "the",
    "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
    "don't", "should", "should've", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain",
    "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn",
    "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn",
    "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
    "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// Dictionary forms the plural rules may reduce to, one per line.
const BASE_NOUNS: &str = include_str!("../../data/nouns.txt");

/// Irregular plurals the suffix rules cannot reach. Every value is a fixed point of
/// `Lemmatizer::lemmatize`.
const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("analyses", "analysis"),
    ("children", "child"),
    ("criteria", "criterion"),
    ("diagnoses", "diagnosis"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("hypotheses", "hypothesis"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("men", "man"),
    ("mice", "mouse"),
    ("phenomena", "phenomenon"),
    ("series", "series"),
    ("species", "species"),
    ("teeth", "tooth"),
    ("theses", "thesis"),
    ("vertices", "vertex"),
    ("women", "woman"),
];

/// Plural endings and what replaces them, tried against every token.
const NOUN_SUFFIXES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// Reduces inflected nouns to their dictionary form.
///
/// Irregular forms come from the exception table. Otherwise every suffix rule that
/// applies proposes a candidate, and only candidates present in the base-noun list
/// count; the shortest one wins. A token with no known base form is returned as is,
/// so product names like `kubernetes` or `jenkins` survive intact.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    exceptions: HashMap<&'static str, &'static str>,
    base_nouns: HashSet<&'static str>,
}

impl Lemmatizer {
    pub fn english() -> Self {
        Self {
            exceptions: NOUN_EXCEPTIONS.iter().copied().collect(),
            base_nouns: BASE_NOUNS
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .collect(),
        }
    }

    pub fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if let Some(lemma) = self.exceptions.get(word) {
            return Cow::Borrowed(*lemma);
        }

        let mut best: Option<Cow<'a, str>> = None;
        for (suffix, replacement) in NOUN_SUFFIXES {
            let Some(stem) = word.strip_suffix(*suffix) else {
                continue;
            };
            if stem.is_empty() {
                continue;
            }
            let candidate = format!("{stem}{replacement}");
            if !self.base_nouns.contains(candidate.as_str()) {
                continue;
            }
            if best.as_ref().map_or(true, |b| candidate.len() < b.len()) {
                best = Some(Cow::Owned(candidate));
            }
        }
        best.unwrap_or(Cow::Borrowed(word))
    }
}

/// Stopword set plus lemmatizer. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stopwords: HashSet<&'static str>,
    lemmatizer: Lemmatizer,
}

impl Lexicon {
    pub fn english() -> Self {
        Self {
            stopwords: ENGLISH_STOPWORDS.iter().copied().collect(),
            lemmatizer: Lemmatizer::english(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    pub fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.lemmatizer.lemmatize(word)
    }
}
