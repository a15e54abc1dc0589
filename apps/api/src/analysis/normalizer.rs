//! Normalizer: lowercases, spells out `+`/`#`, strips punctuation, drops stopwords and
//! lemmatizes, producing a space-joined token string.

use std::sync::Arc;

use crate::analysis::lexicon::Lexicon;

#[derive(Debug, Clone)]
pub struct Normalizer {
    lexicon: Arc<Lexicon>,
}

impl Normalizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Normalizes raw document text. Empty input gives empty output.
    pub fn normalize(&self, text: &str) -> String {
        let cleaned = clean(text);

        let mut tokens: Vec<String> = Vec::new();
        for token in cleaned.split_whitespace() {
            if self.lexicon.is_stopword(token) {
                continue;
            }
            let lemma = self.lexicon.lemmatize(token);
            // "wills" -> "will" would otherwise reappear as a stopword on a second pass.
            if self.lexicon.is_stopword(&lemma) {
                continue;
            }
            tokens.push(lemma.into_owned());
        }
        tokens.join(" ")
    }
}

/// Steps before tokenization: lowercase, `+` -> "plus", `#` -> "sharp", then keep only
/// ASCII letters, digits, `.` and whitespace. Every separator becomes a plain space.
fn clean(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars().flat_map(char::to_lowercase) {
        match ch {
            '+' => out.push_str("plus"),
            '#' => out.push_str("sharp"),
            c if c.is_ascii_alphanumeric() || c == '.' => out.push(c),
            c if is_separator(c) => out.push(' '),
            _ => {}
        }
    }
    out
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators
/// (`\x1c`..`\x1f`), which plain-text exports use between fields.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
