//! Keyword Ranker: the N most frequent tokens of a normalized job description.
//!
//! Plain unigram counts: no phrase detection, no TF-IDF, no skill taxonomy.

use std::collections::HashMap;

use serde::Serialize;

/// A ranked keyword and how often it occurred in the JD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub frequency: u32,
}

/// Counts every distinct token, keeping first-seen order.
pub fn count_terms(normalized: &str) -> Vec<KeywordCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<KeywordCount> = Vec::new();

    for token in normalized.split_whitespace() {
        match index.get(token) {
            Some(&slot) => counts[slot].frequency += 1,
            None => {
                index.insert(token, counts.len());
                counts.push(KeywordCount {
                    keyword: token.to_string(),
                    frequency: 1,
                });
            }
        }
    }
    counts
}

/// Returns up to `top_n` tokens by descending frequency. Ties keep first-seen order.
pub fn rank_keywords(normalized: &str, top_n: usize) -> Vec<KeywordCount> {
    let mut counts = count_terms(normalized);
    // sort_by is stable, so equal counts stay in encounter order
    counts.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    counts.truncate(top_n);
    counts
}

/// Keyword strings only, in rank order.
pub fn extract_keywords(normalized: &str, top_n: usize) -> Vec<String> {
    rank_keywords(normalized, top_n)
        .into_iter()
        .map(|k| k.keyword)
        .collect()
}
