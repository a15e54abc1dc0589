//! Coverage Scorer: which JD keywords occur verbatim among the resume's tokens.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoverageError {
    #[error("no keywords to score against")]
    NoKeywords,
}

/// Partition of the keyword list into matched and missing, in keyword order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageResult {
    /// |matched| / |keywords|, in [0, 1].
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl CoverageResult {
    /// Score as a percentage rounded to two decimals. Exact halves go to the even
    /// digit, so 1 of 160 keywords reports 0.62.
    pub fn percent(&self) -> f64 {
        let percent = self.score * 100.0;
        (percent * 100.0).round_ties_even() / 100.0
    }
}

/// Scores `keywords` against the distinct tokens of normalized resume text.
pub fn score_coverage(
    keywords: &[String],
    normalized_resume: &str,
) -> Result<CoverageResult, CoverageError> {
    if keywords.is_empty() {
        return Err(CoverageError::NoKeywords);
    }

    let resume_tokens: HashSet<&str> = normalized_resume.split_whitespace().collect();

    let (matched, missing): (Vec<String>, Vec<String>) = keywords
        .iter()
        .cloned()
        .partition(|k| resume_tokens.contains(k.as_str()));

    let score = matched.len() as f64 / keywords.len() as f64;

    Ok(CoverageResult {
        score,
        matched,
        missing,
    })
}
