//! Match pipeline: normalize → rank → score → suggest, for one resume/JD pair.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::analysis::coverage::{score_coverage, CoverageError, CoverageResult};
use crate::analysis::keywords::extract_keywords;
use crate::analysis::normalizer::Normalizer;
use crate::analysis::suggestions::{suggest_for_missing, Suggester, SuggestionOutcome};

/// Everything the caller renders for one comparison.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    /// Correlates the report with its log lines; not stored anywhere.
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub keywords: Vec<String>,
    /// 0 – 100, two decimals
    pub coverage_percent: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub suggestions: SuggestionOutcome,
    pub suggestion_text: String,
}

/// Keyword extraction and scoring without the network call.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordAnalysis {
    pub keywords: Vec<String>,
    pub coverage: CoverageResult,
}

/// Normalizes both texts, ranks the JD's top `top_n` terms and scores the resume.
/// A JD without any keywords scores 0 with nothing matched or missing.
pub fn analyze(
    normalizer: &Normalizer,
    resume_text: &str,
    jd_text: &str,
    top_n: usize,
) -> KeywordAnalysis {
    let resume = normalizer.normalize(resume_text);
    let jd = normalizer.normalize(jd_text);

    let keywords = extract_keywords(&jd, top_n);
    let coverage = match score_coverage(&keywords, &resume) {
        Ok(coverage) => coverage,
        Err(CoverageError::NoKeywords) => {
            warn!("Job description produced no keywords; reporting zero coverage");
            CoverageResult {
                score: 0.0,
                matched: Vec::new(),
                missing: Vec::new(),
            }
        }
    };

    KeywordAnalysis { keywords, coverage }
}

/// Runs the full comparison, including the suggestion request for missing keywords.
pub async fn run_match(
    normalizer: &Normalizer,
    suggester: &dyn Suggester,
    resume_text: &str,
    jd_text: &str,
    top_n: usize,
) -> MatchReport {
    let request_id = Uuid::new_v4();

    async move {
        let KeywordAnalysis { keywords, coverage } =
            analyze(normalizer, resume_text, jd_text, top_n);
        let coverage_percent = coverage.percent();
        info!(
            "Coverage {coverage_percent}% ({} of {} keywords)",
            coverage.matched.len(),
            keywords.len()
        );

        let suggestions = suggest_for_missing(suggester, &coverage.missing).await;
        let suggestion_text = suggestions.display_text().to_string();

        MatchReport {
            request_id,
            generated_at: Utc::now(),
            keywords,
            coverage_percent,
            matched: coverage.matched,
            missing: coverage.missing,
            suggestions,
            suggestion_text,
        }
    }
    .instrument(info_span!("match", %request_id))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::lexicon::Lexicon;
    use crate::analysis::suggestions::FALLBACK_SUGGESTION;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const JD: &str = "Python developer wanted. Python, SQL and Docker. \
                      Experience with Python data pipelines and SQL reporting.";

    struct FixedSuggester {
        outcome: SuggestionOutcome,
        calls: AtomicUsize,
    }

    impl FixedSuggester {
        fn new(outcome: SuggestionOutcome) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Suggester for FixedSuggester {
        async fn suggest(&self, _missing: &[String]) -> SuggestionOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    fn normalizer() -> Normalizer {
        Normalizer::new(Arc::new(Lexicon::english()))
    }

    #[test]
    fn test_analyze_ranks_and_scores() {
        let analysis = analyze(&normalizer(), "Python and Java engineer", JD, 2);
        assert_eq!(analysis.keywords, vec!["python", "sql"]);
        assert_eq!(analysis.coverage.matched, vec!["python"]);
        assert_eq!(analysis.coverage.missing, vec!["sql"]);
        assert!((analysis.coverage.percent() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_analyze_empty_jd_scores_zero() {
        let analysis = analyze(&normalizer(), "Python engineer", "the and of", 20);
        assert!(analysis.keywords.is_empty());
        assert_eq!(analysis.coverage.score, 0.0);
        assert!(analysis.coverage.missing.is_empty());
    }

    #[tokio::test]
    async fn test_full_coverage_skips_suggestions() {
        let suggester = FixedSuggester::new(SuggestionOutcome::Generated {
            text: "unused".to_string(),
        });
        let resume = format!("{JD} Also Kubernetes.");
        let report = run_match(&normalizer(), &suggester, &resume, JD, 20).await;

        assert_eq!(report.coverage_percent, 100.0);
        assert!(report.missing.is_empty());
        assert_eq!(report.suggestions, SuggestionOutcome::NotRequested);
        assert_eq!(suggester.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_keywords_are_sent_for_suggestions() {
        let suggester = FixedSuggester::new(SuggestionOutcome::Generated {
            text: "Highlight your SQL reporting work.".to_string(),
        });
        let report = run_match(&normalizer(), &suggester, "Python developer", JD, 3).await;

        assert_eq!(report.keywords, vec!["python", "sql", "developer"]);
        assert_eq!(report.missing, vec!["sql"]);
        assert_eq!(report.coverage_percent, 66.67);
        assert_eq!(report.suggestion_text, "Highlight your SQL reporting work.");
        assert_eq!(suggester.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unavailable_suggestions_use_fallback_text() {
        let suggester = FixedSuggester::new(SuggestionOutcome::Unavailable {
            reason: "HTTP error".to_string(),
        });
        let report = run_match(&normalizer(), &suggester, "", JD, 5).await;

        assert_eq!(report.coverage_percent, 0.0);
        assert_eq!(report.missing.len(), report.keywords.len());
        assert_eq!(report.suggestion_text, FALLBACK_SUGGESTION);
    }
}
