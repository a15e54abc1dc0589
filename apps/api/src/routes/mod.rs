pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes();

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/match", post(handlers::handle_match_upload))
        .route("/api/v1/match/text", post(handlers::handle_match_text))
        .route("/api/v1/keywords", post(handlers::handle_keywords))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::lexicon::Lexicon;
    use crate::analysis::normalizer::Normalizer;
    use crate::analysis::suggestions::{Suggester, SuggestionOutcome, FALLBACK_SUGGESTION};
    use crate::config::Config;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    const BOUNDARY: &str = "resume-match-test-boundary";

    /// Echoes the missing keywords back, or reports itself unavailable.
    struct StubSuggester {
        available: bool,
    }

    #[async_trait]
    impl Suggester for StubSuggester {
        async fn suggest(&self, missing: &[String]) -> SuggestionOutcome {
            if self.available {
                SuggestionOutcome::Generated {
                    text: format!("Add experience with {}.", missing.join(", ")),
                }
            } else {
                SuggestionOutcome::Unavailable {
                    reason: "HTTP error: connection refused".to_string(),
                }
            }
        }
    }

    fn test_router(available: bool) -> Router {
        let config = Config {
            hf_api_key: "hf_test".to_string(),
            suggestion_api_url: "http://127.0.0.1:9/models/test".to_string(),
            suggestion_timeout_secs: 1,
            keyword_top_n: 20,
            max_upload_mb: 1,
            port: 0,
            rust_log: "debug".to_string(),
        };
        build_router(AppState {
            config,
            normalizer: Normalizer::new(Arc::new(Lexicon::english())),
            suggester: Arc::new(StubSuggester { available }),
        })
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(parts: &[(&str, Option<&str>, &str)]) -> Request<Body> {
        let mut body = String::new();
        for (name, file_name, content) in parts {
            body.push_str(&format!("--{BOUNDARY}\r\n"));
            match file_name {
                Some(file_name) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n"
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
                )),
            }
            body.push_str(content);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        Request::builder()
            .method("POST")
            .uri("/api/v1/match")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(test_router(true), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-match");
    }

    #[tokio::test]
    async fn test_match_text_reports_coverage_and_suggestions() {
        let request = json_request(
            "/api/v1/match/text",
            json!({
                "resume_text": "Python and Java developer",
                "jd_text": "python python java java java sql",
                "top_n": 3
            }),
        );
        let (status, body) = send(test_router(true), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["keywords"], json!(["java", "python", "sql"]));
        assert_eq!(body["matched"], json!(["java", "python"]));
        assert_eq!(body["missing"], json!(["sql"]));
        assert_eq!(body["coverage_percent"], json!(66.67));
        assert_eq!(body["suggestions"]["status"], "generated");
        assert_eq!(body["suggestion_text"], "Add experience with sql.");
    }

    #[tokio::test]
    async fn test_match_text_fallback_when_suggestions_unavailable() {
        let request = json_request(
            "/api/v1/match/text",
            json!({"resume_text": "Java", "jd_text": "Kafka Kubernetes"}),
        );
        let (status, body) = send(test_router(false), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["coverage_percent"], json!(0.0));
        assert_eq!(body["suggestions"]["status"], "unavailable");
        assert_eq!(body["suggestion_text"], FALLBACK_SUGGESTION);
    }

    #[tokio::test]
    async fn test_match_text_rejects_empty_jd() {
        let request = json_request(
            "/api/v1/match/text",
            json!({"resume_text": "Python", "jd_text": "   "}),
        );
        let (status, body) = send(test_router(true), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_keywords_preview_includes_frequencies() {
        let request = json_request(
            "/api/v1/keywords",
            json!({"jd_text": "python python java java java sql", "top_n": 2}),
        );
        let (status, body) = send(test_router(true), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["keywords"],
            json!([
                {"keyword": "java", "frequency": 3},
                {"keyword": "python", "frequency": 2}
            ])
        );
    }

    #[tokio::test]
    async fn test_keywords_rejects_zero_top_n() {
        let request = json_request("/api/v1/keywords", json!({"jd_text": "rust", "top_n": 0}));
        let (status, _) = send(test_router(true), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_with_text_files() {
        let request = multipart_request(&[
            ("resume", Some("resume.txt"), "Senior Rust developer with Tokio, Axum and SQL."),
            (
                "job_description",
                Some("jd.TXT"),
                "Rust developer: Rust, Kafka, Rust services",
            ),
            ("top_n", None, "2"),
        ]);
        let (status, body) = send(test_router(true), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["keywords"], json!(["rust", "developer"]));
        assert_eq!(body["coverage_percent"], json!(100.0));
        assert_eq!(body["suggestions"]["status"], "not_requested");
        assert_eq!(body["suggestion_text"], "");
    }

    #[tokio::test]
    async fn test_upload_unsupported_resume_type_scores_zero() {
        let request = multipart_request(&[
            ("resume", Some("resume.rtf"), "Rust developer"),
            ("job_description", Some("jd.txt"), "Rust developer"),
        ]);
        let (status, body) = send(test_router(true), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["coverage_percent"], json!(0.0));
        assert_eq!(body["missing"], json!(["rust", "developer"]));
    }

    #[tokio::test]
    async fn test_upload_missing_job_description_is_rejected() {
        let request = multipart_request(&[("resume", Some("resume.txt"), "Rust developer")]);
        let (status, body) = send(test_router(true), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("job_description"));
    }

    #[tokio::test]
    async fn test_upload_corrupt_docx_is_unprocessable() {
        let request = multipart_request(&[
            ("resume", Some("resume.docx"), "this is not a zip archive"),
            ("job_description", Some("jd.txt"), "Rust developer"),
        ]);
        let (status, body) = send(test_router(true), request).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }
}
