use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::models::{LearningResponse, SentenceInput};
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Learning endpoint
        .route("/learn-german", post(learn_german))
        // Health check
        .route("/api/health", get(health_check))
}

/// Translate the submitted sentence and attach the learning aids.
///
/// Malformed bodies never reach this handler; the `Json` extractor rejects
/// them with a 422 before the translator is consulted.
async fn learn_german(
    State(state): State<AppState>,
    Json(input): Json<SentenceInput>,
) -> Result<Json<LearningResponse>, (StatusCode, Json<Value>)> {
    debug!("Learn request: {} chars", input.sentence.len());

    let translation = state
        .translator
        .translate(&input.sentence)
        .await
        .map_err(|e| {
            error!("Translation failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "upstream translation failure",
                    "detail": e.to_string(),
                })),
            )
        })?;

    let insights = state.insights.generate(&input.sentence, &translation);

    Ok(Json(LearningResponse {
        german_translation: translation,
        vocabulary: insights.vocabulary,
        grammar_tips: insights.grammar_tip,
        example_sentences: insights.example_sentence,
    }))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let translator_healthy = state.translator.health_check().await.unwrap_or(false);
    let uptime_secs = (Utc::now() - state.started_at).num_seconds();

    Json(json!({
        "status": "ok",
        "translator": translator_healthy,
        "provider": state.config.translator_config.provider,
        "uptime_secs": uptime_secs,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::insights::{InsightGenerator, GRAMMAR_TIPS};
    use crate::translate::{TranslateError, TranslatorInterface};

    /// Translator double: replies with a fixed string, or fails when built
    /// with `failing()`. Counts calls so tests can assert the adapter was
    /// never consulted on rejected requests.
    struct StubTranslator {
        reply: Option<String>,
        calls: AtomicUsize,
    }

    impl StubTranslator {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(reply.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TranslatorInterface for StubTranslator {
        async fn translate(&self, _text: &str) -> Result<String, TranslateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Some(reply) => Ok(reply.clone()),
                None => Err(TranslateError::Upstream("model offline".to_string())),
            }
        }

        async fn health_check(&self) -> Result<bool, TranslateError> {
            Ok(self.reply.is_some())
        }
    }

    fn test_app(translator: Arc<StubTranslator>) -> Router {
        let state = AppState {
            config: Config::default(),
            translator,
            insights: Arc::new(InsightGenerator::default()),
            started_at: Utc::now(),
        };
        Router::new().merge(create_routes()).with_state(state)
    }

    fn learn_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/learn-german")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn learn_german_returns_translation_with_learning_aids() {
        let stub = StubTranslator::replying("Ich liebe Hunde.");
        let app = test_app(stub.clone());

        let response = app
            .oneshot(learn_request(r#"{"sentence":"I love dogs"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: LearningResponse = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body.german_translation, "Ich liebe Hunde.");
        assert_eq!(body.vocabulary.len(), 3);
        assert_eq!(body.vocabulary[0].english, "I");
        assert_eq!(body.vocabulary[0].german, "Ich");
        assert_eq!(body.vocabulary[1].english, "love");
        assert_eq!(body.vocabulary[1].german, "liebe");
        assert_eq!(body.vocabulary[2].english, "dogs");
        assert_eq!(body.vocabulary[2].german, "Hunde");

        assert!(GRAMMAR_TIPS.contains(&body.grammar_tips.as_str()));

        let example_candidates = [
            "EN: I love dogs",
            "DE: Ich liebe Hunde.",
            "EN: I speak German well. / DE: Ich spreche gut Deutsch.",
            "EN: She is learning German. / DE: Sie lernt Deutsch.",
        ];
        assert!(example_candidates.contains(&body.example_sentences.as_str()));

        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn empty_sentence_yields_empty_vocabulary() {
        let stub = StubTranslator::replying("Ich liebe Hunde.");
        let app = test_app(stub);

        let response = app
            .oneshot(learn_request(r#"{"sentence":""}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: LearningResponse = serde_json::from_slice(&bytes).unwrap();

        assert!(body.vocabulary.is_empty());
        assert_eq!(body.german_translation, "Ich liebe Hunde.");
        assert!(GRAMMAR_TIPS.contains(&body.grammar_tips.as_str()));
    }

    #[tokio::test]
    async fn missing_sentence_field_is_rejected_before_translation() {
        let stub = StubTranslator::replying("Ich liebe Hunde.");
        let app = test_app(stub.clone());

        let response = app.oneshot(learn_request("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn wrong_typed_sentence_field_is_rejected_before_translation() {
        let stub = StubTranslator::replying("Ich liebe Hunde.");
        let app = test_app(stub.clone());

        let response = app
            .oneshot(learn_request(r#"{"sentence":42}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_server_error() {
        let stub = StubTranslator::failing();
        let app = test_app(stub.clone());

        let response = app
            .oneshot(learn_request(r#"{"sentence":"I love dogs"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"], "upstream translation failure");
        assert!(body["detail"].as_str().unwrap().contains("model offline"));
        // All-or-nothing: no partial learning response alongside the error.
        assert!(body.get("german_translation").is_none());
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn health_reports_translator_reachability() {
        let app = test_app(StubTranslator::replying("ok"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["status"], "ok");
        assert_eq!(body["translator"], true);
        assert_eq!(body["provider"], "marian_service");
        assert!(body["uptime_secs"].is_i64());
    }
}
