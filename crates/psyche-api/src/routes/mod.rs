//! API route definitions and router builder.

pub mod analyze;
pub mod arcana;
pub mod health;

use axum::Router;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    // The browser front-end is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/analyze", post(analyze::analyze))
        .route("/arcana", get(arcana::list_cards))
        .route("/arcana/{id}", get(arcana::get_card));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use async_trait::async_trait;
    use psyche_resolver::{GeneratorError, LocalOracle, TextGenerator};

    /// Stub generator returning a fixed payload.
    struct FixedGenerator(String);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, GeneratorError> {
            Ok(self.0.clone())
        }

        fn provider_name(&self) -> &str {
            "fixed"
        }
    }

    /// Stub generator that always fails at the transport level.
    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, GeneratorError> {
            Err(GeneratorError::Transport("connection refused".into()))
        }

        fn provider_name(&self) -> &str {
            "failing"
        }
    }

    fn app_with(generator: impl TextGenerator + 'static) -> Router {
        build_router(AppState::new(Arc::new(generator)))
    }

    async fn post_analyze(app: Router, situation: &str) -> (StatusCode, serde_json::Value) {
        let body = serde_json::json!({ "situation": situation });
        let response = app
            .oneshot(
                Request::post("/api/v1/analyze")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let response = app_with(FailingGenerator)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn analyze_happy_path() {
        let app = app_with(FixedGenerator(
            r#"{"cardId": 16, "interpretation": "Башня рушится не зря."}"#.into(),
        ));
        let (status, json) = post_analyze(app, "все рушится и я не знаю почему").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["cardId"], 16);
        assert_eq!(json["cardName"], "Башня");
        assert_eq!(json["archetype"], "Разрушитель");
        assert!(json["imageUrl"].as_str().unwrap().ends_with("16_tower.png"));
        assert_eq!(json["interpretation"], "Башня рушится не зря.");
        assert!(json["id"].is_string());
        assert!(json["analyzedAt"].is_string());
    }

    #[tokio::test]
    async fn analyze_degrades_to_oracle_on_generator_failure() {
        let situation = "Я застрял на распутье и боюсь перемен";
        let expected = LocalOracle::new().compute(situation);

        let (status, json) = post_analyze(app_with(FailingGenerator), situation).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["cardId"], expected.card_id);
        assert_eq!(json["cardName"], "Маг");
        assert_eq!(json["interpretation"], expected.interpretation);
    }

    #[tokio::test]
    async fn analyze_rejects_empty_situation() {
        let (status, json) = post_analyze(app_with(FailingGenerator), "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("empty"));
    }

    #[tokio::test]
    async fn analyze_rejects_short_situation() {
        let (status, json) = post_analyze(app_with(FailingGenerator), "hi").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("too short"));
    }

    #[tokio::test]
    async fn arcana_lists_full_deck() {
        let response = app_with(FailingGenerator)
            .oneshot(Request::get("/api/v1/arcana").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(json.len(), 22);
        assert_eq!(json[0]["name"], "Шут");
        assert_eq!(json[21]["name"], "Мир");
    }

    #[tokio::test]
    async fn arcana_card_found() {
        let response = app_with(FailingGenerator)
            .oneshot(
                Request::get("/api/v1/arcana/5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["name"], "Иерофант");
        assert_eq!(json["archetype"], "Наставник");
    }

    #[tokio::test]
    async fn arcana_card_not_found() {
        let response = app_with(FailingGenerator)
            .oneshot(
                Request::get("/api/v1/arcana/99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
