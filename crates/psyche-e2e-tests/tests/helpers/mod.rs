//! Shared test harness for E2E integration tests.
//!
//! Stands up a wiremock vendor endpoint behind a real `OpenRouterClient`
//! and drives the real router, exercising the full HTTP → resolver →
//! vendor → fallback path across crate boundaries.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use psyche_api::routes::build_router;
use psyche_api::state::AppState;
use psyche_resolver::{OpenRouterClient, OpenRouterConfig};

/// End-to-end harness wiring a mocked vendor into the real server stack.
pub struct TestHarness {
    /// Mocked OpenRouter endpoint.
    pub vendor: MockServer,
    /// Axum router for HTTP requests via `tower::oneshot`.
    pub router: Router,
}

impl TestHarness {
    /// Start a harness whose resolver talks to the mock vendor.
    pub async fn start() -> Self {
        let vendor = MockServer::start().await;
        let config = OpenRouterConfig {
            api_key: "test-key".into(),
            base_url: vendor.uri(),
            model: "meta-llama/llama-3-8b-instruct:free".into(),
            referer: "https://mirmag.app".into(),
            timeout_secs: 2,
        };
        let state = AppState::new(Arc::new(OpenRouterClient::new(config)));
        let router = build_router(state);

        Self { vendor, router }
    }

    /// Mount a successful chat completion whose assistant content is `content`.
    pub async fn mount_completion(&self, content: &str) {
        let body = serde_json::json!({
            "id": "gen-e2e",
            "model": "meta-llama/llama-3-8b-instruct:free",
            "choices": [{
                "message": { "role": "assistant", "content": content }
            }]
        });
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&self.vendor)
            .await;
    }

    /// Mount a vendor failure with the given HTTP status.
    pub async fn mount_failure(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(status).set_body_string("upstream error"))
            .mount(&self.vendor)
            .await;
    }

    /// POST /api/v1/analyze. Returns (HTTP status code, response JSON body).
    pub async fn analyze(&self, situation: &str) -> (StatusCode, serde_json::Value) {
        let body = serde_json::json!({ "situation": situation });
        let response = self
            .router
            .clone()
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

    /// GET an arbitrary path. Returns (HTTP status code, response JSON body).
    pub async fn get(&self, url: &str) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(Request::get(url).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    /// How many requests the mock vendor has received.
    pub async fn vendor_hits(&self) -> usize {
        self.vendor
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }
}
