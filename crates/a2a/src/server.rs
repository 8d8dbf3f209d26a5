//! Server side of the A2A protocol.
//!
//! Wraps any [`Recommend`] implementation in the standard two-route
//! service surface. The handler validates the request at the boundary
//! (the orchestrator downstream does not re-check it) and converts
//! agent failures into a 502 with a JSON error body rather than letting
//! them surface as a bare 500.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use schemas::{Recommend, TravelRequest};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Build the A2A service router for an agent.
pub fn create_app(agent: Arc<dyn Recommend>) -> Router {
    Router::new()
        .route("/run", post(run))
        .route("/health", get(health))
        .with_state(agent)
}

/// Bind the agent's service surface to a listener and run it.
pub async fn serve(
    listener: tokio::net::TcpListener,
    agent: Arc<dyn Recommend>,
) -> anyhow::Result<()> {
    let category = agent.category();
    info!(
        "Serving {} agent on {}",
        category,
        listener.local_addr()?
    );
    axum::serve(listener, create_app(agent)).await?;
    Ok(())
}

/// Standard A2A protocol endpoint.
async fn run(
    State(agent): State<Arc<dyn Recommend>>,
    Json(request): Json<TravelRequest>,
) -> impl IntoResponse {
    if let Err(e) = request.validate() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": e.to_string() })),
        );
    }

    match agent.recommend(&request).await {
        Ok(payload) => (StatusCode::OK, Json(payload)),
        Err(e) => {
            warn!("{} agent failed: {e:#}", agent.category());
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": e.to_string() })),
            )
        }
    }
}

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{A2aError, AgentEndpoint, RemoteAgent};
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use schemas::Category;
    use serde_json::Value;
    use std::time::Duration;

    // ========================================================================
    // Test Fixtures
    // ========================================================================

    /// Stub agent with scripted behavior, standing in for an LLM-backed one.
    struct StubAgent {
        category: Category,
        behavior: Behavior,
    }

    enum Behavior {
        Reply(Value),
        Fail(String),
        Sleep(Duration),
    }

    #[async_trait]
    impl Recommend for StubAgent {
        fn category(&self) -> Category {
            self.category
        }

        async fn recommend(&self, _request: &TravelRequest) -> Result<Value> {
            match &self.behavior {
                Behavior::Reply(value) => Ok(value.clone()),
                Behavior::Fail(cause) => Err(anyhow!("{cause}")),
                Behavior::Sleep(duration) => {
                    tokio::time::sleep(*duration).await;
                    Ok(json!({"flights": []}))
                }
            }
        }
    }

    fn sample_request() -> TravelRequest {
        TravelRequest {
            origin: "New York".to_string(),
            destination: "Paris".to_string(),
            start_date: "2025-06-01".to_string(),
            end_date: "2025-06-07".to_string(),
            budget: 2000.0,
        }
    }

    /// Bind an agent service to a random port and return its /run URL.
    async fn start_agent_service(agent: StubAgent) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind agent service");
        let addr = listener.local_addr().expect("Failed to get local address");
        let app = create_app(Arc::new(agent));

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Agent service failed");
        });

        format!("http://{}/run", addr)
    }

    // ========================================================================
    // Round-trip over a real socket
    // ========================================================================

    #[tokio::test]
    async fn test_successful_call_round_trips_payload() {
        let url = start_agent_service(StubAgent {
            category: Category::Flight,
            behavior: Behavior::Reply(json!({"flights": [{"airline": "Delta"}]})),
        })
        .await;

        let endpoint = AgentEndpoint::new(&url);
        let payload = endpoint.call(&sample_request()).await.expect("call should succeed");
        assert_eq!(payload, json!({"flights": [{"airline": "Delta"}]}));
    }

    #[tokio::test]
    async fn test_agent_failure_surfaces_as_status_error() {
        let url = start_agent_service(StubAgent {
            category: Category::Stay,
            behavior: Behavior::Fail("model unavailable".to_string()),
        })
        .await;

        let endpoint = AgentEndpoint::new(&url);
        let err = endpoint.call(&sample_request()).await.expect_err("should fail");
        match err {
            A2aError::Status { status, .. } => assert_eq!(status, 502),
            other => panic!("Expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_slow_agent_times_out() {
        let url = start_agent_service(StubAgent {
            category: Category::Activities,
            behavior: Behavior::Sleep(Duration::from_secs(5)),
        })
        .await;

        let endpoint = AgentEndpoint::new(&url).with_timeout(Duration::from_millis(100));
        let err = endpoint.call(&sample_request()).await.expect_err("should time out");
        assert!(matches!(err, A2aError::Timeout { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_unreachable_agent_is_a_connect_error() {
        // Bind-then-drop to get a port nothing is listening on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoint = AgentEndpoint::new(format!("http://{}/run", addr));
        let err = endpoint.call(&sample_request()).await.expect_err("should fail");
        assert!(matches!(err, A2aError::Connect { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_invalid_request_is_rejected_at_boundary() {
        let url = start_agent_service(StubAgent {
            category: Category::Flight,
            behavior: Behavior::Reply(json!({"flights": []})),
        })
        .await;

        let mut request = sample_request();
        request.budget = -5.0;

        let endpoint = AgentEndpoint::new(&url);
        let err = endpoint.call(&request).await.expect_err("should be rejected");
        match err {
            A2aError::Status { status, .. } => assert_eq!(status, 422),
            other => panic!("Expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_health_probe_reports_healthy() {
        let run_url = start_agent_service(StubAgent {
            category: Category::Flight,
            behavior: Behavior::Reply(json!({"flights": []})),
        })
        .await;
        let health_url = run_url.replace("/run", "/health");

        let body: Value = reqwest::get(&health_url)
            .await
            .expect("health call should succeed")
            .json()
            .await
            .expect("health body should be JSON");
        assert_eq!(body, json!({"status": "healthy"}));
    }

    #[tokio::test]
    async fn test_remote_agent_implements_recommend() {
        let url = start_agent_service(StubAgent {
            category: Category::Stay,
            behavior: Behavior::Reply(json!({"stays": [{"name": "Le Citizen"}]})),
        })
        .await;

        let agent = RemoteAgent::new(Category::Stay, AgentEndpoint::new(&url));
        assert_eq!(agent.category(), Category::Stay);

        let payload = agent.recommend(&sample_request()).await.expect("should succeed");
        assert_eq!(payload["stays"][0]["name"], "Le Citizen");
    }
}
