//! End-to-end test: three real agent services over real sockets.
//!
//! Spins up the flight, stay, and activity agents as A2A HTTP services
//! (canned LLM, random ports), points the host orchestrator at them via
//! remote agents, and plans a trip exactly the way the deployed system
//! does.

use std::sync::Arc;
use std::time::Duration;

use a2a::{AgentEndpoint, RemoteAgent, create_app};
use agents::{ActivityAgent, FlightAgent, StayAgent};
use llm::CannedLlm;
use schemas::{Category, Recommend, TravelRequest};
use server::HostOrchestrator;

fn sample_request() -> TravelRequest {
    TravelRequest {
        origin: "New York".to_string(),
        destination: "Paris".to_string(),
        start_date: "2025-06-01".to_string(),
        end_date: "2025-06-07".to_string(),
        budget: 2000.0,
    }
}

/// Start one agent as an HTTP service on a random port, return its /run URL.
async fn start_agent_service(agent: Arc<dyn Recommend>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind agent service");
    let addr = listener.local_addr().expect("Failed to get local address");
    let app = create_app(agent);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Agent service failed");
    });

    format!("http://{}/run", addr)
}

/// Start all three canned-LLM agents and return their URLs in category order.
async fn start_all_agents() -> (String, String, String) {
    let flight = start_agent_service(Arc::new(FlightAgent::new(Arc::new(
        CannedLlm::for_category(Category::Flight),
    ))))
    .await;
    let stay = start_agent_service(Arc::new(StayAgent::new(Arc::new(
        CannedLlm::for_category(Category::Stay),
    ))))
    .await;
    let activities = start_agent_service(Arc::new(ActivityAgent::new(Arc::new(
        CannedLlm::for_category(Category::Activities),
    ))))
    .await;
    (flight, stay, activities)
}

fn remote(category: Category, url: &str) -> Arc<dyn Recommend> {
    Arc::new(RemoteAgent::new(category, AgentEndpoint::new(url)))
}

#[tokio::test]
async fn test_full_plan_over_real_services() {
    let (flight_url, stay_url, activities_url) = start_all_agents().await;

    let orchestrator = HostOrchestrator::new(vec![
        remote(Category::Flight, &flight_url),
        remote(Category::Stay, &stay_url),
        remote(Category::Activities, &activities_url),
    ]);

    let plan = orchestrator.plan(&sample_request()).await;

    // Every slot carries the list its agent produced. The canned stay
    // reply is fenced markdown, so this also proves normalization holds
    // across the HTTP boundary.
    let flights = plan.flights.as_array().expect("flights should be a list");
    assert_eq!(flights[0]["airline"], "Delta");

    let stays = plan.stay.as_array().expect("stay should be a list");
    assert_eq!(stays[0]["name"], "Hotel Saint-Marc");

    let activities = plan.activities.as_array().expect("activities should be a list");
    assert_eq!(activities[0]["name"], "Louvre Museum");

    assert!(plan.errors.is_none());
    assert!(plan.error.is_none());
}

#[tokio::test]
async fn test_unreachable_service_degrades_only_its_slot() {
    let (flight_url, _stay_url, activities_url) = start_all_agents().await;

    // Bind-then-drop to get a port nothing is listening on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = listener.local_addr().unwrap();
    drop(listener);
    let dead_stay_url = format!("http://{}/run", dead_addr);

    let orchestrator = HostOrchestrator::new(vec![
        remote(Category::Flight, &flight_url),
        remote(Category::Stay, &dead_stay_url),
        remote(Category::Activities, &activities_url),
    ]);

    let plan = orchestrator.plan(&sample_request()).await;

    assert!(plan.flights.is_array());
    assert!(plan.activities.is_array());
    assert_eq!(plan.stay, serde_json::json!("No stay options returned."));

    let errors = plan.errors.expect("the dead stay service must be reported");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Stay agent error:"), "got {}", errors[0]);
}

#[tokio::test]
async fn test_slow_service_is_cut_off_by_dispatch_timeout() {
    /// An agent that never answers, behind a real HTTP service.
    struct HangingAgent;

    #[async_trait::async_trait]
    impl Recommend for HangingAgent {
        fn category(&self) -> Category {
            Category::Activities
        }

        async fn recommend(&self, _request: &TravelRequest) -> anyhow::Result<serde_json::Value> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            unreachable!()
        }
    }

    let (flight_url, stay_url, _activities_url) = start_all_agents().await;
    let hanging_url = start_agent_service(Arc::new(HangingAgent)).await;

    let orchestrator = HostOrchestrator::new(vec![
        remote(Category::Flight, &flight_url),
        remote(Category::Stay, &stay_url),
        remote(Category::Activities, &hanging_url),
    ])
    .with_call_timeout(Duration::from_millis(200));

    let plan = orchestrator.plan(&sample_request()).await;

    assert!(plan.flights.is_array());
    assert!(plan.stay.is_array());
    assert_eq!(plan.activities, serde_json::json!("No activities found."));

    let errors = plan.errors.expect("the hung service must be reported");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("timed out"), "got {}", errors[0]);
}
