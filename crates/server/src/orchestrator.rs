//! # Host Orchestrator
//!
//! Coordinates one travel-planning request end to end:
//! 1. Dispatch the request to every agent concurrently
//! 2. Collect one result per agent, in agent order, never aborting
//!    siblings on failure
//! 3. Normalize each successful payload
//! 4. Merge everything into a [`TripPlan`] with per-agent diagnostics
//!
//! ## Failure posture
//!
//! Two tiers of defense:
//! - per call: a transport fault or timeout becomes a
//!   [`ServiceResult::Failure`] in that agent's slot and one entry in
//!   the envelope's `errors` list;
//! - whole orchestration: if the fan-out mechanism itself faults (a
//!   panicked task), [`HostOrchestrator::plan`] returns the fully
//!   degraded envelope instead of raising.
//!
//! `plan` never returns an error to its caller.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use futures::future::join_all;
use serde_json::Value;
use tracing::{info, instrument, warn};

use agents::normalize;
use schemas::{Category, Recommend, ServiceResult, TravelRequest, TripPlan};

/// Default per-call ceiling for agent dispatch.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(60);

/// Coordinates the parallel dispatch and merge for one request at a time.
///
/// Holds no per-request state: the same orchestrator can serve any
/// number of concurrent requests, and each dispatch owns its own
/// request/response lifecycle.
pub struct HostOrchestrator {
    agents: Vec<Arc<dyn Recommend>>,
    call_timeout: Duration,
}

impl HostOrchestrator {
    /// Create an orchestrator over a fixed set of agents.
    ///
    /// Agent order is the result order: `dispatch` returns one
    /// [`ServiceResult`] per agent at the same position, regardless of
    /// completion timing.
    pub fn new(agents: Vec<Arc<dyn Recommend>>) -> Self {
        Self {
            agents,
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Configure the per-call timeout (default: 60 seconds).
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    /// Main entry point: plan a trip.
    ///
    /// Always returns a syntactically complete envelope: all three
    /// category slots populated, `errors` present only when at least
    /// one agent failed, `error` present only when the orchestration
    /// itself faulted.
    #[instrument(skip(self, request), fields(destination = %request.destination))]
    pub async fn plan(&self, request: &TravelRequest) -> TripPlan {
        let start_time = Instant::now();
        info!(
            "Dispatching request to {} agents: {} -> {}",
            self.agents.len(),
            request.origin,
            request.destination
        );

        let plan = match self.dispatch(request).await {
            Ok(results) => self.merge(results),
            Err(e) => {
                warn!("Orchestration fault: {e:#}");
                TripPlan::degraded(format!("Error in host agent orchestration: {e:#}"))
            }
        };

        if let Some(errors) = &plan.errors {
            warn!("{} agent(s) failed", errors.len());
        }
        info!("Planned trip in {:.2?}", start_time.elapsed());
        plan
    }

    /// Dispatch the request to every agent concurrently.
    ///
    /// Each call runs in its own spawned task, wrapped in a timeout and
    /// error capture, so one slow or broken agent never blocks or
    /// corrupts the others' results. A single attempt per agent: no
    /// retries at this layer.
    ///
    /// The only way this returns `Err` is a panicked task: a fault in
    /// the fan-out mechanism itself, not a per-call failure.
    pub async fn dispatch(&self, request: &TravelRequest) -> Result<Vec<ServiceResult>> {
        let handles: Vec<_> = self
            .agents
            .iter()
            .map(|agent| {
                let agent = Arc::clone(agent);
                let request = request.clone();
                let call_timeout = self.call_timeout;

                tokio::spawn(async move {
                    match tokio::time::timeout(call_timeout, agent.recommend(&request)).await {
                        Ok(Ok(payload)) => ServiceResult::Success(payload),
                        Ok(Err(e)) => ServiceResult::Failure(format!("{e:#}")),
                        // The in-flight call is abandoned, not aborted
                        Err(_) => ServiceResult::Failure(format!(
                            "timed out after {:?}",
                            call_timeout
                        )),
                    }
                })
            })
            .collect();

        // join_all preserves input order, so results stay positional
        let outcomes = join_all(handles).await;

        let mut results = Vec::with_capacity(outcomes.len());
        for (agent, outcome) in self.agents.iter().zip(outcomes) {
            let result = outcome
                .with_context(|| format!("{} task panicked", agent.category().agent_label()))?;
            results.push(result);
        }
        Ok(results)
    }

    /// Merge positional results into the envelope.
    ///
    /// Every slot starts at its empty placeholder, so the envelope is
    /// complete no matter how many agents failed or what they returned.
    fn merge(&self, results: Vec<ServiceResult>) -> TripPlan {
        let mut plan = TripPlan {
            flights: placeholder(Category::Flight),
            stay: placeholder(Category::Stay),
            activities: placeholder(Category::Activities),
            errors: None,
            error: None,
        };
        let mut errors = Vec::new();

        for (agent, result) in self.agents.iter().zip(results) {
            let category = agent.category();
            match result {
                ServiceResult::Success(payload) => {
                    let normalized = normalize(payload);
                    // Extract the recognized key when the payload is an
                    // object that carries it; otherwise the slot keeps
                    // its placeholder.
                    match normalized.get(category.payload_key()) {
                        Some(records) => *plan.slot_mut(category) = records.clone(),
                        None => info!(
                            "{} payload lacked the '{}' key, using placeholder",
                            category.agent_label(),
                            category.payload_key()
                        ),
                    }
                }
                ServiceResult::Failure(cause) => {
                    let message = format!("{} error: {}", category.agent_label(), cause);
                    warn!("{message}");
                    errors.push(message);
                }
            }
        }

        if !errors.is_empty() {
            plan.errors = Some(errors);
        }
        plan
    }
}

fn placeholder(category: Category) -> Value {
    Value::String(category.empty_placeholder().to_string())
}
