//! Flight Agent
//!
//! Recommends 2-3 flight options for a travel request. The prompt asks
//! the model for strict JSON under the `flights` key; the reply is
//! normalized and shaped anyway, because the model only *usually*
//! complies.

use crate::normalize::extract_json;
use crate::shaping::shape_payload;
use anyhow::Result;
use async_trait::async_trait;
use llm::LlmClient;
use schemas::{Category, Recommend, TravelRequest};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

/// LLM-backed flight recommendation agent.
pub struct FlightAgent {
    llm: Arc<dyn LlmClient>,
}

impl FlightAgent {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    fn prompt(&self, request: &TravelRequest) -> String {
        format!(
            "User is flying from {} to {} from {} to {}, with a total trip budget of ${}. \
             Suggest 2-3 flights, each with airline, departure time, arrival time, duration, \
             and price. Respond with valid JSON only, using the key 'flights' with a list. \
             Format: {{\"flights\": [{{\"airline\": \"...\", \"departure_time\": \"...\", \
             \"arrival_time\": \"...\", \"duration\": \"...\", \"price\": ...}}]}} \
             Do not include any text before or after the JSON.",
            request.origin, request.destination, request.start_date, request.end_date,
            request.budget
        )
    }
}

#[async_trait]
impl Recommend for FlightAgent {
    fn category(&self) -> Category {
        Category::Flight
    }

    #[instrument(skip(self, request), fields(destination = %request.destination))]
    async fn recommend(&self, request: &TravelRequest) -> Result<Value> {
        let text = self.llm.generate(&self.prompt(request)).await?;
        debug!("Flight agent received {} chars of model output", text.len());

        let normalized = extract_json(&text);
        Ok(shape_payload(Category::Flight, &normalized, &text))
    }
}
