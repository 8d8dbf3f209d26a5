//! Activity Agent
//!
//! Recommends 2-3 tourist activities for a travel request, shaped under
//! the `activities` key.

use crate::normalize::extract_json;
use crate::shaping::shape_payload;
use anyhow::Result;
use async_trait::async_trait;
use llm::LlmClient;
use schemas::{Category, Recommend, TravelRequest};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

/// LLM-backed activity recommendation agent.
pub struct ActivityAgent {
    llm: Arc<dyn LlmClient>,
}

impl ActivityAgent {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    fn prompt(&self, request: &TravelRequest) -> String {
        format!(
            "User is visiting {} from {} to {}, with a total trip budget of ${}. \
             Suggest 2-3 tourist activities, each with name, description, price, and \
             duration in hours. Respond with valid JSON only, using the key 'activities' \
             with a list. Format: {{\"activities\": [{{\"name\": \"...\", \
             \"description\": \"...\", \"price\": ..., \"duration_hours\": ...}}]}} \
             Do not include any text before or after the JSON.",
            request.destination, request.start_date, request.end_date, request.budget
        )
    }
}

#[async_trait]
impl Recommend for ActivityAgent {
    fn category(&self) -> Category {
        Category::Activities
    }

    #[instrument(skip(self, request), fields(destination = %request.destination))]
    async fn recommend(&self, request: &TravelRequest) -> Result<Value> {
        let text = self.llm.generate(&self.prompt(request)).await?;
        debug!(
            "Activities agent received {} chars of model output",
            text.len()
        );

        let normalized = extract_json(&text);
        Ok(shape_payload(Category::Activities, &normalized, &text))
    }
}
