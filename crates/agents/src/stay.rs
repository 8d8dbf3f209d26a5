//! Stay Agent
//!
//! Recommends 2-3 accommodation options for a travel request, shaped
//! under the `stays` key.

use crate::normalize::extract_json;
use crate::shaping::shape_payload;
use anyhow::Result;
use async_trait::async_trait;
use llm::LlmClient;
use schemas::{Category, Recommend, TravelRequest};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

/// LLM-backed accommodation recommendation agent.
pub struct StayAgent {
    llm: Arc<dyn LlmClient>,
}

impl StayAgent {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    fn prompt(&self, request: &TravelRequest) -> String {
        format!(
            "User is staying in {} from {} to {}, with a total trip budget of ${}. \
             Suggest 2-3 hotel options, each with name, location, rating, price per night, \
             and amenities. Respond with valid JSON only, using the key 'stays' with a list. \
             Format: {{\"stays\": [{{\"name\": \"...\", \"location\": \"...\", \"rating\": ..., \
             \"price_per_night\": ..., \"amenities\": [...]}}]}} \
             Do not include any text before or after the JSON.",
            request.destination, request.start_date, request.end_date, request.budget
        )
    }
}

#[async_trait]
impl Recommend for StayAgent {
    fn category(&self) -> Category {
        Category::Stay
    }

    #[instrument(skip(self, request), fields(destination = %request.destination))]
    async fn recommend(&self, request: &TravelRequest) -> Result<Value> {
        let text = self.llm.generate(&self.prompt(request)).await?;
        debug!("Stay agent received {} chars of model output", text.len());

        let normalized = extract_json(&text);
        Ok(shape_payload(Category::Stay, &normalized, &text))
    }
}
