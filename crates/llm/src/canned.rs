//! Deterministic offline LLM.
//!
//! Used by the `plan --simulate` mode and by tests that need an agent
//! without network access or an API key. The stay sample is wrapped in
//! a markdown fence on purpose: real models do this constantly, and the
//! offline path should exercise the same normalization as the live one.

use crate::LlmClient;
use anyhow::Result;
use async_trait::async_trait;
use schemas::Category;

/// An [`LlmClient`] that always returns the same text.
pub struct CannedLlm {
    response: String,
}

impl CannedLlm {
    /// Use an arbitrary canned response.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }

    /// A realistic sample response for a category, in the shape the
    /// live prompts ask for.
    pub fn for_category(category: Category) -> Self {
        let response = match category {
            Category::Flight => {
                r#"{"flights": [
                    {"airline": "Delta", "departure_time": "08:30", "arrival_time": "21:45", "duration": "7h 15m", "price": 620.0},
                    {"airline": "Air France", "departure_time": "18:10", "arrival_time": "07:25", "duration": "7h 15m", "price": 710.0}
                ]}"#
                    .to_string()
            }
            // Fenced on purpose: exercises the normalizer
            Category::Stay => {
                "Here are some options:\n```json\n{\"stays\": [\n  {\"name\": \"Hotel Saint-Marc\", \"location\": \"2nd arrondissement\", \"rating\": 4.5, \"price_per_night\": 180.0, \"amenities\": [\"wifi\", \"breakfast\"]},\n  {\"name\": \"Le Citizen\", \"location\": \"Canal Saint-Martin\", \"rating\": 4.2, \"price_per_night\": 140.0, \"amenities\": [\"wifi\"]}\n]}\n```"
                    .to_string()
            }
            Category::Activities => {
                r#"{"activities": [
                    {"name": "Louvre Museum", "description": "World's largest art museum", "price": 22.0, "duration_hours": 4},
                    {"name": "Seine river cruise", "description": "Evening cruise past the Eiffel Tower", "price": 18.0, "duration_hours": 1}
                ]}"#
                    .to_string()
            }
        };
        Self { response }
    }
}

#[async_trait]
impl LlmClient for CannedLlm {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Ok(self.response.clone())
    }
}
