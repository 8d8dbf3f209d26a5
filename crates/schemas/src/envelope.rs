//! The merged envelope returned by the host orchestrator.
//!
//! Invariant: all three category slots are always populated. A failed or
//! malformed category degrades to a human-readable placeholder string,
//! never to an absent key.

use crate::category::Category;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The host orchestrator's unified output.
///
/// Each category slot holds either a list of recommendation records, a
/// passthrough string (unparsed model output), or a placeholder
/// sentence. `errors` lists per-agent diagnostics and is serialized only
/// when at least one agent failed; `error` is set only when the
/// orchestration itself faulted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripPlan {
    pub flights: Value,
    pub stay: Value,
    pub activities: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TripPlan {
    /// Build the fully degraded envelope used when the fan-out mechanism
    /// itself faulted: every slot carries its degraded placeholder and
    /// the cause is surfaced in the top-level `error` field.
    pub fn degraded(cause: impl Into<String>) -> Self {
        TripPlan {
            flights: Value::String(Category::Flight.degraded_placeholder().to_string()),
            stay: Value::String(Category::Stay.degraded_placeholder().to_string()),
            activities: Value::String(Category::Activities.degraded_placeholder().to_string()),
            errors: None,
            error: Some(cause.into()),
        }
    }

    /// Borrow the slot for a category.
    pub fn slot(&self, category: Category) -> &Value {
        match category {
            Category::Flight => &self.flights,
            Category::Stay => &self.stay,
            Category::Activities => &self.activities,
        }
    }

    /// Mutably borrow the slot for a category.
    pub fn slot_mut(&mut self, category: Category) -> &mut Value {
        match category {
            Category::Flight => &mut self.flights,
            Category::Stay => &mut self.stay,
            Category::Activities => &mut self.activities,
        }
    }
}
