//! The travel request every agent receives.
//!
//! Mirrors the wire shape of the A2A protocol: a single JSON object with
//! origin, destination, ISO-8601 dates, and a total budget. Constructed
//! once per top-level call and never mutated afterwards.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

fn default_origin() -> String {
    "New York".to_string()
}

/// A single travel-planning request.
///
/// `origin` is optional on the wire and defaults to "New York".
/// Validation is a boundary concern: agents and the orchestrator assume
/// [`TravelRequest::validate`] has already been called by whoever
/// deserialized the request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TravelRequest {
    #[serde(default = "default_origin")]
    pub origin: String,
    pub destination: String,
    /// ISO-8601 calendar date, e.g. "2025-06-01"
    pub start_date: String,
    /// ISO-8601 calendar date; must not precede `start_date`
    pub end_date: String,
    pub budget: f64,
}

impl TravelRequest {
    /// Check the boundary invariants: non-empty destination, positive
    /// budget, and `end_date >= start_date`.
    ///
    /// ISO-8601 dates compare correctly as strings, so no date parsing
    /// is needed here.
    pub fn validate(&self) -> Result<()> {
        if self.destination.trim().is_empty() {
            bail!("destination must not be empty");
        }
        if self.budget <= 0.0 {
            bail!("budget must be positive, got {}", self.budget);
        }
        if self.end_date < self.start_date {
            bail!(
                "end_date {} precedes start_date {}",
                self.end_date,
                self.start_date
            );
        }
        Ok(())
    }
}
