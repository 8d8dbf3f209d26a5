//! The capability interface agents implement, and the result type the
//! dispatcher collects.
//!
//! ## Design Note
//! The dispatcher is generic over [`Recommend`], not over concrete agent
//! types: a local LLM-backed agent and a remote HTTP-backed agent look
//! identical to the orchestrator. `Send + Sync` lets implementations be
//! shared across spawned tasks behind an `Arc`.

use crate::category::Category;
use crate::request::TravelRequest;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// A single-method capability: given a travel request, produce a
/// best-effort recommendation payload.
///
/// Implementations must not panic on malformed upstream output; the
/// only error channel is the returned `Result`, and it is reserved for
/// genuine faults (transport failure, LLM call failure). "The model
/// answered with prose instead of JSON" is not an error.
#[async_trait]
pub trait Recommend: Send + Sync {
    /// The category this agent serves (used for envelope slotting and
    /// error labels).
    fn category(&self) -> Category;

    /// Produce a recommendation payload for the request.
    ///
    /// A well-behaved payload is an object keyed by the category's
    /// payload key, but callers must tolerate any JSON value.
    async fn recommend(&self, request: &TravelRequest) -> Result<Value>;
}

/// Outcome of one dispatched agent call.
///
/// Created fresh per dispatch, never persisted, never shared across
/// requests. A `Failure` carries a human-readable cause (timeout,
/// connection failure, non-2xx status) rather than a structured error:
/// by the time a fault reaches the envelope it is data, not an
/// exception.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceResult {
    Success(Value),
    Failure(String),
}

impl ServiceResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, ServiceResult::Failure(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_service_result_failure_predicate() {
        assert!(ServiceResult::Failure("timed out".to_string()).is_failure());
        assert!(!ServiceResult::Success(json!({"flights": []})).is_failure());
    }
}
