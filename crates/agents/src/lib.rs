//! # Agents Crate
//!
//! The three recommendation agents and the defensive parsing that makes
//! their LLM-backed output safe to aggregate.
//!
//! ## Components
//!
//! ### Response Normalizer
//! Best-effort extraction of a JSON value from untrusted model text:
//! fenced markdown blocks, bare JSON, or plain prose all come back as
//! *something*. Normalization never fails.
//!
//! ### Flight / Stay / Activity Agents
//! Each agent owns a prompt for its category, calls the shared
//! [`LlmClient`](llm::LlmClient) boundary, and shapes whatever comes
//! back into `{category_key: ...}` so the host orchestrator sees one
//! consistent surface regardless of how the model behaved.
//!
//! ## Failure posture
//!
//! Only the LLM call itself can error out of an agent. Malformed model
//! output is not a failure: it degrades to a passthrough string under
//! the category key, and the orchestrator decides how to present it.

pub mod activity;
pub mod flight;
pub mod normalize;
pub mod shaping;
pub mod stay;

// Re-export commonly used types
pub use activity::ActivityAgent;
pub use flight::FlightAgent;
pub use normalize::{extract_json, normalize};
pub use stay::StayAgent;
