//! Server crate for the trip-planner system.
//!
//! This crate contains the host orchestrator that fans a travel request
//! out to the recommendation agents and merges their results into a
//! single envelope.

pub mod orchestrator;

pub use orchestrator::HostOrchestrator;
