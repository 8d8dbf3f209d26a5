//! # A2A Crate
//!
//! Agent-to-agent transport: how the host orchestrator talks to the
//! three recommendation services, and how any agent is exposed as an
//! HTTP service.
//!
//! ## Protocol
//!
//! Each agent service exposes two routes:
//! - `POST /run`: body is a [`TravelRequest`](schemas::TravelRequest),
//!   response is the agent's JSON payload
//! - `GET /health`: trivial liveness probe, `{"status": "healthy"}`
//!
//! ## Components
//!
//! - [`AgentEndpoint`]: client for one remote agent, with a per-call
//!   timeout and typed transport errors
//! - [`RemoteAgent`]: the host-side view of a remote agent. Implements
//!   [`Recommend`](schemas::Recommend) so the dispatcher can't tell it
//!   apart from a local one
//! - [`create_app`] / [`serve`]: wrap any agent in the service surface

pub mod client;
pub mod server;

// Re-export commonly used types
pub use client::{A2aError, AgentEndpoint, RemoteAgent};
pub use server::{create_app, serve};
