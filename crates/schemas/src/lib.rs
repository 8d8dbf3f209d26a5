//! # Schemas Crate
//!
//! Shared domain types for the trip-planner system.
//!
//! ## Components
//!
//! - [`TravelRequest`]: the immutable input every agent receives
//! - [`Category`]: the three recommendation domains (flights, stays, activities)
//! - [`ServiceResult`]: the outcome of one downstream agent call
//! - [`TripPlan`]: the merged envelope the host orchestrator returns
//! - [`Recommend`]: the single-method capability every agent implements
//!
//! Every other crate in the workspace depends on this one; it has no
//! knowledge of transports, LLMs, or orchestration.

pub mod category;
pub mod envelope;
pub mod recommend;
pub mod request;

// Re-export commonly used types
pub use category::Category;
pub use envelope::TripPlan;
pub use recommend::{Recommend, ServiceResult};
pub use request::TravelRequest;
