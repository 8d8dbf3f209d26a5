//! # LLM Crate
//!
//! The opaque language-model boundary: given a prompt, return text that
//! purportedly contains JSON. Nothing downstream trusts that claim;
//! normalization and shaping live in the `agents` crate.
//!
//! ## Components
//!
//! - [`LlmClient`]: the single-method trait agents call through
//! - [`GeminiClient`]: Google Gemini REST implementation
//! - [`CannedLlm`]: deterministic offline client for demos and tests
//!
//! Every call is stateless: no conversation history is kept between
//! requests, so concurrent calls never share mutable state.

pub mod canned;
pub mod gemini;

use anyhow::Result;
use async_trait::async_trait;

pub use canned::CannedLlm;
pub use gemini::GeminiClient;

/// A text-in, text-out language-model call.
///
/// Implementations must be safe to share across concurrent requests
/// (`Send + Sync`); the underlying HTTP client pool is the only shared
/// resource and is reentrant.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate a completion for the prompt.
    ///
    /// Returns the raw model text. Callers must assume the text may be
    /// prose, fenced markdown, or invalid JSON.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
