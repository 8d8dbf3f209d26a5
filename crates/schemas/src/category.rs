//! The three recommendation domains.
//!
//! Each category knows every string the rest of the system needs for it:
//! the JSON key an agent's payload carries, the slot name in the merged
//! envelope, the human-readable placeholders, and the label used in
//! error diagnostics. Centralizing these here keeps the orchestrator's
//! merge step free of per-category special cases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three recommendation domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Flight,
    Stay,
    Activities,
}

impl Category {
    /// All categories in envelope order: flights, stay, activities.
    pub const ALL: [Category; 3] = [Category::Flight, Category::Stay, Category::Activities];

    /// The key a well-formed agent payload carries, e.g. `{"flights": [...]}`.
    pub fn payload_key(&self) -> &'static str {
        match self {
            Category::Flight => "flights",
            Category::Stay => "stays",
            Category::Activities => "activities",
        }
    }

    /// The slot name in the merged envelope.
    ///
    /// Note the asymmetry for stays: agents respond with `"stays"` but
    /// the envelope slot is `"stay"` (wire compatibility with the
    /// original protocol).
    pub fn envelope_key(&self) -> &'static str {
        match self {
            Category::Flight => "flights",
            Category::Stay => "stay",
            Category::Activities => "activities",
        }
    }

    /// Placeholder shown when an agent succeeded but returned nothing
    /// usable for this category.
    pub fn empty_placeholder(&self) -> &'static str {
        match self {
            Category::Flight => "No flights returned.",
            Category::Stay => "No stay options returned.",
            Category::Activities => "No activities found.",
        }
    }

    /// Placeholder used when the whole orchestration degraded.
    pub fn degraded_placeholder(&self) -> &'static str {
        match self {
            Category::Flight => "Error retrieving flights",
            Category::Stay => "Error retrieving stays",
            Category::Activities => "Error retrieving activities",
        }
    }

    /// Label used when reporting a failed agent in the `errors` list.
    pub fn agent_label(&self) -> &'static str {
        match self {
            Category::Flight => "Flight agent",
            Category::Stay => "Stay agent",
            Category::Activities => "Activities agent",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.envelope_key())
    }
}
