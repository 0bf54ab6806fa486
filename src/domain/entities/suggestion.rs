//! AI generated product concept.

use serde::{Deserialize, Serialize};

/// Product concept proposed by the suggestion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiSuggestion {
    /// Concept name; becomes the product name on creation.
    pub name: String,
    /// Predicted market score, 0 to 100.
    #[serde(with = "crate::domain::serde_utils::score")]
    pub score: u8,
    /// One-line pitch.
    #[serde(default)]
    pub description: String,
}

impl AiSuggestion {
    /// Creates a suggestion, clamping the score to 100.
    #[must_use]
    pub fn new(name: impl Into<String>, score: u8, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: score.min(crate::domain::entities::MAX_SCORE),
            description: description.into(),
        }
    }
}
