use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SELF_CONFIDENCE, MIN_SELF_CONFIDENCE};

/// Self-reported confidence clamped to [1, 5].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct SelfConfidence(u8);

impl SelfConfidence {
    /// Create a new SelfConfidence, clamping to [1, 5].
    pub fn new(value: u8) -> Self {
        Self(value.clamp(MIN_SELF_CONFIDENCE, MAX_SELF_CONFIDENCE))
    }

    /// Get the raw value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for SelfConfidence {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<SelfConfidence> for u8 {
    fn from(c: SelfConfidence) -> Self {
        c.0
    }
}

impl fmt::Display for SelfConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SELF_CONFIDENCE)
    }
}

/// One team member's recorded understanding of a module.
///
/// `embedding: None` means "never embedded" and is kept distinct from a
/// zero vector in every serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub id: String,
    pub module_id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<SelfConfidence>,
    /// Serializes losslessly only when every component is finite: JSON has
    /// no NaN or infinity, so such values are written as `null` and fail to
    /// read back. Ingestion never stores non-finite embeddings.
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Statement {
    /// A statement with no embedding, confidence, or author, stamped now.
    pub fn new(
        id: impl Into<String>,
        module_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            module_id: module_id.into(),
            content: content.into(),
            confidence: None,
            embedding: None,
            author: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    pub fn with_confidence(mut self, confidence: u8) -> Self {
        self.confidence = Some(SelfConfidence::new(confidence));
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Whether an embedding is attached at all (usable or not).
    pub fn has_embedding(&self) -> bool {
        self.embedding.is_some()
    }
}
