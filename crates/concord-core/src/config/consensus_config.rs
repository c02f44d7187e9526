use serde::{Deserialize, Serialize};

use super::defaults;

/// Consensus engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusConfig {
    /// Similarity at or above which two statements are merged into one cluster.
    pub similarity_threshold: f64,
    /// Consensus percentage for the `Accepted` status.
    pub accepted_threshold: f64,
    /// Consensus percentage for the `Proposed` status.
    pub proposed_threshold: f64,
    /// Fewest valid statements before a module leaves `InsufficientData`.
    pub min_statements: usize,
    /// Expected embedding length. When unset, the first usable embedding
    /// of each batch fixes the length.
    pub embedding_dimensions: Option<usize>,
}

impl Default for ConsensusConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            accepted_threshold: defaults::DEFAULT_ACCEPTED_THRESHOLD,
            proposed_threshold: defaults::DEFAULT_PROPOSED_THRESHOLD,
            min_statements: defaults::DEFAULT_MIN_STATEMENTS,
            embedding_dimensions: None,
        }
    }
}
