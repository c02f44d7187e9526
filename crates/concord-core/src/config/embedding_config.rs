use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding front-end configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Length of vectors the provider is expected to return.
    pub dimensions: usize,
    /// Max entries held by the in-memory embedding cache.
    pub cache_size: u64,
    /// Max lifetime of a cached embedding, in seconds.
    pub cache_ttl_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            cache_size: defaults::DEFAULT_EMBEDDING_CACHE_SIZE,
            cache_ttl_secs: defaults::DEFAULT_EMBEDDING_CACHE_TTL_SECS,
        }
    }
}
