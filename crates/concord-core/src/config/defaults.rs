// Single source of truth for all default values.

use crate::constants;

// --- Consensus ---
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = constants::SIMILARITY_THRESHOLD;
pub const DEFAULT_ACCEPTED_THRESHOLD: f64 = constants::ACCEPTED_THRESHOLD;
pub const DEFAULT_PROPOSED_THRESHOLD: f64 = constants::PROPOSED_THRESHOLD;
pub const DEFAULT_MIN_STATEMENTS: usize = constants::MIN_STATEMENTS_FOR_CONSENSUS;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 768;
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 10_000;
pub const DEFAULT_EMBEDDING_CACHE_TTL_SECS: u64 = 86_400; // 24 hours

// --- Narrative ---
pub const DEFAULT_NARRATIVE_ENABLED: bool = false;
pub const DEFAULT_MAX_PROMPT_STATEMENTS: usize = 20;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
