//! # concord-embeddings
//!
//! Upstream of the consensus engine: a cached, dimension-checked front-end
//! over any embedding provider, and the ingestor that turns submitted text
//! into embedded, persisted statements.

pub mod cache;
pub mod cached;
pub mod ingestion;

pub use cache::EmbeddingCache;
pub use cached::CachedEmbedder;
pub use ingestion::{NewStatement, StatementIngestor};
