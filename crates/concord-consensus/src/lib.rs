//! # concord-consensus
//!
//! Consensus engine: cosine similarity → union-find agreement clustering at a
//! fixed threshold → ranked clusters with representatives → consensus
//! percentage and status. Optional narrative rendering sits downstream.
//!
//! Every computation is pure and request-scoped. Cost is O(n²) in the number
//! of valid statements per module; callers bucket statements by module to keep
//! n in the tens to low hundreds.

pub mod algorithms;
pub mod clustering;
pub mod engine;
pub mod narrative;
pub mod scoring;

pub use algorithms::similarity::{cosine_similarity, SimilarityMatrix};
pub use clustering::{cluster_statements, ClusterBuilder, ClusterOutcome};
pub use engine::ConsensusEngine;
pub use narrative::{Narrative, NarrativeStats, NarrativeWriter};
pub use scoring::consensus_percentage;
