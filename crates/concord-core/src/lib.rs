//! # concord-core
//!
//! Foundation crate for the Concord consensus system.
//! Defines the statement and cluster models, collaborator traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ConcordConfig;
pub use errors::{ConcordError, ConcordResult};
pub use models::{Cluster, ConsensusStatus, ModuleConsensus, SelfConfidence, Statement};
