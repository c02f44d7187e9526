//! Configuration for every Concord subsystem.
//!
//! # Examples
//!
//! ```
//! use concord_core::config::ConcordConfig;
//!
//! let config = ConcordConfig::from_toml("[consensus]\nsimilarity_threshold = 0.8\n").unwrap();
//! assert!((config.consensus.similarity_threshold - 0.8).abs() < f64::EPSILON);
//! assert!((config.consensus.accepted_threshold - 70.0).abs() < f64::EPSILON);
//! ```

pub mod consensus_config;
pub mod defaults;
pub mod embedding_config;
pub mod narrative_config;
pub mod observability_config;

pub use consensus_config::ConsensusConfig;
pub use embedding_config::EmbeddingConfig;
pub use narrative_config::NarrativeConfig;
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConcordError, ConcordResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcordConfig {
    pub consensus: ConsensusConfig,
    pub embedding: EmbeddingConfig,
    pub narrative: NarrativeConfig,
    pub observability: ObservabilityConfig,
}

impl ConcordConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml(source: &str) -> ConcordResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConcordError::ConfigError {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the consensus engine cannot work with.
    pub fn validate(&self) -> ConcordResult<()> {
        let c = &self.consensus;
        if !(-1.0..=1.0).contains(&c.similarity_threshold) {
            return Err(ConcordError::ConfigError {
                reason: format!(
                    "consensus.similarity_threshold must lie in [-1, 1], got {}",
                    c.similarity_threshold
                ),
            });
        }
        for (name, value) in [
            ("accepted_threshold", c.accepted_threshold),
            ("proposed_threshold", c.proposed_threshold),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConcordError::ConfigError {
                    reason: format!("consensus.{name} must lie in [0, 100], got {value}"),
                });
            }
        }
        if c.accepted_threshold < c.proposed_threshold {
            return Err(ConcordError::ConfigError {
                reason: format!(
                    "consensus.accepted_threshold ({}) is below proposed_threshold ({})",
                    c.accepted_threshold, c.proposed_threshold
                ),
            });
        }
        if c.min_statements == 0 {
            return Err(ConcordError::ConfigError {
                reason: "consensus.min_statements must be at least 1".to_string(),
            });
        }
        if c.embedding_dimensions == Some(0) {
            return Err(ConcordError::ConfigError {
                reason: "consensus.embedding_dimensions must be positive".to_string(),
            });
        }
        if self.embedding.dimensions == 0 {
            return Err(ConcordError::ConfigError {
                reason: "embedding.dimensions must be positive".to_string(),
            });
        }
        Ok(())
    }
}
