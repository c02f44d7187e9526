use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Cluster, ExcludedStatement};
use crate::config::ConsensusConfig;

/// Where a module's understanding stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsensusStatus {
    Accepted,
    Proposed,
    Contested,
    InsufficientData,
}

impl ConsensusStatus {
    /// Classify a consensus percentage over `valid_statements` statements.
    pub fn classify(percentage: f64, valid_statements: usize, config: &ConsensusConfig) -> Self {
        if valid_statements < config.min_statements {
            Self::InsufficientData
        } else if percentage >= config.accepted_threshold {
            Self::Accepted
        } else if percentage >= config.proposed_threshold {
            Self::Proposed
        } else {
            Self::Contested
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::Proposed => "Proposed",
            Self::Contested => "Contested",
            Self::InsufficientData => "Insufficient data",
        }
    }
}

impl fmt::Display for ConsensusStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating one module's statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleConsensus {
    pub module_id: String,
    /// Ranked clusters, largest first.
    pub clusters: Vec<Cluster>,
    pub consensus_percentage: f64,
    pub status: ConsensusStatus,
    pub total_statements: usize,
    pub valid_statements: usize,
    pub excluded: Vec<ExcludedStatement>,
    pub computed_at: DateTime<Utc>,
}

impl ModuleConsensus {
    /// The rank-1 cluster, if any.
    pub fn dominant(&self) -> Option<&Cluster> {
        self.clusters.first()
    }

    /// Every cluster that disagrees with the dominant one.
    pub fn divergent(&self) -> &[Cluster] {
        self.clusters.get(1..).unwrap_or(&[])
    }

    pub fn has_sufficient_data(&self) -> bool {
        self.status != ConsensusStatus::InsufficientData
    }
}

/// Per-module results for a whole project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConsensus {
    pub project_id: String,
    /// Sorted by ascending consensus; modules without enough data come last.
    pub modules: Vec<ModuleConsensus>,
    /// Mean consensus over modules with sufficient data; 0 when there are none.
    pub mean_consensus: f64,
    pub computed_at: DateTime<Utc>,
}
