use std::fmt;

use serde::{Deserialize, Serialize};

use super::Statement;

/// A group of statements transitively linked by high pairwise similarity.
///
/// Built only by the cluster builder; `members` is never empty and keeps
/// the original input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// 1 = largest cluster.
    pub rank: usize,
    pub members: Vec<Statement>,
    /// Id of the member most similar, on average, to its peers.
    pub representative_id: String,
    /// Share of all valid statements, in percent.
    pub percentage: f64,
    /// Mean pairwise similarity between members (1.0 for a singleton).
    pub cohesion: f64,
    /// Mean self-reported confidence of the members that reported one.
    pub mean_confidence: Option<f64>,
}

impl Cluster {
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// The representative statement.
    pub fn representative(&self) -> Option<&Statement> {
        self.members.iter().find(|m| m.id == self.representative_id)
    }

    pub fn member_ids(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.id.as_str()).collect()
    }

    pub fn is_singleton(&self) -> bool {
        self.members.len() == 1
    }
}

/// Why a statement was left out of clustering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExclusionReason {
    /// No embedding attached.
    Missing,
    /// Embedding attached but has no components.
    Empty,
    /// Embedding contains NaN or infinity.
    NonFinite,
    /// Embedding length differs from the batch's expected length.
    DimensionMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing embedding"),
            Self::Empty => write!(f, "empty embedding"),
            Self::NonFinite => write!(f, "non-finite embedding component"),
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "embedding has {actual} dimensions, expected {expected}")
            }
        }
    }
}

/// A statement skipped by clustering, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedStatement {
    pub statement_id: String,
    pub reason: ExclusionReason,
}
