//! Agreement clustering: screening → all-pairs similarity → union-find merge
//! → stable ranking by size → representative selection.

pub mod builder;
pub mod screening;
pub mod union_find;

pub use builder::{ClusterBuilder, ClusterOutcome};
pub use union_find::DisjointSet;

use concord_core::models::{Cluster, Statement};

/// Cluster statements at the fixed 0.75 similarity threshold.
///
/// Statements without a usable embedding are left out. Returns an empty list
/// when none qualify.
pub fn cluster_statements(statements: &[Statement]) -> Vec<Cluster> {
    ClusterBuilder::default().build(statements).clusters
}
