//! ClusterBuilder: fixed-threshold transitive-closure clustering.

use std::cmp::Reverse;

use concord_core::config::ConsensusConfig;
use concord_core::constants::SIMILARITY_THRESHOLD;
use concord_core::models::{Cluster, ExcludedStatement, Statement};
use tracing::debug;

use super::screening;
use super::union_find::DisjointSet;
use crate::algorithms::similarity::SimilarityMatrix;
use crate::scoring::representative;

/// Clusters plus what was left out.
#[derive(Debug, Clone, Default)]
pub struct ClusterOutcome {
    /// Ranked, largest first.
    pub clusters: Vec<Cluster>,
    pub excluded: Vec<ExcludedStatement>,
    /// Statements that took part in clustering; the percentage denominator.
    pub valid_count: usize,
}

/// Groups statements whose pairwise similarity reaches `threshold`,
/// transitively: A~B and B~C put A, B and C together even if A≁C.
#[derive(Debug, Clone)]
pub struct ClusterBuilder {
    threshold: f64,
    dimensions: Option<usize>,
}

impl Default for ClusterBuilder {
    fn default() -> Self {
        Self::new(SIMILARITY_THRESHOLD)
    }
}

impl ClusterBuilder {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            dimensions: None,
        }
    }

    pub fn from_config(config: &ConsensusConfig) -> Self {
        Self::new(config.similarity_threshold).with_dimensions(config.embedding_dimensions)
    }

    /// Require every embedding to have exactly this many components.
    pub fn with_dimensions(mut self, dimensions: Option<usize>) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Partition `statements` into ranked clusters.
    pub fn build(&self, statements: &[Statement]) -> ClusterOutcome {
        let screened = screening::screen(statements, self.dimensions);
        let valid_count = screened.valid.len();
        if valid_count == 0 {
            return ClusterOutcome {
                clusters: Vec::new(),
                excluded: screened.excluded,
                valid_count,
            };
        }

        let vectors: Vec<&[f32]> = screened.valid.iter().map(|(_, e)| *e).collect();
        let matrix = SimilarityMatrix::compute_unchecked(&vectors);

        let mut sets = DisjointSet::new(valid_count);
        let mut merges = 0usize;
        for (i, j, similarity) in matrix.pairs() {
            if similarity >= self.threshold && sets.union(i, j) {
                merges += 1;
            }
        }

        let mut groups = sets.groups();
        // Stable: equal sizes keep first-appearance order.
        groups.sort_by_key(|g| Reverse(g.len()));

        debug!(
            valid = valid_count,
            excluded = screened.excluded.len(),
            merges,
            clusters = groups.len(),
            dims = ?screened.dimensions,
            threshold = self.threshold,
            "statements clustered"
        );

        let clusters = groups
            .iter()
            .enumerate()
            .map(|(idx, members)| {
                let scores = representative::mean_similarities(&matrix, members);
                let rep = representative::select_representative(&scores).unwrap_or(0);
                let member_statements: Vec<Statement> =
                    members.iter().map(|&i| screened.valid[i].0.clone()).collect();
                Cluster {
                    rank: idx + 1,
                    representative_id: member_statements[rep].id.clone(),
                    percentage: members.len() as f64 / valid_count as f64 * 100.0,
                    cohesion: scores.iter().sum::<f64>() / scores.len() as f64,
                    mean_confidence: mean_confidence(&member_statements),
                    members: member_statements,
                }
            })
            .collect();

        ClusterOutcome {
            clusters,
            excluded: screened.excluded,
            valid_count,
        }
    }
}

fn mean_confidence(members: &[Statement]) -> Option<f64> {
    let reported: Vec<f64> = members
        .iter()
        .filter_map(|m| m.confidence)
        .map(|c| c.value() as f64)
        .collect();
    if reported.is_empty() {
        None
    } else {
        Some(reported.iter().sum::<f64>() / reported.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stmt(id: &str, embedding: Vec<f32>) -> Statement {
        Statement::new(id, "m", format!("statement {id}")).with_embedding(embedding)
    }

    #[test]
    fn no_valid_statements_returns_no_clusters() {
        let statements = vec![Statement::new("a", "m", "no embedding")];
        let outcome = ClusterBuilder::default().build(&statements);
        assert!(outcome.clusters.is_empty());
        assert_eq!(outcome.valid_count, 0);
        assert_eq!(outcome.excluded.len(), 1);
    }

    #[test]
    fn identical_embeddings_form_one_cluster() {
        let statements: Vec<_> = (0..4).map(|i| stmt(&format!("s{i}"), vec![0.3, 0.4, 0.5])).collect();
        let outcome = ClusterBuilder::default().build(&statements);
        assert_eq!(outcome.clusters.len(), 1);
        assert_eq!(outcome.clusters[0].size(), 4);
        assert!((outcome.clusters[0].percentage - 100.0).abs() < 1e-9);
        assert!((outcome.clusters[0].cohesion - 1.0).abs() < 1e-6);
        // All equal: the first member represents.
        assert_eq!(outcome.clusters[0].representative_id, "s0");
    }

    #[test]
    fn equal_sized_clusters_keep_input_order() {
        let statements = vec![
            stmt("x1", vec![1.0, 0.0]),
            stmt("y1", vec![0.0, 1.0]),
            stmt("x2", vec![1.0, 0.05]),
            stmt("y2", vec![0.05, 1.0]),
        ];
        let outcome = ClusterBuilder::default().build(&statements);
        assert_eq!(outcome.clusters.len(), 2);
        assert_eq!(outcome.clusters[0].member_ids(), vec!["x1", "x2"]);
        assert_eq!(outcome.clusters[1].member_ids(), vec!["y1", "y2"]);
        assert_eq!(outcome.clusters[0].rank, 1);
        assert_eq!(outcome.clusters[1].rank, 2);
    }

    #[test]
    fn larger_cluster_ranks_first_regardless_of_position() {
        let statements = vec![
            stmt("lonely", vec![0.0, 1.0]),
            stmt("a", vec![1.0, 0.0]),
            stmt("b", vec![1.0, 0.1]),
        ];
        let outcome = ClusterBuilder::default().build(&statements);
        assert_eq!(outcome.clusters[0].member_ids(), vec!["a", "b"]);
        assert_eq!(outcome.clusters[1].member_ids(), vec!["lonely"]);
    }

    #[test]
    fn similarity_exactly_at_threshold_merges() {
        // Threshold set to the pair's own similarity.
        let statements = vec![stmt("a", vec![1.0, 0.0]), stmt("b", vec![0.75, 0.661_437_8])];
        let sim = crate::cosine_similarity(&[1.0, 0.0], &[0.75, 0.661_437_8]).unwrap();
        let outcome = ClusterBuilder::new(sim).build(&statements);
        assert_eq!(outcome.clusters.len(), 1);
    }

    #[test]
    fn zero_vectors_never_merge() {
        let statements = vec![stmt("z1", vec![0.0, 0.0]), stmt("z2", vec![0.0, 0.0])];
        let outcome = ClusterBuilder::default().build(&statements);
        assert_eq!(outcome.clusters.len(), 2);
        assert!(outcome.excluded.is_empty());
    }

    #[test]
    fn mean_confidence_ignores_unreported_members() {
        let statements = vec![
            stmt("a", vec![1.0, 0.0]).with_confidence(4),
            stmt("b", vec![1.0, 0.0]).with_confidence(2),
            stmt("c", vec![1.0, 0.0]),
        ];
        let outcome = ClusterBuilder::default().build(&statements);
        assert_eq!(outcome.clusters[0].mean_confidence, Some(3.0));
    }

    #[test]
    fn config_threshold_and_dimensions_apply() {
        let config = ConsensusConfig {
            similarity_threshold: 0.99,
            embedding_dimensions: Some(2),
            ..Default::default()
        };
        let statements = vec![
            stmt("a", vec![1.0, 0.0]),
            stmt("b", vec![1.0, 0.2]),
            stmt("c", vec![1.0, 0.0, 0.0]),
        ];
        let outcome = ClusterBuilder::from_config(&config).build(&statements);
        assert_eq!(outcome.valid_count, 2);
        assert_eq!(outcome.clusters.len(), 2);
        assert_eq!(outcome.excluded[0].statement_id, "c");
    }
}
