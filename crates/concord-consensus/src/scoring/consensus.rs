use concord_core::models::Cluster;

/// Percentage of the team in agreement: the rank-1 cluster's percentage.
///
/// 0.0 for an empty list. No smoothing or weighting.
pub fn consensus_percentage(clusters: &[Cluster]) -> f64 {
    clusters
        .iter()
        .min_by_key(|c| c.rank)
        .map_or(0.0, |c| c.percentage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use concord_core::models::Statement;

    fn cluster(rank: usize, percentage: f64) -> Cluster {
        let member = Statement::new(format!("s{rank}"), "m", "text");
        Cluster {
            rank,
            representative_id: member.id.clone(),
            members: vec![member],
            percentage,
            cohesion: 1.0,
            mean_confidence: None,
        }
    }

    #[test]
    fn empty_list_scores_zero() {
        assert_eq!(consensus_percentage(&[]), 0.0);
    }

    #[test]
    fn reads_the_top_ranked_cluster() {
        let clusters = vec![cluster(1, 60.0), cluster(2, 40.0)];
        assert_eq!(consensus_percentage(&clusters), 60.0);
    }

    #[test]
    fn rank_decides_even_when_list_is_reordered() {
        let clusters = vec![cluster(2, 40.0), cluster(1, 60.0)];
        assert_eq!(consensus_percentage(&clusters), 60.0);
    }
}
