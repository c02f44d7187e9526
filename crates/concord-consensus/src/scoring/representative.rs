use crate::algorithms::similarity::SimilarityMatrix;

/// Mean similarity of each member to the other members of its cluster.
///
/// `members` are positions into `matrix`. A singleton scores 1.0.
pub fn mean_similarities(matrix: &SimilarityMatrix, members: &[usize]) -> Vec<f64> {
    if members.len() < 2 {
        return vec![1.0; members.len()];
    }
    let peers = (members.len() - 1) as f64;
    members
        .iter()
        .map(|&i| {
            let total: f64 = members
                .iter()
                .filter(|&&j| j != i)
                .map(|&j| matrix.get(i, j))
                .sum();
            total / peers
        })
        .collect()
}

/// Index of the highest score; the earliest wins ties. `None` when empty.
pub fn select_representative(scores: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &score) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}
