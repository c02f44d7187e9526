//! Cosine similarity and the all-pairs similarity matrix.

use concord_core::errors::{ConcordError, ConcordResult};

/// Cosine similarity between two vectors, clamped to [-1, 1].
///
/// Fails with `InvalidInput` when the lengths differ.
/// Returns 0.0 when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> ConcordResult<f64> {
    if a.len() != b.len() {
        return Err(ConcordError::invalid_input(format!(
            "cosine similarity needs equal-length vectors, got {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(cosine(a, b))
}

/// Caller guarantees `a.len() == b.len()`.
fn cosine(a: &[f32], b: &[f32]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    // Squares of f32 values cannot underflow in f64, so only the all-zero
    // vector has zero magnitude.
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    (dot / (mag_a.sqrt() * mag_b.sqrt())).clamp(-1.0, 1.0)
}

/// Symmetric all-pairs cosine similarity, upper triangle only.
///
/// The diagonal is not stored; `get(i, i)` reports 1.0 by convention.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    upper: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute every pairwise similarity. All vectors must share one length.
    pub fn compute(vectors: &[&[f32]]) -> ConcordResult<Self> {
        if let Some(first) = vectors.first() {
            if let Some(bad) = vectors.iter().find(|v| v.len() != first.len()) {
                return Err(ConcordError::invalid_input(format!(
                    "similarity matrix needs equal-length vectors, got {} and {}",
                    first.len(),
                    bad.len()
                )));
            }
        }
        Ok(Self::compute_unchecked(vectors))
    }

    /// Same as [`SimilarityMatrix::compute`] for vectors already screened to one length.
    pub(crate) fn compute_unchecked(vectors: &[&[f32]]) -> Self {
        let n = vectors.len();
        let mut upper = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                upper.push(cosine(vectors[i], vectors[j]));
            }
        }
        Self { n, upper }
    }

    /// Number of vectors.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity between vectors `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        if i == j {
            return 1.0;
        }
        let (i, j) = if i < j { (i, j) } else { (j, i) };
        self.upper[self.index(i, j)]
    }

    /// Every unordered pair `(i, j, similarity)` with `i < j`, row by row.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.n).flat_map(move |i| ((i + 1)..self.n).map(move |j| (i, j, self.get(i, j))))
    }

    // Row-major offset of (i, j), i < j, in the packed upper triangle.
    fn index(&self, i: usize, j: usize) -> usize {
        i * (2 * self.n - i - 1) / 2 + (j - i - 1)
    }
}
