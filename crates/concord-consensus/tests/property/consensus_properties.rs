//! Property tests for similarity, clustering, and consensus scoring.

use std::collections::BTreeSet;

use proptest::prelude::*;

use concord_consensus::{cluster_statements, consensus_percentage, cosine_similarity};
use concord_core::constants::SIMILARITY_THRESHOLD;
use concord_core::models::{Cluster, Statement};

const DIMS: usize = 4;

/// Deterministic embedding derived from text, centred on zero.
fn hashed_embedding(text: &str) -> Vec<f32> {
    let hash = blake3::hash(text.as_bytes());
    let bytes = hash.as_bytes();
    (0..DIMS).map(|i| bytes[i] as f32 / 127.5 - 1.0).collect()
}

fn statements_from(vectors: &[Option<Vec<f32>>]) -> Vec<Statement> {
    vectors
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let s = Statement::new(format!("s{i}"), "m", format!("view {i}"));
            match v {
                Some(v) => s.with_embedding(v.clone()),
                None => s,
            }
        })
        .collect()
}

fn partition(clusters: &[Cluster]) -> BTreeSet<Vec<String>> {
    clusters
        .iter()
        .map(|c| {
            let mut ids: Vec<String> = c.members.iter().map(|m| m.id.clone()).collect();
            ids.sort();
            ids
        })
        .collect()
}

fn vector() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1.0f32..1.0, DIMS)
}

fn maybe_vectors() -> impl Strategy<Value = Vec<Option<Vec<f32>>>> {
    prop::collection::vec(prop::option::weighted(0.85, vector()), 0..24)
}

proptest! {
    #[test]
    fn prop_similarity_symmetric(a in vector(), b in vector()) {
        prop_assert_eq!(cosine_similarity(&a, &b).unwrap(), cosine_similarity(&b, &a).unwrap());
    }

    #[test]
    fn prop_similarity_bounded(a in vector(), b in vector()) {
        let s = cosine_similarity(&a, &b).unwrap();
        prop_assert!((-1.0 - 1e-6..=1.0 + 1e-6).contains(&s));
    }

    #[test]
    fn prop_self_similarity_is_one(a in vector()) {
        prop_assume!(a.iter().any(|x| *x != 0.0));
        prop_assert!((cosine_similarity(&a, &a).unwrap() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn prop_length_mismatch_rejected(a in prop::collection::vec(-1.0f32..1.0, 1..8), extra in 1usize..4) {
        let mut b = a.clone();
        b.extend(std::iter::repeat(0.5).take(extra));
        prop_assert!(cosine_similarity(&a, &b).is_err());
    }
}

proptest! {
    #[test]
    fn prop_every_valid_statement_in_exactly_one_cluster(vectors in maybe_vectors()) {
        let statements = statements_from(&vectors);
        let clusters = cluster_statements(&statements);
        let valid = vectors.iter().filter(|v| v.is_some()).count();

        let total: usize = clusters.iter().map(Cluster::size).sum();
        prop_assert_eq!(total, valid);

        let mut seen = BTreeSet::new();
        for id in clusters.iter().flat_map(|c| c.member_ids()) {
            prop_assert!(seen.insert(id.to_string()), "{} appears twice", id);
        }
    }

    #[test]
    fn prop_sizes_non_increasing_and_ranked(vectors in maybe_vectors()) {
        let clusters = cluster_statements(&statements_from(&vectors));
        for pair in clusters.windows(2) {
            prop_assert!(pair[0].size() >= pair[1].size());
        }
        for (i, c) in clusters.iter().enumerate() {
            prop_assert_eq!(c.rank, i + 1);
            prop_assert!(c.member_ids().contains(&c.representative_id.as_str()));
        }
    }

    #[test]
    fn prop_percentages_sum_to_hundred(vectors in maybe_vectors()) {
        let clusters = cluster_statements(&statements_from(&vectors));
        let valid = vectors.iter().filter(|v| v.is_some()).count();
        if clusters.is_empty() {
            prop_assert_eq!(consensus_percentage(&clusters), 0.0);
        } else {
            let sum: f64 = clusters.iter().map(|c| c.percentage).sum();
            prop_assert!((sum - 100.0).abs() < 1e-6);
            for c in &clusters {
                let expected = c.size() as f64 / valid as f64 * 100.0;
                prop_assert!((c.percentage - expected).abs() < 1e-9);
            }
            prop_assert_eq!(consensus_percentage(&clusters), clusters[0].percentage);
        }
    }

    #[test]
    fn prop_separate_clusters_stay_below_threshold(vectors in maybe_vectors()) {
        let clusters = cluster_statements(&statements_from(&vectors));
        for (i, left) in clusters.iter().enumerate() {
            for right in &clusters[i + 1..] {
                for a in &left.members {
                    for b in &right.members {
                        let (Some(ea), Some(eb)) = (&a.embedding, &b.embedding) else {
                            unreachable!("clustered statements carry embeddings");
                        };
                        prop_assert!(cosine_similarity(ea, eb).unwrap() < SIMILARITY_THRESHOLD);
                    }
                }
            }
        }
    }

    #[test]
    fn prop_partition_independent_of_input_order(vectors in maybe_vectors()) {
        let forward = statements_from(&vectors);
        let mut backward = forward.clone();
        backward.reverse();
        prop_assert_eq!(
            partition(&cluster_statements(&forward)),
            partition(&cluster_statements(&backward))
        );
    }

    #[test]
    fn prop_deterministic_for_hashed_texts(seed in 0u64..1000, n in 1usize..16) {
        let statements: Vec<Statement> = (0..n)
            .map(|i| {
                let text = format!("topic {} seed {}", i % 3, seed);
                Statement::new(format!("s{i}"), "m", text.clone())
                    .with_embedding(hashed_embedding(&text))
            })
            .collect();
        let first = cluster_statements(&statements);
        let second = cluster_statements(&statements);
        prop_assert_eq!(&first, &second);
        // identical texts always share a cluster
        prop_assert!(first.len() <= 3);
    }
}
