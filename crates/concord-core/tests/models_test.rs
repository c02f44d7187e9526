use chrono::Utc;
use concord_core::config::ConsensusConfig;
use concord_core::models::*;
use proptest::prelude::*;

fn make_cluster(rank: usize, ids: &[&str], representative: &str) -> Cluster {
    Cluster {
        rank,
        members: ids.iter().map(|id| Statement::new(*id, "m", *id)).collect(),
        representative_id: representative.to_string(),
        percentage: 0.0,
        cohesion: 1.0,
        mean_confidence: None,
    }
}

#[test]
fn missing_embedding_serializes_as_null() {
    let s = Statement::new("s1", "auth", "tokens expire hourly");
    let json = serde_json::to_value(&s).unwrap();
    assert!(json["embedding"].is_null());
}

#[test]
fn zero_vector_stays_distinct_from_missing_embedding() {
    let zero = Statement::new("s1", "auth", "x").with_embedding(vec![0.0, 0.0, 0.0]);
    let json = serde_json::to_string(&zero).unwrap();
    let back: Statement = serde_json::from_str(&json).unwrap();
    assert_eq!(back.embedding, Some(vec![0.0, 0.0, 0.0]));

    let missing = Statement::new("s2", "auth", "x");
    let json = serde_json::to_string(&missing).unwrap();
    let back: Statement = serde_json::from_str(&json).unwrap();
    assert_eq!(back.embedding, None);
}

#[test]
fn statement_without_optional_fields_deserializes() {
    let json = format!(
        r#"{{"id":"s1","module_id":"auth","content":"c","created_at":"{}"}}"#,
        Utc::now().to_rfc3339()
    );
    let s: Statement = serde_json::from_str(&json).unwrap();
    assert!(s.embedding.is_none());
    assert!(s.confidence.is_none());
    assert!(s.author.is_none());
}

#[test]
fn self_confidence_out_of_range_is_clamped_on_deserialize() {
    let json = format!(
        r#"{{"id":"s1","module_id":"m","content":"c","confidence":9,"created_at":"{}"}}"#,
        Utc::now().to_rfc3339()
    );
    let s: Statement = serde_json::from_str(&json).unwrap();
    assert_eq!(s.confidence.map(|c| c.value()), Some(5));
}

proptest! {
    #[test]
    fn self_confidence_always_within_scale(v in any::<u8>()) {
        let c = SelfConfidence::new(v);
        prop_assert!((1..=5).contains(&c.value()));
    }
}

#[test]
fn cluster_representative_lookup() {
    let cluster = make_cluster(1, &["a", "b", "c"], "b");
    assert_eq!(cluster.size(), 3);
    assert_eq!(cluster.representative().map(|s| s.id.as_str()), Some("b"));
    assert_eq!(cluster.member_ids(), vec!["a", "b", "c"]);
    assert!(!cluster.is_singleton());
}

#[test]
fn exclusion_reason_serializes_with_kind_tag() {
    let reason = ExclusionReason::DimensionMismatch {
        expected: 3,
        actual: 2,
    };
    let json = serde_json::to_value(&reason).unwrap();
    assert_eq!(json["kind"], "dimension_mismatch");
    assert_eq!(json["expected"], 3);
    assert!(reason.to_string().contains("expected 3"));
}

#[test]
fn status_classification_follows_thresholds() {
    let config = ConsensusConfig::default();
    assert_eq!(ConsensusStatus::classify(70.0, 10, &config), ConsensusStatus::Accepted);
    assert_eq!(ConsensusStatus::classify(69.9, 10, &config), ConsensusStatus::Proposed);
    assert_eq!(ConsensusStatus::classify(50.0, 10, &config), ConsensusStatus::Proposed);
    assert_eq!(ConsensusStatus::classify(49.9, 10, &config), ConsensusStatus::Contested);
    assert_eq!(
        ConsensusStatus::classify(100.0, 1, &config),
        ConsensusStatus::InsufficientData
    );
}

#[test]
fn module_consensus_splits_dominant_and_divergent() {
    let result = ModuleConsensus {
        module_id: "auth".into(),
        clusters: vec![
            make_cluster(1, &["a", "b"], "a"),
            make_cluster(2, &["c"], "c"),
        ],
        consensus_percentage: 66.7,
        status: ConsensusStatus::Proposed,
        total_statements: 3,
        valid_statements: 3,
        excluded: vec![],
        computed_at: Utc::now(),
    };
    assert_eq!(result.dominant().map(|c| c.rank), Some(1));
    assert_eq!(result.divergent().len(), 1);
    assert!(result.has_sufficient_data());
}

#[test]
fn empty_module_consensus_has_no_divergent_clusters() {
    let result = ModuleConsensus {
        module_id: "auth".into(),
        clusters: vec![],
        consensus_percentage: 0.0,
        status: ConsensusStatus::InsufficientData,
        total_statements: 0,
        valid_statements: 0,
        excluded: vec![],
        computed_at: Utc::now(),
    };
    assert!(result.dominant().is_none());
    assert!(result.divergent().is_empty());
    assert!(!result.has_sufficient_data());
}
