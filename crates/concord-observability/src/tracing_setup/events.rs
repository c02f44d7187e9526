//! Structured log events for key system operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed module consensus computation.
pub fn consensus_computed(
    module_id: &str,
    valid: usize,
    excluded: usize,
    clusters: usize,
    consensus: f64,
    status: &str,
) {
    tracing::info!(
        event = "consensus_computed",
        module_id = %module_id,
        valid = valid,
        excluded = excluded,
        clusters = clusters,
        consensus = consensus,
        status = %status,
        "consensus computed"
    );
}

/// Log statements left out of clustering.
pub fn statements_excluded(module_id: &str, statement_ids: &[&str]) {
    tracing::warn!(
        event = "statements_excluded",
        module_id = %module_id,
        count = statement_ids.len(),
        statement_ids = ?statement_ids,
        "statements without a usable embedding excluded from clustering"
    );
}

/// Log a narrative that fell back to the plain rendering.
pub fn narrative_fallback(kind: &str, module_id: &str, reason: &str) {
    tracing::warn!(
        event = "narrative_fallback",
        kind = %kind,
        module_id = %module_id,
        reason = %reason,
        "narrative fell back to plain rendering"
    );
}

/// Log a newly ingested statement.
pub fn statement_ingested(statement_id: &str, module_id: &str, embedded: bool) {
    tracing::info!(
        event = "statement_ingested",
        statement_id = %statement_id,
        module_id = %module_id,
        embedded = embedded,
        "statement ingested"
    );
}

/// Log an embedding failure that left a statement without an embedding.
pub fn embedding_degraded(statement_id: &str, provider: &str, failure: &str) {
    tracing::warn!(
        event = "embedding_degraded",
        statement_id = %statement_id,
        provider = %provider,
        failure = %failure,
        "embedding failed; statement stored without embedding"
    );
}
