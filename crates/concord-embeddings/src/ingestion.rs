//! StatementIngestor: submitted text → embedded, persisted statement.
//!
//! An embedding failure, or an embedding with NaN or infinite components, does
//! not reject the statement: it is stored with `embedding: None`, so the
//! consensus engine excludes it until re-ingested.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use concord_core::errors::{ConcordError, ConcordResult};
use concord_core::models::{SelfConfidence, Statement};
use concord_core::traits::{IEmbeddingProvider, IStatementStore};
use concord_observability::events;

/// A statement as submitted by a team member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStatement {
    pub module_id: String,
    pub content: String,
    #[serde(default)]
    pub confidence: Option<u8>,
    #[serde(default)]
    pub author: Option<String>,
}

impl NewStatement {
    pub fn new(module_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            module_id: module_id.into(),
            content: content.into(),
            confidence: None,
            author: None,
        }
    }
}

pub struct StatementIngestor {
    embedder: Box<dyn IEmbeddingProvider>,
    store: Arc<dyn IStatementStore>,
    degraded: AtomicUsize,
}

impl StatementIngestor {
    pub fn new(embedder: Box<dyn IEmbeddingProvider>, store: Arc<dyn IStatementStore>) -> Self {
        Self {
            embedder,
            store,
            degraded: AtomicUsize::new(0),
        }
    }

    /// Validate, embed, and persist one statement.
    #[instrument(skip(self, new), fields(module_id = %new.module_id))]
    pub fn ingest(&self, new: NewStatement) -> ConcordResult<Statement> {
        let content = new.content.trim();
        if content.is_empty() {
            return Err(ConcordError::invalid_input("statement content is blank"));
        }
        if new.module_id.trim().is_empty() {
            return Err(ConcordError::invalid_input("statement has no module id"));
        }

        let id = uuid::Uuid::new_v4().to_string();
        let embedding = match self.embedder.embed(content) {
            Ok(embedding) if embedding.iter().all(|x| x.is_finite()) => Some(embedding),
            Ok(_) => {
                self.degrade(&id, "embedding contains non-finite components");
                None
            }
            Err(e) => {
                self.degrade(&id, &e.to_string());
                None
            }
        };

        let statement = Statement {
            id,
            module_id: new.module_id,
            content: content.to_string(),
            confidence: new.confidence.map(SelfConfidence::new),
            embedding,
            author: new.author,
            created_at: Utc::now(),
        };
        self.store.create_statement(&statement)?;
        events::statement_ingested(&statement.id, &statement.module_id, statement.has_embedding());
        Ok(statement)
    }

    fn degrade(&self, statement_id: &str, reason: &str) {
        events::embedding_degraded(statement_id, self.embedder.name(), reason);
        self.degraded.fetch_add(1, Ordering::Relaxed);
    }

    /// Ingest several statements; stops at the first hard error.
    pub fn ingest_batch(&self, batch: Vec<NewStatement>) -> ConcordResult<Vec<Statement>> {
        batch.into_iter().map(|new| self.ingest(new)).collect()
    }

    /// Statements stored without an embedding because the provider failed.
    pub fn degraded_count(&self) -> usize {
        self.degraded.load(Ordering::Relaxed)
    }
}
