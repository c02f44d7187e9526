//! ConsensusEngine: evaluates how well a team agrees on each module.
//!
//! # Examples
//!
//! ```
//! use concord_consensus::ConsensusEngine;
//! use concord_core::config::ConsensusConfig;
//! use concord_core::models::{ConsensusStatus, Statement};
//!
//! let engine = ConsensusEngine::new(ConsensusConfig::default());
//! let statements = vec![
//!     Statement::new("s1", "auth", "sessions live in redis").with_embedding(vec![1.0, 0.0]),
//!     Statement::new("s2", "auth", "redis holds the sessions").with_embedding(vec![0.9, 0.1]),
//! ];
//! let result = engine.evaluate("auth", &statements);
//! assert_eq!(result.consensus_percentage, 100.0);
//! assert_eq!(result.status, ConsensusStatus::Accepted);
//! ```

use chrono::Utc;
use tracing::{debug, info, instrument};

use concord_core::config::{ConcordConfig, ConsensusConfig};
use concord_core::errors::{ConcordError, ConcordResult};
use concord_core::models::{ConsensusStatus, ModuleConsensus, ProjectConsensus, Statement};
use concord_core::traits::{IProjectStore, IStatementStore};
use concord_observability::events;

use crate::clustering::ClusterBuilder;
use crate::scoring::consensus_percentage;

/// Stateless consensus evaluator. Holds only configuration, so a single
/// instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct ConsensusEngine {
    config: ConsensusConfig,
    builder: ClusterBuilder,
}

impl Default for ConsensusEngine {
    fn default() -> Self {
        Self::new(ConsensusConfig::default())
    }
}

impl ConsensusEngine {
    pub fn new(config: ConsensusConfig) -> Self {
        let builder = ClusterBuilder::from_config(&config);
        Self { config, builder }
    }

    /// Build from a full config, rejecting invalid values.
    pub fn from_config(config: &ConcordConfig) -> ConcordResult<Self> {
        config.validate()?;
        Ok(Self::new(config.consensus.clone()))
    }

    pub fn config(&self) -> &ConsensusConfig {
        &self.config
    }

    /// Evaluate one module's statements. Pure: no I/O, no retained state.
    #[instrument(skip(self, statements), fields(statements = statements.len()))]
    pub fn evaluate(&self, module_id: &str, statements: &[Statement]) -> ModuleConsensus {
        let outcome = self.builder.build(statements);

        if !outcome.excluded.is_empty() {
            let ids: Vec<&str> = outcome
                .excluded
                .iter()
                .map(|e| e.statement_id.as_str())
                .collect();
            events::statements_excluded(module_id, &ids);
        }

        let consensus = consensus_percentage(&outcome.clusters);
        let status = ConsensusStatus::classify(consensus, outcome.valid_count, &self.config);

        events::consensus_computed(
            module_id,
            outcome.valid_count,
            outcome.excluded.len(),
            outcome.clusters.len(),
            consensus,
            status.as_str(),
        );

        ModuleConsensus {
            module_id: module_id.to_string(),
            clusters: outcome.clusters,
            consensus_percentage: consensus,
            status,
            total_statements: statements.len(),
            valid_statements: outcome.valid_count,
            excluded: outcome.excluded,
            computed_at: Utc::now(),
        }
    }

    /// Fetch a module's statements from the store and evaluate them.
    #[instrument(skip(self, store))]
    pub fn evaluate_module(
        &self,
        store: &dyn IStatementStore,
        module_id: &str,
    ) -> ConcordResult<ModuleConsensus> {
        let statements = store.statements_for_module(module_id)?;
        debug!(count = statements.len(), "statements fetched");
        Ok(self.evaluate(module_id, &statements))
    }

    /// Evaluate every module of a project.
    ///
    /// Modules come back most divergent first; modules without enough data
    /// are listed last.
    #[instrument(skip(self, projects, statements))]
    pub fn evaluate_project(
        &self,
        projects: &dyn IProjectStore,
        statements: &dyn IStatementStore,
        project_id: &str,
    ) -> ConcordResult<ProjectConsensus> {
        let project = projects
            .get_project(project_id)?
            .ok_or_else(|| ConcordError::ProjectNotFound {
                id: project_id.to_string(),
            })?;

        let mut modules = project
            .modules
            .iter()
            .map(|m| self.evaluate_module(statements, &m.id))
            .collect::<ConcordResult<Vec<_>>>()?;

        modules.sort_by(|a, b| {
            b.has_sufficient_data()
                .cmp(&a.has_sufficient_data())
                .then(a.consensus_percentage.total_cmp(&b.consensus_percentage))
        });

        let scored: Vec<f64> = modules
            .iter()
            .filter(|m| m.has_sufficient_data())
            .map(|m| m.consensus_percentage)
            .collect();
        let mean_consensus = if scored.is_empty() {
            0.0
        } else {
            scored.iter().sum::<f64>() / scored.len() as f64
        };

        info!(
            modules = modules.len(),
            scored = scored.len(),
            mean_consensus = format!("{:.1}", mean_consensus),
            "project consensus computed"
        );

        Ok(ProjectConsensus {
            project_id: project.id,
            modules,
            mean_consensus,
            computed_at: Utc::now(),
        })
    }
}
