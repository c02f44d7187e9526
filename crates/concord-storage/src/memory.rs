use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use concord_core::errors::{ConcordError, ConcordResult, StorageError};
use concord_core::models::{Project, Report, Statement};
use concord_core::traits::{IProjectStore, IReportStore, IStatementStore};

/// Concurrent in-memory store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    statements: DashMap<String, Statement>,
    /// module id → statement ids in creation order.
    by_module: DashMap<String, Vec<String>>,
    projects: DashMap<String, Project>,
    reports: DashMap<String, Report>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statement_count(&self) -> usize {
        self.statements.len()
    }
}

fn duplicate(kind: &str, id: &str) -> ConcordError {
    StorageError::Duplicate {
        kind: kind.to_string(),
        id: id.to_string(),
    }
    .into()
}

impl IStatementStore for InMemoryStore {
    fn create_statement(&self, statement: &Statement) -> ConcordResult<()> {
        match self.statements.entry(statement.id.clone()) {
            Entry::Occupied(_) => return Err(duplicate("statement", &statement.id)),
            Entry::Vacant(slot) => {
                slot.insert(statement.clone());
            }
        }
        self.by_module
            .entry(statement.module_id.clone())
            .or_default()
            .push(statement.id.clone());
        debug!(id = %statement.id, module_id = %statement.module_id, "statement stored");
        Ok(())
    }

    fn get_statement(&self, id: &str) -> ConcordResult<Option<Statement>> {
        Ok(self.statements.get(id).map(|s| s.value().clone()))
    }

    fn statements_for_module(&self, module_id: &str) -> ConcordResult<Vec<Statement>> {
        let ids = match self.by_module.get(module_id) {
            Some(ids) => ids.value().clone(),
            None => return Ok(Vec::new()),
        };
        Ok(ids
            .iter()
            .filter_map(|id| self.statements.get(id).map(|s| s.value().clone()))
            .collect())
    }

    fn count_for_module(&self, module_id: &str) -> ConcordResult<usize> {
        Ok(self.by_module.get(module_id).map_or(0, |ids| ids.len()))
    }
}

impl IProjectStore for InMemoryStore {
    fn create_project(&self, project: &Project) -> ConcordResult<()> {
        match self.projects.entry(project.id.clone()) {
            Entry::Occupied(_) => Err(duplicate("project", &project.id)),
            Entry::Vacant(slot) => {
                slot.insert(project.clone());
                Ok(())
            }
        }
    }

    fn get_project(&self, id: &str) -> ConcordResult<Option<Project>> {
        Ok(self.projects.get(id).map(|p| p.value().clone()))
    }

    fn list_projects(&self) -> ConcordResult<Vec<Project>> {
        let mut projects: Vec<Project> = self.projects.iter().map(|p| p.value().clone()).collect();
        projects.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(projects)
    }

    fn delete_project(&self, id: &str) -> ConcordResult<()> {
        self.projects
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ConcordError::ProjectNotFound { id: id.to_string() })
    }
}

impl IReportStore for InMemoryStore {
    fn save_report(&self, report: &Report) -> ConcordResult<()> {
        match self.reports.entry(report.id.clone()) {
            Entry::Occupied(_) => Err(duplicate("report", &report.id)),
            Entry::Vacant(slot) => {
                slot.insert(report.clone());
                Ok(())
            }
        }
    }

    fn get_report(&self, id: &str) -> ConcordResult<Option<Report>> {
        Ok(self.reports.get(id).map(|r| r.value().clone()))
    }

    fn reports_for_project(&self, project_id: &str) -> ConcordResult<Vec<Report>> {
        let mut reports: Vec<Report> = self
            .reports
            .iter()
            .filter(|r| r.project_id == project_id)
            .map(|r| r.value().clone())
            .collect();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(reports)
    }
}
