use crate::errors::ConcordResult;
use crate::models::{Project, Report, Statement};

/// Statement records. Statements are never updated once created.
pub trait IStatementStore: Send + Sync {
    fn create_statement(&self, statement: &Statement) -> ConcordResult<()>;
    fn get_statement(&self, id: &str) -> ConcordResult<Option<Statement>>;
    /// Every statement recorded for a module, oldest first.
    fn statements_for_module(&self, module_id: &str) -> ConcordResult<Vec<Statement>>;
    fn count_for_module(&self, module_id: &str) -> ConcordResult<usize>;
}

/// Project records.
pub trait IProjectStore: Send + Sync {
    fn create_project(&self, project: &Project) -> ConcordResult<()>;
    fn get_project(&self, id: &str) -> ConcordResult<Option<Project>>;
    fn list_projects(&self) -> ConcordResult<Vec<Project>>;
    fn delete_project(&self, id: &str) -> ConcordResult<()>;
}

/// Narrative reports.
pub trait IReportStore: Send + Sync {
    fn save_report(&self, report: &Report) -> ConcordResult<()>;
    fn get_report(&self, id: &str) -> ConcordResult<Option<Report>>;
    /// Reports of a project, newest first.
    fn reports_for_project(&self, project_id: &str) -> ConcordResult<Vec<Report>>;
}
