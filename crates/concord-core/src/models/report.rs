use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Summary,
    Adr,
}

/// A persisted narrative over a consensus result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_id: Option<String>,
    pub kind: ReportKind,
    pub body: String,
    pub consensus_percentage: f64,
    /// Whether the body came from the text generator rather than the plain rendering.
    pub generated: bool,
    pub created_at: DateTime<Utc>,
}
