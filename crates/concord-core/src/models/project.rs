use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named module whose understandings are tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A project groups the modules a team reasons about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub modules: Vec<ModuleRecord>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn module(&self, module_id: &str) -> Option<&ModuleRecord> {
        self.modules.iter().find(|m| m.id == module_id)
    }
}
