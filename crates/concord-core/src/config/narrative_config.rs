use serde::{Deserialize, Serialize};

use super::defaults;

/// Narrative (summary / ADR) rendering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    /// Call the text generator. When false, only the plain rendering is produced.
    pub enabled: bool,
    /// Max member statements quoted per cluster in a prompt.
    pub max_prompt_statements: usize,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_NARRATIVE_ENABLED,
            max_prompt_statements: defaults::DEFAULT_MAX_PROMPT_STATEMENTS,
        }
    }
}
