//! Optional narrative layer: summaries and ADR drafts over computed results.
//!
//! The text generator only rephrases facts the engine already computed. When
//! it is disabled, absent, unavailable, or fails, a deterministic Markdown
//! rendering of the same facts is returned instead.

pub mod prompt;
pub mod render;

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use concord_core::config::NarrativeConfig;
use concord_core::errors::GenerationError;
use concord_core::models::{ModuleConsensus, Report, ReportKind};
use concord_core::traits::ITextGenerator;
use concord_observability::events;

/// A rendered narrative for one module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    pub kind: ReportKind,
    pub module_id: String,
    pub body: String,
    pub consensus_percentage: f64,
    /// True when the body came from the text generator.
    pub generated: bool,
}

impl Narrative {
    /// Turn this narrative into a persistable report record.
    pub fn into_report(self, id: impl Into<String>, project_id: impl Into<String>) -> Report {
        Report {
            id: id.into(),
            project_id: project_id.into(),
            module_id: Some(self.module_id),
            kind: self.kind,
            body: self.body,
            consensus_percentage: self.consensus_percentage,
            generated: self.generated,
            created_at: Utc::now(),
        }
    }
}

/// Tracks generated vs fallback narratives.
pub struct NarrativeStats {
    generated: AtomicUsize,
    fallback: AtomicUsize,
}

impl NarrativeStats {
    pub fn new() -> Self {
        Self {
            generated: AtomicUsize::new(0),
            fallback: AtomicUsize::new(0),
        }
    }

    pub fn record_generated(&self) {
        self.generated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallback.fetch_add(1, Ordering::Relaxed);
    }

    /// Fraction of narratives that came from the generator.
    pub fn generated_rate(&self) -> f64 {
        let g = self.generated.load(Ordering::Relaxed) as f64;
        let f = self.fallback.load(Ordering::Relaxed) as f64;
        let total = g + f;
        if total < f64::EPSILON {
            0.0
        } else {
            g / total
        }
    }

    pub fn generated_count(&self) -> usize {
        self.generated.load(Ordering::Relaxed)
    }

    pub fn fallback_count(&self) -> usize {
        self.fallback.load(Ordering::Relaxed)
    }
}

impl Default for NarrativeStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes summaries and ADR drafts, through the generator when possible.
pub struct NarrativeWriter {
    generator: Option<Box<dyn ITextGenerator>>,
    config: NarrativeConfig,
    stats: NarrativeStats,
}

impl NarrativeWriter {
    pub fn new(generator: Option<Box<dyn ITextGenerator>>, config: NarrativeConfig) -> Self {
        Self {
            generator,
            config,
            stats: NarrativeStats::new(),
        }
    }

    /// A writer that only ever produces the plain rendering.
    pub fn plain() -> Self {
        Self::new(None, NarrativeConfig::default())
    }

    pub fn stats(&self) -> &NarrativeStats {
        &self.stats
    }

    /// Summary of where the team stands on a module.
    pub fn summary(&self, module_name: &str, result: &ModuleConsensus) -> Narrative {
        let prompt = prompt::summary_prompt(module_name, result, self.config.max_prompt_statements);
        let fallback = || render::plain_summary(module_name, result);
        self.write(ReportKind::Summary, result, &prompt, fallback)
    }

    /// Architecture decision record draft for a module.
    pub fn adr(&self, module_name: &str, result: &ModuleConsensus) -> Narrative {
        let prompt = prompt::adr_prompt(module_name, result, self.config.max_prompt_statements);
        let fallback = || render::plain_adr(module_name, result);
        self.write(ReportKind::Adr, result, &prompt, fallback)
    }

    fn write(
        &self,
        kind: ReportKind,
        result: &ModuleConsensus,
        prompt: &str,
        fallback: impl FnOnce() -> String,
    ) -> Narrative {
        let (body, generated) = match self.try_generate(result, prompt) {
            Ok(text) => {
                self.stats.record_generated();
                (text, true)
            }
            Err(reason) => {
                events::narrative_fallback(kind_label(kind), &result.module_id, &reason);
                self.stats.record_fallback();
                (fallback(), false)
            }
        };
        Narrative {
            kind,
            module_id: result.module_id.clone(),
            body,
            consensus_percentage: result.consensus_percentage,
            generated,
        }
    }

    fn try_generate(&self, result: &ModuleConsensus, prompt: &str) -> Result<String, String> {
        if !self.config.enabled {
            return Err("narrative generation disabled".to_string());
        }
        if !result.has_sufficient_data() {
            return Err("insufficient data".to_string());
        }
        let generator = self
            .generator
            .as_deref()
            .ok_or_else(|| "no text generator configured".to_string())?;
        if !generator.is_available() {
            return Err(GenerationError::ProviderUnavailable {
                provider: generator.name().to_string(),
            }
            .to_string());
        }
        debug!(provider = generator.name(), prompt_len = prompt.len(), "generating narrative");
        let text = generator.generate(prompt).map_err(|e| e.to_string())?;
        let text = text.trim();
        if text.is_empty() {
            return Err(GenerationError::EmptyOutput.to_string());
        }
        Ok(text.to_string())
    }
}

fn kind_label(kind: ReportKind) -> &'static str {
    match kind {
        ReportKind::Summary => "summary",
        ReportKind::Adr => "adr",
    }
}
