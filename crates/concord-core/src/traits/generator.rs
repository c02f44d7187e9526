use crate::errors::ConcordResult;

/// Generative-text provider. Only narrates results that were already computed.
pub trait ITextGenerator: Send + Sync {
    /// Produce text for a prompt.
    fn generate(&self, prompt: &str) -> ConcordResult<String>;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
