/// Text generation subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation failed: {reason}")]
    GenerationFailed { reason: String },

    #[error("generator unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("generator returned empty output")]
    EmptyOutput,
}
