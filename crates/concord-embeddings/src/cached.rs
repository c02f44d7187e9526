//! CachedEmbedder: caching, dimension-checking wrapper around a provider.

use std::time::Duration;

use tracing::debug;

use concord_core::config::EmbeddingConfig;
use concord_core::errors::{ConcordResult, EmbeddingError};
use concord_core::traits::IEmbeddingProvider;

use crate::cache::EmbeddingCache;

/// Wraps a provider with a content-addressed cache and output validation.
/// Implements `IEmbeddingProvider` so it can be used anywhere a provider is.
pub struct CachedEmbedder {
    inner: Box<dyn IEmbeddingProvider>,
    cache: EmbeddingCache,
    dimensions: usize,
}

impl CachedEmbedder {
    pub fn new(inner: Box<dyn IEmbeddingProvider>, config: &EmbeddingConfig) -> Self {
        Self {
            inner,
            cache: EmbeddingCache::new(config.cache_size, Duration::from_secs(config.cache_ttl_secs)),
            dimensions: config.dimensions,
        }
    }

    pub fn cache(&self) -> &EmbeddingCache {
        &self.cache
    }

    fn validate(&self, embedding: &[f32]) -> ConcordResult<()> {
        if embedding.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.len(),
            }
            .into());
        }
        if embedding.iter().any(|x| !x.is_finite()) {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("{} returned a non-finite component", self.inner.name()),
            }
            .into());
        }
        Ok(())
    }
}

impl IEmbeddingProvider for CachedEmbedder {
    fn embed(&self, text: &str) -> ConcordResult<Vec<f32>> {
        let key = EmbeddingCache::key(text);
        if let Some(hit) = self.cache.get(&key) {
            debug!(hash = %key, "embedding cache hit");
            return Ok(hit);
        }
        if !self.inner.is_available() {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: self.inner.name().to_string(),
            }
            .into());
        }
        let embedding = self.inner.embed(text)?;
        self.validate(&embedding)?;
        self.cache.insert(key, embedding.clone());
        Ok(embedding)
    }

    fn embed_batch(&self, texts: &[String]) -> ConcordResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_available(&self) -> bool {
        self.inner.is_available()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use concord_core::errors::ConcordError;

    struct CountingEmbedder {
        calls: Arc<AtomicUsize>,
        output: Vec<f32>,
    }

    impl IEmbeddingProvider for CountingEmbedder {
        fn embed(&self, _text: &str) -> ConcordResult<Vec<f32>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.output.clone())
        }
        fn dimensions(&self) -> usize {
            self.output.len()
        }
        fn name(&self) -> &str {
            "counting"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    fn embedder(output: Vec<f32>, dims: usize) -> (CachedEmbedder, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let inner = CountingEmbedder {
            calls: Arc::clone(&calls),
            output,
        };
        let config = EmbeddingConfig {
            dimensions: dims,
            ..Default::default()
        };
        (CachedEmbedder::new(Box::new(inner), &config), calls)
    }

    #[test]
    fn second_call_hits_the_cache() {
        let (embedder, calls) = embedder(vec![0.1, 0.2, 0.3], 3);
        assert_eq!(embedder.embed("same").unwrap(), vec![0.1, 0.2, 0.3]);
        assert_eq!(embedder.embed("same").unwrap(), vec![0.1, 0.2, 0.3]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn wrong_dimensions_are_rejected_and_not_cached() {
        let (embedder, calls) = embedder(vec![0.1, 0.2], 3);
        let err = embedder.embed("text").unwrap_err();
        assert!(matches!(
            err,
            ConcordError::EmbeddingError(EmbeddingError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        ));
        assert!(embedder.embed("text").is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn non_finite_output_is_rejected() {
        let (embedder, _) = embedder(vec![f32::NAN, 0.0], 2);
        assert!(embedder.embed("text").is_err());
    }
}
