//! Embedding Port - Interface for the semantic vector backend.
//!
//! Embedding is synchronous by design: backends are in-process models or
//! local services, and the pipeline's only suspension point stays the
//! augmentation call. When no backend is injected, or embedding fails, the
//! semantic component degrades to 0.0 rather than erroring.

/// Port for text embedding.
pub trait EmbeddingProvider: Send + Sync {
    /// Embeds text into a fixed-dimension vector.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Dimension of the vectors this backend produces.
    fn dimension(&self) -> usize;
}

/// Embedding failure modes; always treated as soft by callers.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EmbeddingError {
    /// Backend is not ready or reachable.
    #[error("embedding backend unavailable: {0}")]
    Unavailable(String),

    /// Backend rejected or failed on this input.
    #[error("failed to embed text: {0}")]
    Failed(String),
}
