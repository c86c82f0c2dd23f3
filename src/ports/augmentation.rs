//! Augmentation Port - Interface for language-understanding extraction.
//!
//! The augmentation client sends posting text to an external
//! language-understanding service and returns the structured fields it
//! extracted. Every failure mode here is recoverable by contract: the
//! orchestrator absorbs errors into a heuristic-only fallback and never
//! surfaces them to the end user.

use async_trait::async_trait;

use crate::domain::requirements::AugmentedRequirements;

/// Port for external requirements extraction.
///
/// Implementations connect to an LLM or comparable service and translate
/// between its API and [`AugmentedRequirements`]. The call is the
/// pipeline's sole suspension point and must respect the configured
/// timeout.
#[async_trait]
pub trait AugmentationClient: Send + Sync {
    /// Extracts structured requirements from raw posting text.
    async fn extract_requirements(
        &self,
        text: &str,
    ) -> Result<AugmentedRequirements, AugmentationError>;
}

/// Augmentation failure modes.
///
/// All variants are absorbed by the fallback policy; none is fatal.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AugmentationError {
    /// Request exceeded the configured timeout.
    #[error("augmentation request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },

    /// Network failure reaching the service.
    #[error("augmentation network error: {0}")]
    Network(String),

    /// Response arrived but could not be parsed into structured fields.
    #[error("augmentation response unparsable: {0}")]
    Parse(String),

    /// API key rejected.
    #[error("augmentation authentication failed")]
    AuthenticationFailed,

    /// Service refused or errored.
    #[error("augmentation service unavailable: {message}")]
    Unavailable { message: String },
}

impl AugmentationError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
