//! RequirementsExtractor - heuristic extraction with optional augmentation.
//!
//! The heuristic pass always runs. When an augmentation client is injected,
//! its result is merged in; any augmentation failure (timeout, network,
//! unparsable payload) is absorbed into the heuristic-only result and never
//! surfaced to the caller.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::requirements::{
    merge, ExtractError, HeuristicExtractor, JobRequirements, SkillVocabulary,
};
use crate::ports::AugmentationClient;

/// Default bound on the augmentation call.
const DEFAULT_AUGMENTATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Extraction front door for the tailoring pipeline.
pub struct RequirementsExtractor {
    heuristic: HeuristicExtractor,
    augmentation: Option<Arc<dyn AugmentationClient>>,
    augmentation_timeout: Duration,
}

impl RequirementsExtractor {
    /// Creates a heuristic-only extractor over the built-in vocabulary.
    pub fn new() -> Self {
        Self::with_vocabulary(SkillVocabulary::builtin())
    }

    /// Creates a heuristic-only extractor over a custom vocabulary.
    pub fn with_vocabulary(vocabulary: SkillVocabulary) -> Self {
        Self {
            heuristic: HeuristicExtractor::new(vocabulary),
            augmentation: None,
            augmentation_timeout: DEFAULT_AUGMENTATION_TIMEOUT,
        }
    }

    /// Injects an augmentation client.
    pub fn with_augmentation(mut self, client: Arc<dyn AugmentationClient>) -> Self {
        self.augmentation = Some(client);
        self
    }

    /// Bounds the augmentation call; the fallback fires on expiry.
    pub fn with_augmentation_timeout(mut self, timeout: Duration) -> Self {
        self.augmentation_timeout = timeout;
        self
    }

    /// Extracts structured requirements from raw posting text.
    ///
    /// Fails only on blank input. Augmentation failures downgrade to the
    /// heuristic-only result.
    pub async fn extract(&self, text: &str) -> Result<JobRequirements, ExtractError> {
        let heuristic = self.heuristic.extract(text)?;

        let Some(client) = &self.augmentation else {
            return Ok(heuristic);
        };

        match tokio::time::timeout(self.augmentation_timeout, client.extract_requirements(text))
            .await
        {
            Ok(Ok(augmented)) => {
                debug!(
                    augmented_skills =
                        augmented.required_skills.len() + augmented.preferred_skills.len(),
                    "merging augmented extraction"
                );
                Ok(merge(heuristic, &augmented))
            }
            Ok(Err(err)) => {
                warn!(error = %err, "augmentation failed, falling back to heuristic extraction");
                Ok(heuristic)
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.augmentation_timeout.as_secs(),
                    "augmentation timed out, falling back to heuristic extraction"
                );
                Ok(heuristic)
            }
        }
    }
}

impl Default for RequirementsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockAugmentationClient, MockFailure};
    use crate::domain::requirements::{AugmentedRequirements, ExtractionMethod};

    const POSTING: &str = "\
Requirements:
- 5 years of Python experience
- PostgreSQL in production";

    #[tokio::test]
    async fn heuristic_only_without_client() {
        let extractor = RequirementsExtractor::new();
        let reqs = extractor.extract(POSTING).await.unwrap();

        assert_eq!(reqs.extraction_method, ExtractionMethod::Heuristic);
        assert!(reqs.required_skills.contains("python"));
        assert_eq!(reqs.years_experience, Some(5));
    }

    #[tokio::test]
    async fn blank_input_fails_even_with_client() {
        let client = Arc::new(MockAugmentationClient::new());
        let extractor = RequirementsExtractor::new().with_augmentation(client.clone());

        let result = extractor.extract("  \n ").await;
        assert_eq!(result, Err(ExtractError::EmptyInput));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn successful_augmentation_merges_to_hybrid() {
        let client = Arc::new(MockAugmentationClient::new().with_requirements(
            AugmentedRequirements {
                required_skills: vec!["kafka".to_string(), "PYTHON".to_string()],
                years_experience: Some(5),
                ..Default::default()
            },
        ));
        let extractor = RequirementsExtractor::new().with_augmentation(client);

        let reqs = extractor.extract(POSTING).await.unwrap();
        assert_eq!(reqs.extraction_method, ExtractionMethod::Hybrid);
        assert!(reqs.required_skills.contains("kafka"));
        // "PYTHON" deduplicates against the heuristic "python".
        assert_eq!(
            reqs.required_skills
                .iter()
                .filter(|s| s.eq_ignore_ascii_case("python"))
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn augmentation_failure_falls_back_to_heuristic() {
        let client = Arc::new(MockAugmentationClient::new().with_failure(MockFailure::Parse {
            message: "not json".to_string(),
        }));
        let extractor = RequirementsExtractor::new().with_augmentation(client);

        let reqs = extractor.extract(POSTING).await.unwrap();
        assert_eq!(reqs.extraction_method, ExtractionMethod::Heuristic);
        assert!(reqs.required_skills.contains("python"));
    }

    #[tokio::test]
    async fn slow_augmentation_times_out_to_heuristic() {
        let client = Arc::new(
            MockAugmentationClient::new()
                .with_requirements(AugmentedRequirements::default())
                .with_delay(Duration::from_millis(200)),
        );
        let extractor = RequirementsExtractor::new()
            .with_augmentation(client)
            .with_augmentation_timeout(Duration::from_millis(10));

        let reqs = extractor.extract(POSTING).await.unwrap();
        assert_eq!(reqs.extraction_method, ExtractionMethod::Heuristic);
    }
}
