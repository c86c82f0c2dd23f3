//! Integration tests for the mandatory augmentation fallback.
//!
//! Whatever the augmentation service does (fail, stall, return garbage),
//! extraction must still succeed with the heuristic-only result and the
//! failure must never reach the caller as an error.

use std::sync::Arc;
use std::time::Duration;

use resume_tailor::adapters::{MockAugmentationClient, MockFailure};
use resume_tailor::application::RequirementsExtractor;
use resume_tailor::domain::requirements::{
    AugmentedRequirements, ExtractError, ExtractionMethod,
};

const POSTING: &str = "\
Requirements:
- 3+ years of Rust
- Master's degree preferred";

fn expect_heuristic_fallback(
    reqs: &resume_tailor::domain::requirements::JobRequirements,
) {
    assert_eq!(reqs.extraction_method, ExtractionMethod::Heuristic);
    assert!(reqs.required_skills.contains("rust"));
    assert_eq!(reqs.years_experience, Some(3));
}

#[tokio::test]
async fn network_failure_falls_back() {
    let client = Arc::new(
        MockAugmentationClient::new().with_failure(MockFailure::Network {
            message: "connection refused".to_string(),
        }),
    );
    let extractor = RequirementsExtractor::new().with_augmentation(client);

    let reqs = extractor.extract(POSTING).await.unwrap();
    expect_heuristic_fallback(&reqs);
}

#[tokio::test]
async fn malformed_response_falls_back() {
    let client = Arc::new(
        MockAugmentationClient::new().with_failure(MockFailure::Parse {
            message: "no JSON object in response".to_string(),
        }),
    );
    let extractor = RequirementsExtractor::new().with_augmentation(client);

    let reqs = extractor.extract(POSTING).await.unwrap();
    expect_heuristic_fallback(&reqs);
}

#[tokio::test]
async fn authentication_failure_falls_back() {
    let client = Arc::new(
        MockAugmentationClient::new().with_failure(MockFailure::AuthenticationFailed),
    );
    let extractor = RequirementsExtractor::new().with_augmentation(client);

    let reqs = extractor.extract(POSTING).await.unwrap();
    expect_heuristic_fallback(&reqs);
}

#[tokio::test]
async fn stalled_service_times_out_and_falls_back() {
    let client = Arc::new(
        MockAugmentationClient::new()
            .with_requirements(AugmentedRequirements {
                required_skills: vec!["never-delivered".to_string()],
                ..Default::default()
            })
            .with_delay(Duration::from_secs(5)),
    );
    let extractor = RequirementsExtractor::new()
        .with_augmentation(client)
        .with_augmentation_timeout(Duration::from_millis(20));

    let reqs = extractor.extract(POSTING).await.unwrap();
    expect_heuristic_fallback(&reqs);
    assert!(!reqs.required_skills.contains("never-delivered"));
}

#[tokio::test]
async fn empty_input_is_the_only_fatal_extraction_error() {
    let client = Arc::new(MockAugmentationClient::new());
    let extractor = RequirementsExtractor::new().with_augmentation(client.clone());

    assert_eq!(
        extractor.extract("").await,
        Err(ExtractError::EmptyInput)
    );
    // The augmentation service is never consulted for blank input.
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn recovery_after_failure_produces_hybrid() {
    let client = Arc::new(
        MockAugmentationClient::new()
            .with_failure(MockFailure::Unavailable {
                message: "503".to_string(),
            })
            .with_requirements(AugmentedRequirements {
                required_skills: vec!["tokio".to_string()],
                ..Default::default()
            }),
    );
    let extractor = RequirementsExtractor::new().with_augmentation(client);

    let first = extractor.extract(POSTING).await.unwrap();
    assert_eq!(first.extraction_method, ExtractionMethod::Heuristic);

    let second = extractor.extract(POSTING).await.unwrap();
    assert_eq!(second.extraction_method, ExtractionMethod::Hybrid);
    assert!(second.required_skills.contains("tokio"));
}
