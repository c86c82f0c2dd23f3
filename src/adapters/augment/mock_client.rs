//! Mock Augmentation Client for testing.
//!
//! Configurable to return queued payloads, inject failures, and simulate
//! latency, so extraction and fallback paths can be exercised without a
//! real language-understanding service.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::requirements::AugmentedRequirements;
use crate::ports::{AugmentationClient, AugmentationError};

/// A scripted mock response.
#[derive(Debug, Clone)]
enum MockResponse {
    Success(AugmentedRequirements),
    Error(MockFailure),
}

/// Failure modes the mock can inject.
#[derive(Debug, Clone)]
pub enum MockFailure {
    Timeout { timeout_secs: u32 },
    Network { message: String },
    Parse { message: String },
    AuthenticationFailed,
    Unavailable { message: String },
}

impl From<MockFailure> for AugmentationError {
    fn from(failure: MockFailure) -> Self {
        match failure {
            MockFailure::Timeout { timeout_secs } => AugmentationError::Timeout { timeout_secs },
            MockFailure::Network { message } => AugmentationError::network(message),
            MockFailure::Parse { message } => AugmentationError::parse(message),
            MockFailure::AuthenticationFailed => AugmentationError::AuthenticationFailed,
            MockFailure::Unavailable { message } => AugmentationError::unavailable(message),
        }
    }
}

/// Mock augmentation client.
///
/// Responses are consumed in order; an exhausted queue reports the service
/// as unavailable, which exercises the same fallback path as a real outage.
#[derive(Debug, Clone, Default)]
pub struct MockAugmentationClient {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAugmentationClient {
    /// Creates a mock with an empty response queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful payload.
    pub fn with_requirements(self, requirements: AugmentedRequirements) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Success(requirements));
        self
    }

    /// Queues a failure.
    pub fn with_failure(self, failure: MockFailure) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Error(failure));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the posting texts received so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AugmentationClient for MockAugmentationClient {
    async fn extract_requirements(
        &self,
        text: &str,
    ) -> Result<AugmentedRequirements, AugmentationError> {
        self.calls.lock().unwrap().push(text.to_string());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(MockResponse::Success(requirements)) => Ok(requirements),
            Some(MockResponse::Error(failure)) => Err(failure.into()),
            None => Err(AugmentationError::unavailable("mock queue exhausted")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> AugmentedRequirements {
        AugmentedRequirements {
            required_skills: vec!["rust".to_string()],
            years_experience: Some(3),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn returns_queued_payloads_in_order() {
        let mock = MockAugmentationClient::new()
            .with_requirements(payload())
            .with_failure(MockFailure::AuthenticationFailed);

        let first = mock.extract_requirements("posting").await.unwrap();
        assert_eq!(first.years_experience, Some(3));

        let second = mock.extract_requirements("posting").await;
        assert!(matches!(
            second,
            Err(AugmentationError::AuthenticationFailed)
        ));
    }

    #[tokio::test]
    async fn exhausted_queue_reports_unavailable() {
        let mock = MockAugmentationClient::new();
        let result = mock.extract_requirements("posting").await;
        assert!(matches!(result, Err(AugmentationError::Unavailable { .. })));
    }

    #[tokio::test]
    async fn records_calls() {
        let mock = MockAugmentationClient::new()
            .with_requirements(payload())
            .with_requirements(payload());

        mock.extract_requirements("first").await.unwrap();
        mock.extract_requirements("second").await.unwrap();

        assert_eq!(mock.call_count(), 2);
        assert_eq!(mock.calls(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn delay_is_applied() {
        let mock = MockAugmentationClient::new()
            .with_requirements(payload())
            .with_delay(Duration::from_millis(20));

        let started = std::time::Instant::now();
        mock.extract_requirements("posting").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
