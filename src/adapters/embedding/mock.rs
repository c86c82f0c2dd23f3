//! Mock embedding backend for testing.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::{EmbeddingError, EmbeddingProvider};

/// Mock embedder returning pre-configured vectors per text.
///
/// Unknown texts fall back to the default vector when one is set, otherwise
/// embedding fails and callers must treat it as a soft miss.
#[derive(Debug, Default)]
pub struct MockEmbedder {
    vectors: Mutex<HashMap<String, Vec<f32>>>,
    default: Option<Vec<f32>>,
    fail: bool,
}

impl MockEmbedder {
    /// Creates a mock with no configured vectors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins a vector for an exact text.
    pub fn with_vector(self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.vectors.lock().unwrap().insert(text.into(), vector);
        self
    }

    /// Sets the fallback vector for unknown texts.
    pub fn with_default(mut self, vector: Vec<f32>) -> Self {
        self.default = Some(vector);
        self
    }

    /// Makes every embed call fail.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl EmbeddingProvider for MockEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if self.fail {
            return Err(EmbeddingError::Unavailable("mock backend down".to_string()));
        }

        if let Some(vector) = self.vectors.lock().unwrap().get(text) {
            return Ok(vector.clone());
        }

        self.default
            .clone()
            .ok_or_else(|| EmbeddingError::Failed(format!("no vector configured for {:?}", text)))
    }

    fn dimension(&self) -> usize {
        3
    }
}
