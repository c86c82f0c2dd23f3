//! Hashing Embedder - dependency-free bag-of-words vectors.
//!
//! Tokenizes text, hashes each token into a fixed number of buckets, and
//! L2-normalizes the bucket counts. Far weaker than a learned embedding
//! model, but deterministic, instant, and good enough to give the semantic
//! component a real signal on keyword-heavy text like resumes and postings.

use crate::ports::{EmbeddingError, EmbeddingProvider};

/// Default vector dimension.
pub const DEFAULT_DIMENSION: usize = 256;

/// Minimum accepted dimension.
const MIN_DIMENSION: usize = 8;

/// Minimum token length kept; single characters carry no signal.
const MIN_TOKEN_LEN: usize = 2;

/// Local feature-hashing embedding backend.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimension: usize,
}

impl HashingEmbedder {
    /// Creates an embedder with the default dimension.
    pub fn new() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
        }
    }

    /// Sets the vector dimension (floored at a usable minimum).
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension.max(MIN_DIMENSION);
        self
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddingProvider for HashingEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut buckets = vec![0.0f32; self.dimension];

        for token in tokenize(text) {
            let bucket = (fnv1a(token) % self.dimension as u64) as usize;
            buckets[bucket] += 1.0;
        }

        let norm = buckets.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut buckets {
                *value /= norm;
            }
        }

        Ok(buckets)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Splits lowercased text into alphanumeric tokens.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() >= MIN_TOKEN_LEN)
}

/// FNV-1a, fixed-seed so vectors are stable across processes.
fn fnv1a(token: &str) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for byte in token.to_lowercase().as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}
