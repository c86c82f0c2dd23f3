//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the core to external systems:
//! - `augment` - language-understanding extraction clients (LLM-backed, mock)
//! - `embedding` - semantic vector backends (local hashing, mock)

pub mod augment;
pub mod embedding;

pub use augment::{LlmExtractionClient, LlmExtractionConfig, MockAugmentationClient, MockFailure};
pub use embedding::{HashingEmbedder, MockEmbedder};
