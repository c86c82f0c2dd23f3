//! Augmentation client adapters.
//!
//! ## Available Adapters
//!
//! - `LlmExtractionClient` - messages-API LLM extraction over HTTP
//! - `MockAugmentationClient` - configurable mock for testing

mod llm_client;
mod mock_client;

pub use llm_client::{LlmExtractionClient, LlmExtractionConfig};
pub use mock_client::{MockAugmentationClient, MockFailure};
