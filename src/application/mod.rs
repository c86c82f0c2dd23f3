//! Application layer - services composing the domain with injected ports.
//!
//! - `RequirementsExtractor` - heuristic extraction plus optional augmentation
//! - `MatchingEngine` - multi-factor scoring and constrained selection
//! - `TailoringService` - the extract, score, select, analyze pipeline

mod matching_engine;
mod requirements_extractor;
mod tailoring_service;

pub use matching_engine::MatchingEngine;
pub use requirements_extractor::RequirementsExtractor;
pub use tailoring_service::{TailoringError, TailoringRequest, TailoringService};
