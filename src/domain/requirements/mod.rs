//! Job posting requirements extraction.
//!
//! Turns raw posting text into a structured [`JobRequirements`] value via a
//! local heuristic pass, optionally enriched by an external
//! language-understanding augmentation and merged with [`merge`].

mod augmented;
mod heuristic;
mod job_requirements;
mod sections;
mod vocabulary;

pub use augmented::{merge, AugmentedRequirements, AGREEMENT_BONUS};
pub use heuristic::{HeuristicExtractor, ExtractError, MAX_PLAUSIBLE_YEARS};
pub use job_requirements::{ExtractionMethod, JobRequirements};
pub use sections::{SectionKind, SegmentedPosting};
pub use vocabulary::SkillVocabulary;
