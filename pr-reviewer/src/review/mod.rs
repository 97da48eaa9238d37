//! Review stages: diff assembly, prompt building, model invocation.

pub mod diff;
pub mod llm;
pub mod prompt;

pub use diff::{CollectedDiff, collect_diff};
pub use llm::generate_review;
pub use prompt::build_prompt;
