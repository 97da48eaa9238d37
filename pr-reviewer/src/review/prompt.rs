//! Prompt builder for the review model.
//!
//! Keep the prompt compact: a fixed reviewer instruction followed by the
//! raw diff blob.

/// Fixed system instruction prepended to every review prompt.
const SYSTEM_PROMPT: &str = "You are an expert software engineer and security reviewer. \
Review the following Git diff for bugs, logical flaws, security vulnerabilities, \
and adherence to best practices. Use a clear, bulleted list format. \
Provide constructive feedback and suggest specific code improvements. \
If the code is flawless, state only: '🤖 Review: LGTM (Looks Good To Me)'. \
Keep the review concise, limited to 5-7 points max.";

/// Builds the full prompt for a diff blob.
///
/// Pure and deterministic: the same diff always yields the same prompt.
/// Accepts any string, including empty.
pub fn build_prompt(diff: &str) -> String {
    format!("{SYSTEM_PROMPT}\n\nReview this code diff:\n\n{diff}")
}
