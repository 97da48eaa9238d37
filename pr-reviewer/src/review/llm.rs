//! Model invocation with fail-soft degradation.
//!
//! A single generation attempt per pipeline run, no retries. Any model
//! failure is converted into a human-readable failure message so the
//! pipeline always has some text to post.

use ai_llm_service::OllamaService;
use tracing::{debug, warn};

/// Sends the prompt to the model and returns the review text.
///
/// On success the model's raw response is returned unmodified. If the
/// model is unreachable, times out or errors, a synthesized failure
/// message naming the error is returned instead; this function never
/// fails.
pub async fn generate_review(llm: &OllamaService, prompt: &str) -> String {
    debug!("llm: sending diff to {} for analysis", llm.model());
    match llm.generate(prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("llm: generation failed: {e}");
            format!(
                "🚨 AI Review Failed: Could not get a response from the AI model. \
                 Check your connection and ensure the model is running. Error: {e}"
            )
        }
    }
}
