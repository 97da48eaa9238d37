//! Public entry for the pr-reviewer pipeline.
//!
//! Single high-level function to run the whole pipeline for a pull request:
//!
//! 1) **Resolve** — fetch PR metadata from the host (yields title/head SHA)
//! 2) **Collect** — fetch changed files and assemble the diff blob
//! 3) **Decide** — empty blob short-circuits to a fixed "no changes" comment,
//!    skipping model invocation
//! 4) **Generate** — build the prompt and call the model (fail-soft)
//! 5) **Publish** — post exactly one comment with whichever text was produced
//!
//! The pipeline uses `tracing` for debug logging and avoids `async-trait`
//! and heap trait objects (no `Box<dyn ...>`). Collaborators are plain
//! structs constructed by the caller and passed in by reference, so tests
//! can point them at mock servers.

pub mod errors;
pub mod git_providers;
pub mod publish;
pub mod review;

use std::time::Instant;

use ai_llm_service::OllamaService;
use tracing::{debug, info};

use errors::{Error, PrResult};
use git_providers::{GitHubClient, PullRequestId};

/// Comment body used when the PR carries no reviewable patch text.
pub const NO_CHANGES_MESSAGE: &str = "No code changes detected to review.";

/// Outcome summary of a single pipeline run.
#[derive(Debug, Clone)]
pub struct ReviewSummary {
    /// Title of the reviewed pull request.
    pub pr_title: String,
    /// Number of changed files that carried a reviewable patch.
    pub files_reviewed: usize,
    /// Whether the model stage was skipped because the diff was empty.
    pub short_circuited: bool,
    /// Whether the comment POST succeeded.
    pub comment_posted: bool,
}

/// Runs the full review pipeline for one pull request.
///
/// At most one comment is posted, regardless of which branch is taken.
/// All stages after resolution are fail-soft: a host outage during diff
/// collection degrades to the "no changes" comment, and a model failure
/// posts a failure-description comment instead of aborting.
///
/// # Errors
///
/// Only the initial metadata resolution propagates errors (unknown
/// repo/PR, bad token). Callers decide how to surface that; the webhook
/// layer treats it as a skipped event.
pub async fn run_review(
    github: &GitHubClient,
    llm: &OllamaService,
    id: &PullRequestId,
) -> PrResult<ReviewSummary> {
    let t0 = Instant::now();

    if !id.repo.contains('/') {
        return Err(Error::Validation(format!(
            "repository full name must be 'owner/repo', got '{}'",
            id.repo
        )));
    }

    debug!("review: resolve {}#{}", id.repo, id.number);
    let meta = github.get_meta(id).await?;
    debug!(
        "review: resolved '{}' head_sha={} state={}",
        meta.title, meta.head_sha, meta.state
    );

    let diff = review::collect_diff(github, id).await;

    let (review_text, short_circuited) = if diff.blob.is_empty() {
        debug!("review: empty diff, skipping model invocation");
        (NO_CHANGES_MESSAGE.to_string(), true)
    } else {
        let prompt = review::build_prompt(&diff.blob);
        debug!("review: prompt built ({} bytes)", prompt.len());
        (review::generate_review(llm, &prompt).await, false)
    };

    let body = publish::format_comment(llm.model(), &review_text);
    let comment_posted = publish::publish(github, id, &body).await;

    info!(
        "review: done for {}#{} files={} short_circuited={} posted={} in {} ms",
        id.repo,
        id.number,
        diff.files_with_patch,
        short_circuited,
        comment_posted,
        t0.elapsed().as_millis()
    );

    Ok(ReviewSummary {
        pr_title: meta.title,
        files_reviewed: diff.files_with_patch,
        short_circuited,
        comment_posted,
    })
}
