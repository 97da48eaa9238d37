//! Publisher: format the review into a comment and attach it to the PR.
//!
//! - One issue-style comment per invocation; no update-in-place and no
//!   dedup against earlier bot comments.
//! - Posting failures (permissions, deleted PR, network) are logged and
//!   swallowed; the caller's outcome is unaffected.

use tracing::{info, warn};

use crate::git_providers::{GitHubClient, PullRequestId};

/// Wraps the review text in the fixed header/attribution template.
pub fn format_comment(model: &str, review: &str) -> String {
    format!("## 🤖 AI Code Review Summary\n\n*(Powered by **{model}**)*\n\n{review}")
}

/// Posts `body` as an issue comment on the PR.
///
/// Returns whether the comment was created. Errors are logged at `warn`
/// and never propagate.
pub async fn publish(client: &GitHubClient, id: &PullRequestId, body: &str) -> bool {
    match client.create_issue_comment(id, body).await {
        Ok(comment_id) => {
            info!(
                "publish: posted review comment {} on {}#{}",
                comment_id, id.repo, id.number
            );
            true
        }
        Err(e) => {
            warn!("publish: failed for {}#{}: {e}", id.repo, id.number);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_wraps_review_in_template() {
        let body = format_comment("phi3:mini", "- consider renaming `x`");
        assert!(body.starts_with("## 🤖 AI Code Review Summary\n\n"));
        assert!(body.contains("*(Powered by **phi3:mini**)*"));
        assert!(body.ends_with("- consider renaming `x`"));
    }
}
