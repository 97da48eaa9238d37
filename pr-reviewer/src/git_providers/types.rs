//! Data model for pull requests and their changed files.
//!
//! These types are the normalized output of the provider layer and are
//! consumed by the later stages (diff assembly, prompting, publishing).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A unique reference to a pull request inside a host.
///
/// * `repo`   – "owner/repo" full name as reported by the webhook payload.
/// * `number` – pull request number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestId {
    pub repo: String,
    pub number: u64,
}

/// High-level metadata for a pull request (title, state, URLs).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestMeta {
    pub id: PullRequestId,
    pub title: String,
    pub state: String,
    pub author: Option<String>,
    pub web_url: String,
    pub head_sha: String,
    pub base_sha: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One file changed in the pull request snapshot.
///
/// `patch` is absent when the host provides none (binary files, files with
/// unchanged content); such files carry nothing to review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangedFile {
    pub filename: String,
    pub patch: Option<String>,
}
