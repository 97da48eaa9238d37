//! GitHub provider (REST v3) for PR metadata, changed files and comments.
//!
//! Endpoints used:
//! - GET  /repos/{owner}/{repo}/pulls/{number}
//! - GET  /repos/{owner}/{repo}/pulls/{number}/files  (field "patch" is unified diff)
//! - POST /repos/{owner}/{repo}/issues/{number}/comments

use crate::errors::{PrResult, ProviderError};
use crate::git_providers::types::*;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Page size for the `/files` endpoint; GitHub caps it at 100.
const FILES_PER_PAGE: usize = 100;

#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_api: String, // "https://api.github.com"
    token: String,    // PAT or app installation token
}

impl GitHubClient {
    /// Constructs a GitHub client with a shared reqwest instance and auth token.
    pub fn new(http: Client, base_api: String, token: String) -> Self {
        Self {
            http,
            base_api,
            token,
        }
    }

    fn get(&self, url: String) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
    }

    /// Fetches PR metadata. Resolves the repo/PR pair and yields head/base SHAs.
    pub async fn get_meta(&self, id: &PullRequestId) -> PrResult<PullRequestMeta> {
        let url = format!("{}/repos/{}/pulls/{}", self.base_api, id.repo, id.number);
        let resp: GitHubPull = self
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(PullRequestMeta {
            id: id.clone(),
            title: resp.title,
            state: resp.state,
            author: resp.user.map(|u| u.login),
            web_url: resp.html_url,
            head_sha: resp.head.sha,
            base_sha: resp.base.sha,
            created_at: resp.created_at,
            updated_at: resp.updated_at,
        })
    }

    /// Fetches the changed files for a PR, following pagination until a
    /// short page. Files without a `patch` field are kept as-is; the
    /// caller decides what to do with them.
    pub async fn list_changed_files(&self, id: &PullRequestId) -> PrResult<Vec<ChangedFile>> {
        let mut files = Vec::new();
        let mut page = 1usize;

        loop {
            let url = format!(
                "{}/repos/{}/pulls/{}/files?per_page={}&page={}",
                self.base_api, id.repo, id.number, FILES_PER_PAGE, page
            );
            let batch: Vec<GitHubFile> = self
                .get(url)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            let n = batch.len();
            files.extend(batch.into_iter().map(|f| ChangedFile {
                filename: f.filename,
                patch: f.patch,
            }));

            if n < FILES_PER_PAGE {
                break;
            }
            page += 1;
        }

        debug!("github: listed {} changed files for {}#{}", files.len(), id.repo, id.number);
        Ok(files)
    }

    /// Creates an issue-style comment on the PR.
    ///
    /// Note that PR-wide comments live on the issues endpoint, not the
    /// pulls one.
    pub async fn create_issue_comment(&self, id: &PullRequestId, body: &str) -> PrResult<u64> {
        let url = format!(
            "{}/repos/{}/issues/{}/comments",
            self.base_api, id.repo, id.number
        );
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .json(&CommentRequest { body })
            .send()
            .await?;

        if !resp.status().is_success() {
            let code = resp.status().as_u16();
            return Err(match code {
                401 => ProviderError::Unauthorized,
                403 => ProviderError::Forbidden,
                404 => ProviderError::NotFound,
                429 => ProviderError::RateLimited,
                500..=599 => ProviderError::Server(code),
                _ => ProviderError::HttpStatus(code),
            }
            .into());
        }

        let created: CommentResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;
        Ok(created.id)
    }
}

/* ==========================
GitHub REST payloads
========================== */

#[derive(Debug, Deserialize)]
struct GitHubPull {
    title: String,
    state: String,
    html_url: String,
    user: Option<GitHubUser>,
    head: GitHubRef,
    base: GitHubRef,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct GitHubUser {
    login: String,
}

#[derive(Debug, Deserialize)]
struct GitHubRef {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct GitHubFile {
    filename: String,
    #[serde(default)]
    patch: Option<String>,
}

#[derive(Debug, Serialize)]
struct CommentRequest<'a> {
    body: &'a str,
}

#[derive(Debug, Deserialize)]
struct CommentResponse {
    id: u64,
}
