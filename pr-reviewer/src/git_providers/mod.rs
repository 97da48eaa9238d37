//! Provider facade w/o async-trait or dynamic trait objects.
//!
//! GitHub is the only supported host; the concrete [`GitHubClient`] is
//! constructed from a [`ProviderConfig`] and handed to the pipeline as an
//! explicit collaborator. Keeping the client a plain struct keeps async
//! fns simple and avoids boxing futures.

pub mod types;
pub use types::*;

pub mod github;
pub use github::GitHubClient;

use crate::errors::PrResult;

/// Runtime configuration for the provider client.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API base, e.g. "https://api.github.com"
    pub base_api: String,
    /// Access token for the provider (PAT or app token).
    pub token: String,
}

impl GitHubClient {
    /// Constructs a client from generic config with a shared reqwest instance.
    pub fn from_config(cfg: ProviderConfig) -> PrResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent("pr-review-bot/0.1")
            .build()?;
        Ok(GitHubClient::new(client, cfg.base_api, cfg.token))
    }
}
