use ai_llm_service::{LlmModelConfig, OllamaService};
use pr_reviewer::git_providers::{GitHubClient, ProviderConfig};

use crate::error_handler::{AppError, AppResult};

/// Shared state for all HTTP handlers.
///
/// Collaborator clients are built once at startup and used read-only by
/// every request; no handler mutates them.
pub struct AppState {
    /// GitHub API client authenticated with the process token.
    pub github: GitHubClient,
    /// Ollama client used for review generation.
    pub llm: OllamaService,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// `GITHUB_TOKEN` is required; everything else has a default.
    pub fn from_env() -> AppResult<Self> {
        let token =
            std::env::var("GITHUB_TOKEN").map_err(|_| AppError::MissingEnv("GITHUB_TOKEN"))?;
        let base_api = std::env::var("GITHUB_API_BASE")
            .unwrap_or_else(|_| "https://api.github.com".into());

        let github = GitHubClient::from_config(ProviderConfig { base_api, token })
            .map_err(|e| AppError::ClientInit(e.to_string()))?;

        let llm_cfg = LlmModelConfig {
            model: std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "phi3:mini".into()),
            // Prefer explicit OLLAMA_URL, fallback to localhost:OLLAMA_PORT
            endpoint: std::env::var("OLLAMA_URL").unwrap_or_else(|_| {
                let port = std::env::var("OLLAMA_PORT").unwrap_or_else(|_| "11434".into());
                format!("http://localhost:{port}")
            }),
            max_tokens: None,
            // Deterministic, reproducible reviews.
            temperature: Some(0.0),
            timeout_secs: std::env::var("OLLAMA_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
        };
        let llm = OllamaService::new(llm_cfg).map_err(|e| AppError::ClientInit(e.to_string()))?;

        Ok(Self { github, llm })
    }
}
