use serde::Deserialize;

/// Inbound GitHub webhook payload.
///
/// Every field is optional: deliveries for other event kinds carry
/// different shapes, and the route decides what is missing rather than
/// rejecting at the deserializer.
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    /// Action within the event, e.g. "opened", "synchronize", "closed".
    pub action: Option<String>,
    /// Pull request block, present on pull_request events.
    pub pull_request: Option<PullRequestRef>,
    /// Repository the event originated from.
    pub repository: Option<RepositoryRef>,
}

#[derive(Debug, Deserialize)]
pub struct PullRequestRef {
    /// Pull request number.
    pub number: u64,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryRef {
    /// "owner/repo" full name.
    pub full_name: String,
}
