use serde::Serialize;

/// Response body returned for every accepted webhook delivery.
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    /// Human-readable message describing what happened.
    pub message: String,
}
