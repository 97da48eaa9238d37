use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::HeaderMap,
};
use pr_reviewer::{git_providers::PullRequestId, run_review};
use tracing::{error, info, instrument, warn};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::webhook::{webhook_payload::WebhookPayload, webhook_response::WebhookResponse},
};

/// Actions that trigger a review; everything else is acknowledged and
/// dropped.
const REVIEWED_ACTIONS: [&str; 2] = ["opened", "synchronize"];

/// POST /webhook
///
/// Inbound boundary for GitHub webhook deliveries.
///
/// - 400 when the `X-GitHub-Event` header is missing or the body is not
///   valid JSON; the pipeline is never started.
/// - 200 "Event ignored" for anything that is not a pull_request
///   opened/synchronize delivery.
/// - Otherwise the review pipeline runs to completion before the response
///   is returned. The sender may see a slow response while the model
///   works; that is a deliberate simplification.
#[instrument(name = "webhook_route", skip(state, headers, body))]
pub async fn webhook_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> AppResult<Json<WebhookResponse>> {
    let event_type = headers
        .get("X-GitHub-Event")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("missing X-GitHub-Event header".into()))?;

    let payload: WebhookPayload = serde_json::from_str(&body)
        .map_err(|e| AppError::BadRequest(format!("invalid JSON payload: {e}")))?;

    let action = payload.action.as_deref().unwrap_or_default();
    if event_type != "pull_request" || !REVIEWED_ACTIONS.contains(&action) {
        return Ok(Json(WebhookResponse {
            message: "Event ignored".into(),
        }));
    }

    let (Some(pr), Some(repo)) = (payload.pull_request, payload.repository) else {
        warn!("webhook: pull_request/repository keys missing in {action} payload");
        return Ok(Json(WebhookResponse {
            message: "Event ignored - required pull_request/repository keys missing".into(),
        }));
    };

    let id = PullRequestId {
        repo: repo.full_name,
        number: pr.number,
    };

    info!(
        "webhook: received {action} for {}#{}, initiating review",
        id.repo, id.number
    );

    // The response is held until the pipeline, model call included,
    // has finished.
    let message = match run_review(&state.github, &state.llm, &id).await {
        Ok(summary) => {
            if summary.short_circuited {
                format!("Review completed for PR #{} (no changes)", id.number)
            } else {
                format!("Review completed for PR #{}", id.number)
            }
        }
        Err(e) => {
            // Unresolvable PR/repo is a skipped event, not a 5xx.
            error!("webhook: review skipped for {}#{}: {e}", id.repo, id.number);
            format!("Review skipped for PR #{}: pull request could not be resolved", id.number)
        }
    };

    Ok(Json(WebhookResponse { message }))
}
