//! Webhook dispatcher tests driven through the router in-process.

use std::sync::Arc;

use ai_llm_service::{LlmModelConfig, OllamaService};
use api::{AppState, app};
use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use mockito::{Matcher, ServerGuard};
use pr_reviewer::git_providers::{GitHubClient, ProviderConfig};
use tower::ServiceExt;

/// Builds a router whose collaborators point at the given mock servers.
fn router(github: &ServerGuard, ollama: &ServerGuard) -> Router {
    let state = AppState {
        github: GitHubClient::from_config(ProviderConfig {
            base_api: github.url(),
            token: "test-token".into(),
        })
        .unwrap(),
        llm: OllamaService::new(LlmModelConfig {
            model: "phi3:mini".into(),
            endpoint: ollama.url(),
            max_tokens: None,
            temperature: Some(0.0),
            timeout_secs: Some(5),
        })
        .unwrap(),
    };
    app(Arc::new(state))
}

fn webhook_request(event: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/webhook")
        .header("content-type", "application/json");
    if let Some(event) = event {
        builder = builder.header("X-GitHub-Event", event);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_text(resp: Response<Body>) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

const OPENED_PAYLOAD: &str = r#"{
    "action": "opened",
    "pull_request": {"number": 42},
    "repository": {"full_name": "org/repo"}
}"#;

#[tokio::test]
async fn missing_event_header_is_bad_request() {
    let github = mockito::Server::new_async().await;
    let ollama = mockito::Server::new_async().await;

    let resp = router(&github, &ollama)
        .oneshot(webhook_request(None, OPENED_PAYLOAD))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await.contains("X-GitHub-Event"));
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let github = mockito::Server::new_async().await;
    let ollama = mockito::Server::new_async().await;

    let resp = router(&github, &ollama)
        .oneshot(webhook_request(Some("pull_request"), "{not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await.contains("invalid JSON"));
}

#[tokio::test]
async fn closed_action_is_ignored_without_collaborator_calls() {
    let mut github = mockito::Server::new_async().await;
    let mut ollama = mockito::Server::new_async().await;

    let meta = github
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let generate = ollama
        .mock("POST", "/api/generate")
        .expect(0)
        .create_async()
        .await;

    let payload = r#"{
        "action": "closed",
        "pull_request": {"number": 42},
        "repository": {"full_name": "org/repo"}
    }"#;
    let resp = router(&github, &ollama)
        .oneshot(webhook_request(Some("pull_request"), payload))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Event ignored"));
    meta.assert_async().await;
    generate.assert_async().await;
}

#[tokio::test]
async fn non_pull_request_event_is_ignored() {
    let mut github = mockito::Server::new_async().await;
    let ollama = mockito::Server::new_async().await;

    let meta = github
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let resp = router(&github, &ollama)
        .oneshot(webhook_request(Some("push"), OPENED_PAYLOAD))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Event ignored"));
    meta.assert_async().await;
}

#[tokio::test]
async fn relevant_action_with_missing_keys_is_ignored() {
    let github = mockito::Server::new_async().await;
    let ollama = mockito::Server::new_async().await;

    let resp = router(&github, &ollama)
        .oneshot(webhook_request(
            Some("pull_request"),
            r#"{"action": "opened"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Event ignored"));
}

#[tokio::test]
async fn opened_action_runs_pipeline_and_posts_comment() {
    let mut github = mockito::Server::new_async().await;
    let mut ollama = mockito::Server::new_async().await;

    let _meta = github
        .mock("GET", "/repos/org/repo/pulls/42")
        .with_status(200)
        .with_body(
            r#"{
                "title": "Add feature",
                "state": "open",
                "html_url": "https://github.com/org/repo/pull/42",
                "user": {"login": "alice"},
                "head": {"sha": "abc123"},
                "base": {"sha": "def456"},
                "created_at": "2026-08-01T10:00:00Z",
                "updated_at": "2026-08-02T11:00:00Z"
            }"#,
        )
        .create_async()
        .await;
    let _files = github
        .mock("GET", "/repos/org/repo/pulls/42/files")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[{"filename": "a.py", "patch": "+print('x')"}]"#)
        .create_async()
        .await;
    let _generate = ollama
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_body(r#"{"response":"- looks fine overall"}"#)
        .create_async()
        .await;
    let comment = github
        .mock("POST", "/repos/org/repo/issues/42/comments")
        .match_body(Matcher::Regex("looks fine overall".into()))
        .with_status(201)
        .with_body(r#"{"id": 7}"#)
        .expect(1)
        .create_async()
        .await;

    let resp = router(&github, &ollama)
        .oneshot(webhook_request(Some("pull_request"), OPENED_PAYLOAD))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Review completed for PR #42"));
    comment.assert_async().await;
}

#[tokio::test]
async fn unresolvable_pull_request_is_skipped_not_failed() {
    let mut github = mockito::Server::new_async().await;
    let ollama = mockito::Server::new_async().await;

    let _meta = github
        .mock("GET", "/repos/org/repo/pulls/42")
        .with_status(404)
        .create_async()
        .await;
    let comment = github
        .mock("POST", "/repos/org/repo/issues/42/comments")
        .expect(0)
        .create_async()
        .await;

    let resp = router(&github, &ollama)
        .oneshot(webhook_request(Some("pull_request"), OPENED_PAYLOAD))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Review skipped for PR #42"));
    comment.assert_async().await;
}
