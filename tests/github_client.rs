//! Drives `GithubClient` against a local server impersonating the GraphQL endpoint.

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use github_trophies::github::USER_AGENT;
use github_trophies::{FetchError, GithubClient, StatsSource};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tokio::net::TcpListener;

const TOKEN: &str = "ghp_local_test";

async fn fake_graphql(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if auth != format!("Bearer {TOKEN}") {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Bad credentials" })))
            .into_response();
    }
    let agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if agent != USER_AGENT {
        return (StatusCode::BAD_REQUEST, format!("unexpected User-Agent: {agent:?}"))
            .into_response();
    }
    if !body["query"].as_str().unwrap_or("").contains("$login") {
        return (StatusCode::BAD_REQUEST, "query does not take $login").into_response();
    }

    match body["variables"]["login"].as_str().unwrap_or("") {
        "octocat" => Json(json!({
            "data": {
                "user": {
                    "createdAt": "2011-01-25T18:44:36Z",
                    "followers": { "totalCount": 1200 },
                    "repositories": {
                        "totalCount": 2,
                        "nodes": [
                            { "stargazerCount": 2000 },
                            { "stargazerCount": 500 }
                        ]
                    },
                    "contributionsCollection": {
                        "totalCommitContributions": 12000,
                        "totalPullRequestContributions": 30,
                        "totalIssueContributions": 8
                    }
                }
            }
        }))
        .into_response(),
        "ghost" => Json(json!({
            "data": { "user": null },
            "errors": [{
                "type": "NOT_FOUND",
                "message": "Could not resolve to a User with the login of 'ghost'."
            }]
        }))
        .into_response(),
        "quiet" => Json(json!({ "data": { "user": null } })).into_response(),
        "tidy" => Json(json!({
            "data": {
                "user": {
                    "followers": { "totalCount": 3 },
                    "repositories": { "totalCount": 1, "nodes": [{ "stargazerCount": 21 }] },
                    "contributionsCollection": { "totalCommitContributions": 150 }
                }
            },
            "errors": null
        }))
        .into_response(),
        _ => (StatusCode::BAD_GATEWAY, "upstream down").into_response(),
    }
}

async fn spawn_fake_github() -> String {
    let app = Router::new().route("/graphql", post(fake_graphql));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/graphql")
}

#[tokio::test]
async fn fetches_and_normalizes_stats() {
    let endpoint = spawn_fake_github().await;
    let client = GithubClient::with_endpoint(TOKEN, endpoint);

    let stats = client.fetch("octocat").await.unwrap();
    assert_eq!(stats.total_stars, 2500);
    assert_eq!(stats.total_commits, 12000);
    assert_eq!(stats.total_followers, 1200);
    assert_eq!(stats.total_pull_requests, 30);
    assert_eq!(stats.total_issues, 8);
    assert!(stats.created_at.is_some());
}

#[tokio::test]
async fn null_errors_field_is_success() {
    let endpoint = spawn_fake_github().await;
    let client = GithubClient::with_endpoint(TOKEN, endpoint);

    let stats = client.fetch("tidy").await.unwrap();
    assert_eq!(stats.total_stars, 21);
    assert_eq!(stats.total_commits, 150);
    assert_eq!(stats.total_followers, 3);
    assert_eq!(stats.created_at, None);
}

#[tokio::test]
async fn graphql_error_payload_fails() {
    let endpoint = spawn_fake_github().await;
    let client = GithubClient::with_endpoint(TOKEN, endpoint);

    match client.fetch("ghost").await {
        Err(FetchError::GraphQl(msg)) => assert!(msg.contains("Could not resolve")),
        other => panic!("expected GraphQL error, got {other:?}"),
    }
}

#[tokio::test]
async fn null_user_without_errors_is_not_found() {
    let endpoint = spawn_fake_github().await;
    let client = GithubClient::with_endpoint(TOKEN, endpoint);

    assert!(matches!(
        client.fetch("quiet").await,
        Err(FetchError::UserNotFound(_))
    ));
}

#[tokio::test]
async fn non_success_status_fails() {
    let endpoint = spawn_fake_github().await;

    let client = GithubClient::with_endpoint(TOKEN, endpoint.clone());
    assert!(matches!(
        client.fetch("someone-else").await,
        Err(FetchError::Status(502))
    ));

    let wrong_token = GithubClient::with_endpoint("nope", endpoint);
    assert!(matches!(
        wrong_token.fetch("octocat").await,
        Err(FetchError::Status(401))
    ));
}

#[tokio::test]
async fn unreachable_endpoint_is_request_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GithubClient::with_endpoint(TOKEN, format!("http://{addr}/graphql"));
    assert!(matches!(
        client.fetch("octocat").await,
        Err(FetchError::Request(_))
    ));
}
