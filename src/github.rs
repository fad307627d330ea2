use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::stats::RawStats;

pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";
pub const USER_AGENT: &str = "github-profile-trophies-custom";

const STATS_QUERY: &str = r#"
    query($login: String!) {
        user(login: $login) {
            createdAt
            followers {
                totalCount
            }
            repositories(first: 100, ownerAffiliations: OWNER, isFork: false) {
                totalCount
                nodes {
                    stargazerCount
                }
            }
            contributionsCollection {
                totalCommitContributions
                totalPullRequestContributions
                totalIssueContributions
            }
        }
    }
"#;

/// Anything that can resolve a username to its aggregate counts.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch(&self, username: &str) -> Result<RawStats, FetchError>;
}

#[derive(Deserialize)]
struct CountObj {
    #[serde(rename = "totalCount")]
    total_count: u64,
}

#[derive(Deserialize)]
struct StatsResponse {
    data: Option<StatsData>,
}

#[derive(Deserialize)]
struct StatsData {
    user: Option<StatsUser>,
}

#[derive(Deserialize)]
struct StatsUser {
    #[serde(rename = "createdAt")]
    created_at: Option<DateTime<Utc>>,
    followers: CountObj,
    repositories: StarRepos,
    #[serde(rename = "contributionsCollection")]
    contributions_collection: ContribCollection,
}

#[derive(Deserialize)]
struct StarRepos {
    #[serde(rename = "totalCount", default)]
    total_count: u64,
    nodes: Option<Vec<Option<StarNode>>>,
}

#[derive(Deserialize)]
struct StarNode {
    #[serde(rename = "stargazerCount")]
    stargazer_count: u64,
}

#[derive(Deserialize)]
struct ContribCollection {
    #[serde(rename = "totalCommitContributions")]
    total_commit_contributions: u64,
    #[serde(rename = "totalPullRequestContributions", default)]
    total_pull_request_contributions: u64,
    #[serde(rename = "totalIssueContributions", default)]
    total_issue_contributions: u64,
}

#[derive(Clone)]
pub struct GithubClient {
    token: Arc<String>,
    endpoint: Arc<String>,
    http: Arc<Client>,
}

impl GithubClient {
    /// Create a client for the public GitHub GraphQL endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_endpoint(token, GITHUB_GRAPHQL_URL)
    }

    pub fn with_endpoint(token: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            token: Arc::new(token.into()),
            endpoint: Arc::new(endpoint.into()),
            http: Arc::new(Client::new()),
        }
    }

    /// Single GraphQL request. Non-2xx statuses and `errors` payloads are failures.
    async fn graphql(&self, query: &str, variables: Value) -> Result<Value, FetchError> {
        let resp = self
            .http
            .post(self.endpoint.as_str())
            .bearer_auth(&*self.token)
            .header("User-Agent", USER_AGENT)
            .json(&serde_json::json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let json: Value = resp
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        if let Some(message) = graphql_error(&json) {
            return Err(FetchError::GraphQl(message));
        }

        Ok(json)
    }

    /// Fetch stars, commits and followers for `username` in one query.
    ///
    /// Stars are summed over the first 100 owned, non-fork repositories only;
    /// accounts with more repositories are undercounted.
    pub async fn fetch_stats(&self, username: &str) -> Result<RawStats, FetchError> {
        let json = self
            .graphql(STATS_QUERY, serde_json::json!({ "login": username }))
            .await?;
        let stats = parse_stats(json, username)?;

        if stats.total_repositories > 100 {
            debug!(
                username,
                repositories = stats.total_repositories,
                "star total limited to the first 100 repositories"
            );
        }
        debug!(
            username,
            stars = stats.total_stars,
            commits = stats.total_commits,
            followers = stats.total_followers,
            pull_requests = stats.total_pull_requests,
            issues = stats.total_issues,
            created_at = ?stats.created_at,
            "fetched GitHub stats"
        );

        Ok(stats)
    }
}

#[async_trait]
impl StatsSource for GithubClient {
    async fn fetch(&self, username: &str) -> Result<RawStats, FetchError> {
        self.fetch_stats(username).await.inspect_err(|e| {
            warn!(username, error = %e, "failed to fetch GitHub stats");
        })
    }
}

/// First message of a non-empty `errors` field. `null`, `false` and `[]` are not errors.
fn graphql_error(json: &Value) -> Option<String> {
    let errors = json
        .get("errors")
        .filter(|e| !e.is_null() && e.as_bool() != Some(false))
        .filter(|e| e.as_array().is_none_or(|a| !a.is_empty()))?;

    let message = errors
        .get(0)
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| errors.to_string());
    Some(message)
}

/// Decode a successful GraphQL payload into `RawStats`.
fn parse_stats(json: Value, username: &str) -> Result<RawStats, FetchError> {
    let parsed: StatsResponse =
        serde_json::from_value(json).map_err(|e| FetchError::Decode(e.to_string()))?;

    let user = parsed
        .data
        .and_then(|d| d.user)
        .ok_or_else(|| FetchError::UserNotFound(username.to_string()))?;

    let total_stars = user
        .repositories
        .nodes
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .fold(0u64, |acc, n| acc.saturating_add(n.stargazer_count));

    let contrib = user.contributions_collection;
    Ok(RawStats {
        total_stars,
        total_commits: contrib.total_commit_contributions,
        total_followers: user.followers.total_count,
        total_repositories: user.repositories.total_count,
        total_pull_requests: contrib.total_pull_request_contributions,
        total_issues: contrib.total_issue_contributions,
        created_at: user.created_at,
    })
}
