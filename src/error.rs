//! Error types.
//!
//! `FetchError` carries the diagnostic detail of an upstream failure and is
//! only ever logged. `ApiError` is what callers of the HTTP endpoint see:
//! exactly two kinds, each mapped to one status code.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Body returned for every upstream failure.
pub const UPSTREAM_MESSAGE: &str = "User not found or API error";
pub const MISSING_USERNAME_MESSAGE: &str = "Error: Username is required";

/// Failures while talking to the GitHub GraphQL API
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("GitHub API returned HTTP {0}")]
    Status(u16),

    #[error("GraphQL reported errors: {0}")]
    GraphQl(String),

    #[error("Failed to decode GraphQL response: {0}")]
    Decode(String),

    #[error("User not found: {0}")]
    UserNotFound(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Upstream(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<FetchError> for ApiError {
    fn from(_: FetchError) -> Self {
        ApiError::Upstream(UPSTREAM_MESSAGE.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

/// Errors while loading the service configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Loading(#[from] figment::Error),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}
