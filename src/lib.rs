//! GitHub profile trophies.
//!
//! Fetches a user's stars, commits and followers from the GitHub GraphQL API,
//! ranks each one against a fixed tier table and renders the result as an SVG
//! card served from `GET /api?username=..&theme=..`.

pub mod config;
pub mod error;
pub mod github;
pub mod rank;
pub mod server;
pub mod stats;
pub mod svg;
pub mod theme;

pub use config::Config;
pub use error::{ApiError, ConfigError, FetchError};
pub use github::{GithubClient, StatsSource};
pub use rank::{Rank, RankThresholds, rank};
pub use server::{AppState, create_router};
pub use stats::{RawStats, StatKind, Trophy, build_trophies};
pub use theme::{Theme, ThemeColors};
