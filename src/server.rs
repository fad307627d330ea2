use axum::{
    Router,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{ApiError, MISSING_USERNAME_MESSAGE};
use crate::github::StatsSource;
use crate::stats::build_trophies;
use crate::svg;

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";
pub const CACHE_CONTROL: &str = "public, max-age=1800";

#[derive(Clone)]
pub struct AppState {
    pub stats: Arc<dyn StatsSource>,
}

impl AppState {
    pub fn new(stats: impl StatsSource + 'static) -> Self {
        Self {
            stats: Arc::new(stats),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TrophyQuery {
    pub username: Option<String>,
    pub theme: Option<String>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(trophy_card))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn trophy_card(
    State(state): State<AppState>,
    Query(params): Query<TrophyQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let username = params
        .username
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::Validation(MISSING_USERNAME_MESSAGE.to_string()))?;

    let stats = state.stats.fetch(&username).await?;
    let trophies = build_trophies(&stats);
    let body = svg::render(&trophies, params.theme.as_deref());

    info!(username = %username, theme = ?params.theme, "rendered trophy card");

    Ok((
        [
            (header::CONTENT_TYPE, SVG_CONTENT_TYPE),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        body,
    ))
}
