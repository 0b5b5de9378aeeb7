//! Video search proxy endpoint.
//!
//! Shapes the browser's search query for the upstream video search API and
//! trims the result down to the four fields the sound modal renders.

use std::env;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::state::AppState;

use super::error::ApiError;

/// Upstream video search endpoint.
pub const VIDEO_SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";

/// Environment variable holding the search API credential, read per request.
pub const VIDEO_API_KEY_ENV: &str = "YOUTUBE_API_KEY";

const DEFAULT_MAX_RESULTS: i64 = 10;

/// Query parameters for GET /api/youtube/search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub max: Option<i64>,
}

/// One slimmed-down search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoItem {
    pub id: Option<String>,
    pub title: Option<String>,
    pub channel: Option<String>,
    pub thumbnail: Option<String>,
}

/// Response body for GET /api/youtube/search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub items: Vec<VideoItem>,
}

/// Handle GET /api/youtube/search.
pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let q = query.q.trim();
    if q.is_empty() {
        return Ok(Json(SearchResponse { items: Vec::new() }));
    }

    let api_key =
        env::var(VIDEO_API_KEY_ENV).map_err(|_| ApiError::MissingCredential(VIDEO_API_KEY_ENV))?;

    let max_results = query.max.unwrap_or(DEFAULT_MAX_RESULTS).clamp(1, 25);
    let max_results = max_results.to_string();

    debug!(q, max = max_results.as_str(), "forwarding video search");

    let response = state
        .http
        .get(VIDEO_SEARCH_URL)
        .query(&[
            ("part", "snippet"),
            ("type", "video"),
            ("maxResults", max_results.as_str()),
            ("q", q),
            ("key", api_key.as_str()),
        ])
        .send()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    if !response.status().is_success() {
        let details = response.text().await.unwrap_or_default();
        return Err(ApiError::Upstream(details));
    }

    let raw: Value = response
        .json()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(SearchResponse {
        items: map_items(&raw),
    }))
}

/// Maps upstream search results into the slim item shape.
///
/// The thumbnail falls back from medium to default to null.
fn map_items(raw: &Value) -> Vec<VideoItem> {
    let Some(items) = raw["items"].as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .map(|item| {
            let snippet = &item["snippet"];
            VideoItem {
                id: item["id"]["videoId"].as_str().map(str::to_owned),
                title: snippet["title"].as_str().map(str::to_owned),
                channel: snippet["channelTitle"].as_str().map(str::to_owned),
                thumbnail: snippet["thumbnails"]["medium"]["url"]
                    .as_str()
                    .or_else(|| snippet["thumbnails"]["default"]["url"].as_str())
                    .map(str::to_owned),
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
