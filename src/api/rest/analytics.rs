//! Analytics endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::types::AnalyticsReport;

/// Query parameters for GET /api/analytics
#[derive(Debug, Deserialize)]
pub struct AnalyticsParams {
    /// Restrict the report to one artist
    #[serde(rename = "artistId")]
    pub artist_id: Option<String>,
}

/// Response wrapper for analytics
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub success: bool,
    pub data: AnalyticsReport,
}

/// GET /api/analytics - Catalog-wide or per-artist analytics
pub async fn get_analytics(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AnalyticsParams>,
) -> impl IntoResponse {
    let artist_id = params.artist_id.as_deref().filter(|id| !id.is_empty());
    let data = state.catalog.analytics(artist_id);
    Json(AnalyticsResponse {
        success: true,
        data,
    })
}
