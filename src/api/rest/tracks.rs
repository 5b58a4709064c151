//! Track endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{rejected_body, required, ApiError};
use crate::api::state::AppState;
use crate::types::{ArtistId, NewTrack};
use crate::utils::time::deserialize_optional_timestamp;

/// Body for POST /api/tracks
#[derive(Debug, Default, Deserialize)]
pub struct CreateTrackPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "artistId", default)]
    pub artist_id: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    /// Seconds; signed so that negative input reaches validation instead of the JSON extractor
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(
        rename = "releaseDate",
        default,
        deserialize_with = "deserialize_optional_timestamp"
    )]
    pub release_date: Option<DateTime<Utc>>,
}

impl CreateTrackPayload {
    /// Check required fields, `None` when any is missing, blank or out of range
    pub fn into_new_track(self) -> Option<NewTrack> {
        let duration = self
            .duration
            .filter(|d| *d > 0)
            .and_then(|d| u32::try_from(d).ok())?;
        let new_track = NewTrack::new(
            required(self.title)?,
            ArtistId::from(required(self.artist_id)?),
            required(self.genre)?,
            duration,
        );
        Some(match self.release_date {
            Some(released) => new_track.released_on(released),
            None => new_track,
        })
    }
}

/// Body returned by GET /api/tracks/:id/download
#[derive(Debug, Serialize)]
pub struct DownloadStarted {
    pub message: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "artistName")]
    pub artist_name: String,
}

/// GET /api/tracks - List all tracks
pub async fn list_tracks(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.list_tracks())
}

/// GET /api/tracks/:id - Get a single track
pub async fn get_track(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.catalog.get_track(&id) {
        Some(track) => (StatusCode::OK, Json(track)).into_response(),
        None => track_not_found(),
    }
}

/// POST /api/tracks - Create a track for an existing artist
pub async fn create_track(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateTrackPayload>, JsonRejection>,
) -> impl IntoResponse {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => return rejected_body(rejection),
    };

    let Some(new_track) = payload.into_new_track() else {
        let error = ApiError::bad_request("Missing required fields");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    };

    match state.catalog.create_track(new_track) {
        Ok(track) => (StatusCode::CREATED, Json(track)).into_response(),
        Err(e) => (StatusCode::NOT_FOUND, Json(ApiError::from(e))).into_response(),
    }
}

/// GET /api/tracks/:id/stream - Start a stream and log the play
pub async fn stream_track(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.catalog.record_stream(&id) {
        Some(ticket) => (StatusCode::OK, Json(ticket)).into_response(),
        None => track_not_found(),
    }
}

/// GET /api/tracks/:id/download - Describe the download; no file is sent
pub async fn download_track(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.catalog.describe_download(&id) {
        Some(ticket) => {
            let body = DownloadStarted {
                message: "Download started".to_string(),
                file_name: ticket.file_name,
                file_path: ticket.file_path,
                artist_name: ticket.artist_name,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        None => track_not_found(),
    }
}

/// POST /api/tracks/:id/favorite - Toggle favorite status
pub async fn toggle_favorite(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.catalog.toggle_favorite(&id) {
        Some(toggle) => (StatusCode::OK, Json(toggle)).into_response(),
        None => track_not_found(),
    }
}

fn track_not_found() -> axum::response::Response {
    let error = ApiError::not_found("Track not found");
    (StatusCode::NOT_FOUND, Json(error)).into_response()
}
