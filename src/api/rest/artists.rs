//! Artist endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use super::{rejected_body, required, ApiError, MessageResponse};
use crate::api::state::AppState;
use crate::types::{ArtistPatch, NewArtist};

/// Body for POST /api/artists
#[derive(Debug, Default, Deserialize)]
pub struct CreateArtistPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

impl CreateArtistPayload {
    /// Check required fields, `None` when any is missing or blank
    pub fn into_new_artist(self) -> Option<NewArtist> {
        let new_artist = NewArtist::new(
            required(self.name)?,
            required(self.genre)?,
            required(self.bio)?,
        );
        Some(match self.image_url {
            Some(url) => new_artist.with_image_url(url),
            None => new_artist,
        })
    }
}

/// GET /api/artists - List all artists
pub async fn list_artists(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.list_artists())
}

/// GET /api/artists/:id - Get a single artist
pub async fn get_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.catalog.get_artist(&id) {
        Some(artist) => (StatusCode::OK, Json(artist)).into_response(),
        None => artist_not_found(),
    }
}

/// POST /api/artists - Create an artist
pub async fn create_artist(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateArtistPayload>, JsonRejection>,
) -> impl IntoResponse {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => return rejected_body(rejection),
    };

    match payload.into_new_artist() {
        Some(new_artist) => {
            let artist = state.catalog.create_artist(new_artist);
            (StatusCode::CREATED, Json(artist)).into_response()
        }
        None => {
            let error = ApiError::bad_request("Missing required fields");
            (StatusCode::BAD_REQUEST, Json(error)).into_response()
        }
    }
}

/// PUT /api/artists/:id - Update the supplied fields of an artist
///
/// Any non-empty object is accepted; keys that are not artist fields are
/// ignored but still count as an update.
pub async fn update_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let fields = match body {
        Ok(Json(Value::Object(fields))) => fields,
        Ok(Json(_)) => {
            let error = ApiError::bad_request("Request body must be a JSON object");
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
        Err(rejection) => return rejected_body(rejection),
    };

    if fields.is_empty() {
        let error = ApiError::bad_request("No update data provided");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    let patch: ArtistPatch = match serde_json::from_value(Value::Object(fields)) {
        Ok(patch) => patch,
        Err(e) => {
            let error = ApiError::bad_request(e.to_string());
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    match state.catalog.update_artist(&id, patch) {
        Some(artist) => (StatusCode::OK, Json(artist)).into_response(),
        None => artist_not_found(),
    }
}

/// DELETE /api/artists/:id - Delete an artist (its tracks are kept)
pub async fn delete_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    if state.catalog.delete_artist(&id) {
        let body = MessageResponse::new("Artist deleted successfully");
        (StatusCode::OK, Json(body)).into_response()
    } else {
        artist_not_found()
    }
}

/// GET /api/artists/:id/tracks - Tracks of one artist
pub async fn list_artist_tracks(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    if state.catalog.get_artist(&id).is_none() {
        return artist_not_found();
    }

    let tracks = state.catalog.list_tracks_by_artist(&id);
    (StatusCode::OK, Json(tracks)).into_response()
}

fn artist_not_found() -> axum::response::Response {
    let error = ApiError::not_found("Artist not found");
    (StatusCode::NOT_FOUND, Json(error)).into_response()
}
