//! REST API module for HTTP endpoints
//!
//! - `/api/artists` - Artist CRUD and per-artist track listing
//! - `/api/tracks` - Track listing, creation and the stream/download/favorite actions
//! - `/api/analytics` - Catalog analytics, optionally scoped with `?artistId=`

pub mod analytics;
pub mod artists;
pub mod tracks;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::CatalogError;

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match &err {
            CatalogError::UnknownArtist(_) => Self {
                error: err.to_string(),
                code: "ARTIST_NOT_FOUND".to_string(),
            },
        }
    }
}

/// Plain `{ "message": ... }` body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Answer a body the JSON extractor refused (bad syntax, wrong types,
/// missing content type) with a 400 in the usual error shape
pub(crate) fn rejected_body(rejection: JsonRejection) -> Response {
    let error = ApiError::bad_request(rejection.body_text());
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Keep a required string only if it has visible content
pub(crate) fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
