//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::rest::{analytics, artists, tracks};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        .route("/api", get(welcome))
        // Artists
        .route(
            "/api/artists",
            get(artists::list_artists).post(artists::create_artist),
        )
        .route(
            "/api/artists/:id",
            get(artists::get_artist)
                .put(artists::update_artist)
                .delete(artists::delete_artist),
        )
        .route("/api/artists/:id/tracks", get(artists::list_artist_tracks))
        .route("/api/analytics", get(analytics::get_analytics))
        // Tracks
        .route(
            "/api/tracks",
            get(tracks::list_tracks).post(tracks::create_track),
        )
        .route("/api/tracks/:id", get(tracks::get_track))
        .route("/api/tracks/:id/stream", get(tracks::stream_track))
        .route("/api/tracks/:id/download", get(tracks::download_track))
        .route("/api/tracks/:id/favorite", post(tracks::toggle_favorite))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to the music app API" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::types::{NewArtist, NewTrack};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    fn app_with(catalog: Arc<Catalog>) -> Router {
        create_router(Arc::new(AppState::new(catalog)))
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn send_raw(
        app: Router,
        method: &str,
        uri: &str,
        content_type: Option<&str>,
        body: &str,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = send(app_with(Arc::new(Catalog::new())), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_artist_and_fetch() {
        let catalog = Arc::new(Catalog::new());

        let (status, created) = send(
            app_with(catalog.clone()),
            "POST",
            "/api/artists",
            Some(json!({ "name": "Nina Simone", "genre": "Jazz", "bio": "Pianist" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(created.get("updatedAt").is_none());

        let uri = format!("/api/artists/{}", created["id"].as_str().unwrap());
        let (status, fetched) = send(app_with(catalog), "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_artist_missing_fields() {
        let (status, body) = send(
            app_with(Arc::new(Catalog::new())),
            "POST",
            "/api/artists",
            Some(json!({ "name": "Nobody" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_update_artist_requires_data() {
        let catalog = Arc::new(Catalog::new());
        let artist = catalog.create_artist(NewArtist::new("A", "Pop", "bio"));
        let uri = format!("/api/artists/{}", artist.id);

        let (status, _) = send(app_with(catalog.clone()), "PUT", &uri, Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, updated) =
            send(app_with(catalog), "PUT", &uri, Some(json!({ "genre": "Jazz" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["genre"], "Jazz");
        assert_eq!(updated["name"], "A");
        assert!(updated.get("updatedAt").is_some());
    }

    #[tokio::test]
    async fn test_update_artist_with_only_unknown_keys() {
        let catalog = Arc::new(Catalog::new());
        let artist = catalog.create_artist(NewArtist::new("A", "Pop", "bio"));
        let uri = format!("/api/artists/{}", artist.id);

        let (status, updated) =
            send(app_with(catalog.clone()), "PUT", &uri, Some(json!({ "foo": 1 }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "A");
        assert!(updated.get("updatedAt").is_some());

        let (status, body) =
            send(app_with(catalog), "PUT", &uri, Some(json!({ "name": 5 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_rejected_bodies_use_error_shape() {
        let catalog = Arc::new(Catalog::new());
        let artist = catalog.create_artist(NewArtist::new("A", "Pop", "bio"));
        let track_body = |duration: &str| {
            format!(
                r#"{{"title":"T","artistId":"{}","genre":"Pop","duration":{}}}"#,
                artist.id, duration
            )
        };
        let artist_uri = format!("/api/artists/{}", artist.id);

        let cases = [
            ("POST", "/api/tracks".to_string(), Some("application/json"), track_body("\"200\"")),
            ("POST", "/api/tracks".to_string(), Some("application/json"), track_body("200.5")),
            ("POST", "/api/tracks".to_string(), Some("application/json"), "{not json".to_string()),
            ("POST", "/api/tracks".to_string(), None, track_body("200")),
            ("POST", "/api/artists".to_string(), Some("application/json"), "{not json".to_string()),
            ("POST", "/api/artists".to_string(), None, r#"{"name":"N","genre":"G","bio":"B"}"#.to_string()),
            ("PUT", artist_uri.clone(), Some("application/json"), "[1,2]".to_string()),
            ("PUT", artist_uri, None, r#"{"genre":"Jazz"}"#.to_string()),
        ];

        for (method, uri, content_type, body) in cases {
            let (status, error) =
                send_raw(app_with(catalog.clone()), method, &uri, content_type, &body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{} {} {}", method, uri, body);
            assert_eq!(error["code"], "BAD_REQUEST", "{} {} {}", method, uri, body);
            assert!(error["error"].is_string());
        }

        assert!(catalog.list_tracks().is_empty());
        assert_eq!(catalog.list_artists().len(), 1);
        assert_eq!(catalog.get_artist(artist.id.as_str()).unwrap().genre, "Pop");
    }

    #[tokio::test]
    async fn test_delete_artist() {
        let catalog = Arc::new(Catalog::new());
        let artist = catalog.create_artist(NewArtist::new("A", "Pop", "bio"));
        let uri = format!("/api/artists/{}", artist.id);

        let (status, body) = send(app_with(catalog.clone()), "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Artist deleted successfully");

        let (status, _) = send(app_with(catalog), "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_track_unknown_artist() {
        let catalog = Arc::new(Catalog::new());
        let (status, body) = send(
            app_with(catalog.clone()),
            "POST",
            "/api/tracks",
            Some(json!({ "title": "T", "artistId": "ghost", "genre": "Pop", "duration": 100 })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "ARTIST_NOT_FOUND");
        assert!(catalog.list_tracks().is_empty());
    }

    #[tokio::test]
    async fn test_track_actions() {
        let catalog = Arc::new(Catalog::new());
        let artist = catalog.create_artist(NewArtist::new("The Weeknd", "R&B", "bio"));
        let track = catalog
            .create_track(NewTrack::new("Blinding Lights", artist.id.clone(), "R&B", 200))
            .unwrap();

        let (status, created) = send(
            app_with(catalog.clone()),
            "POST",
            "/api/tracks",
            Some(json!({ "title": "Save Your Tears", "artistId": artist.id, "genre": "R&B", "duration": 215, "releaseDate": "2020-08-09" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["isFavorite"], false);

        let (status, favorite) = send(
            app_with(catalog.clone()),
            "POST",
            &format!("/api/tracks/{}/favorite", track.id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(favorite["isFavorite"], true);

        let (status, stream) = send(
            app_with(catalog.clone()),
            "GET",
            &format!("/api/tracks/{}/stream", track.id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(stream["artistName"], "The Weeknd");

        let (status, download) = send(
            app_with(catalog.clone()),
            "GET",
            &format!("/api/tracks/{}/download", track.id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(download["message"], "Download started");
        assert_eq!(download["fileName"], "The_Weeknd_-_Blinding_Lights.mp4");

        let (status, listed) = send(
            app_with(catalog.clone()),
            "GET",
            &format!("/api/artists/{}/tracks", artist.id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().unwrap().len(), 2);

        let (status, analytics) = send(app_with(catalog), "GET", "/api/analytics", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(analytics["success"], true);
        assert_eq!(analytics["data"]["totalTracks"], 2);
        assert_eq!(analytics["data"]["totalFavorites"], 1);
        assert_eq!(analytics["data"]["totalStreamTime"], 200);
    }

    #[tokio::test]
    async fn test_unknown_track_is_not_found() {
        let catalog = Arc::new(Catalog::new());
        for (method, uri) in [
            ("GET", "/api/tracks/missing"),
            ("GET", "/api/tracks/missing/stream"),
            ("GET", "/api/tracks/missing/download"),
            ("POST", "/api/tracks/missing/favorite"),
            ("GET", "/api/artists/missing/tracks"),
        ] {
            let (status, _) = send(app_with(catalog.clone()), method, uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", method, uri);
        }
        assert_eq!(catalog.stream_count(), 0);
    }

    #[tokio::test]
    async fn test_scoped_analytics_query() {
        let catalog = Arc::new(Catalog::new());
        let a = catalog.create_artist(NewArtist::new("A", "Pop", "bio"));
        let b = catalog.create_artist(NewArtist::new("B", "Rock", "bio"));
        catalog.create_track(NewTrack::new("x", a.id.clone(), "Pop", 100)).unwrap();
        catalog.create_track(NewTrack::new("y", b.id.clone(), "Rock", 300)).unwrap();

        let uri = format!("/api/analytics?artistId={}", a.id);
        let (status, body) = send(app_with(catalog), "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["totalTracks"], 1);
        assert_eq!(body["data"]["averageTrackDuration"], 100.0);
        assert_eq!(body["data"]["topGenres"][0]["genre"], "Pop");
    }
}
