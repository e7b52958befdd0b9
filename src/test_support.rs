use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::{
    AppState, config::Config, db, models::MovieDetails, store::MovieStore, tmdb::TmdbClient,
};

pub const TEST_API_KEY: &str = "test-key";

pub fn test_config(tmdb_base_url: &str) -> Config {
    Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        database_url: "sqlite::memory:".to_string(),
        tmdb_api_key: TEST_API_KEY.to_string(),
        tmdb_base_url: tmdb_base_url.to_string(),
        tmdb_image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
        tmdb_language: "en-US".to_string(),
        tmdb_rps: 100,
        tmdb_timeout: Duration::from_secs(5),
    }
}

pub fn details(title: &str) -> MovieDetails {
    MovieDetails {
        title: title.to_string(),
        description: format!("{title} synopsis"),
        year: 2010,
        img_url: format!("https://image.tmdb.org/t/p/w500/{}.jpg", title.to_lowercase()),
    }
}

pub async fn memory_store() -> MovieStore {
    MovieStore::new(db::connect_and_migrate("sqlite::memory:").await.unwrap())
}

pub async fn test_state() -> Arc<AppState> {
    let base = fake_tmdb().await;
    let config = test_config(&base);
    let http = reqwest::Client::builder().timeout(config.tmdb_timeout).build().unwrap();
    let tmdb = TmdbClient::new(http, &config);

    Arc::new(AppState { store: memory_store().await, tmdb: Arc::new(tmdb) })
}

/// Serves a canned subset of the TMDB v3 API on an ephemeral port and
/// returns its base URL.
pub async fn fake_tmdb() -> String {
    let app = Router::new()
        .route("/search/movie", get(fake_search))
        .route("/movie/{id}", get(fake_details));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn authorized(params: &HashMap<String, String>) -> bool {
    params.get("api_key").map(String::as_str) == Some(TEST_API_KEY)
}

async fn fake_search(Query(params): Query<HashMap<String, String>>) -> Response {
    if !authorized(&params) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    match params.get("query").map(String::as_str) {
        Some("broken") => Json(json!({ "unexpected": true })).into_response(),
        Some("nothing") => Json(json!({ "page": 1, "results": [] })).into_response(),
        _ => Json(json!({
            "page": 1,
            "results": [
                {
                    "id": 27205,
                    "title": "Inception",
                    "release_date": "2010-07-15",
                    "poster_path": "/inception.jpg",
                    "overview": "A thief who steals corporate secrets."
                },
                {
                    "id": 64956,
                    "title": "Inception: The Cobol Job",
                    "release_date": "2010-12-07",
                    "poster_path": null,
                    "overview": "A prequel comic."
                }
            ]
        }))
        .into_response(),
    }
}

async fn fake_details(
    Path(id): Path<i64>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&params) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    match id {
        27205 => Json(json!({
            "id": 27205,
            "title": "Inception",
            "original_title": "Inception",
            "overview": "A thief who steals corporate secrets.",
            "release_date": "2010-07-16",
            "poster_path": "/inception.jpg"
        }))
        .into_response(),
        666 => Json(json!({
            "id": 666,
            "title": "Undated",
            "overview": "No date on record.",
            "release_date": "unknown",
            "poster_path": "/undated.jpg"
        }))
        .into_response(),
        999 => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            StatusCode::OK.into_response()
        },
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
