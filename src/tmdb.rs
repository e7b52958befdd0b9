use std::{num::NonZeroU32, sync::Arc};

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use serde::Deserialize;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{CandidateMovie, MovieDetails},
};

pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    image_base_url: String,
    language: String,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl TmdbClient {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        if config.tmdb_api_key.trim().is_empty() {
            tracing::warn!("TMDB_API_KEY is not set, movie database requests will be rejected");
        }

        let rps = NonZeroU32::new(config.tmdb_rps).unwrap_or(NonZeroU32::MIN);
        let limiter = Arc::new(RateLimiter::direct(Quota::per_second(rps)));
        Self {
            client,
            api_key: config.tmdb_api_key.clone(),
            base_url: config.tmdb_base_url.trim_end_matches('/').to_string(),
            image_base_url: config.tmdb_image_base_url.trim_end_matches('/').to_string(),
            language: config.tmdb_language.clone(),
            limiter,
        }
    }

    pub async fn search_by_title(&self, title: &str) -> AppResult<Vec<CandidateMovie>> {
        self.limiter.until_ready().await;
        tracing::debug!(title = %title, "searching movie database");

        let resp: SearchResponse = self
            .client
            .get(format!("{}/search/movie", self.base_url))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
                ("query", title),
                ("include_adult", "false"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::debug!(title = %title, results = resp.results.len(), "search complete");
        Ok(resp.results)
    }

    pub async fn fetch_details(&self, tmdb_id: i64) -> AppResult<MovieDetails> {
        self.limiter.until_ready().await;
        tracing::debug!(tmdb_id, "fetching movie details");

        let resp: DetailsResponse = self
            .client
            .get(format!("{}/movie/{}", self.base_url, tmdb_id))
            .query(&[("api_key", self.api_key.as_str()), ("language", self.language.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        self.details_from(resp)
    }

    fn details_from(&self, resp: DetailsResponse) -> AppResult<MovieDetails> {
        let title = match resp.title.filter(|t| !t.trim().is_empty()) {
            Some(title) => title,
            None => resp
                .original_title
                .filter(|t| !t.trim().is_empty())
                .ok_or_else(|| AppError::Parse("movie has no title".to_string()))?,
        };

        let year = parse_release_year(resp.release_date.as_deref().unwrap_or_default())?;

        let img_url = resp
            .poster_path
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}{}", self.image_base_url, p))
            .unwrap_or_default();

        Ok(MovieDetails { title, description: resp.overview.unwrap_or_default(), year, img_url })
    }
}

/// Extracts the year from a `YYYY-MM-DD` shaped release date.
pub fn parse_release_year(release_date: &str) -> AppResult<i32> {
    let head = release_date.trim().split('-').next().unwrap_or_default();
    if head.len() != 4 || !head.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::Parse(format!("release date {release_date:?} has no leading year")));
    }
    head.parse().map_err(|_| AppError::Parse(format!("release year {head:?} is not a number")))
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<CandidateMovie>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    title: Option<String>,
    original_title: Option<String>,
    overview: Option<String>,
    release_date: Option<String>,
    poster_path: Option<String>,
}
