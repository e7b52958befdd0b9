use serde::Deserialize;

use crate::error::{AppError, AppResult};

pub const MAX_RATING: f64 = 10.0;

/// One search hit from the movie database, as returned by title search.
#[derive(Clone, Debug, Deserialize)]
pub struct CandidateMovie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl CandidateMovie {
    pub fn year_label(&self) -> Option<&str> {
        self.release_date.as_deref().and_then(|d| d.split('-').next()).filter(|y| !y.is_empty())
    }
}

/// Everything needed to persist a new movie, resolved from a detail lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct MovieDetails {
    pub title: String,
    pub description: String,
    pub year: i32,
    pub img_url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RatingReview {
    pub rating: f64,
    pub review: Option<String>,
}

impl RatingReview {
    pub fn validate(&self) -> AppResult<()> {
        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(AppError::Validation(format!(
                "rating must be between 0 and {MAX_RATING}, got {}",
                self.rating
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EditForm {
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub review: String,
}

impl EditForm {
    pub fn parse(self) -> AppResult<RatingReview> {
        let rating = self.rating.trim();
        if rating.is_empty() {
            return Err(AppError::Validation("rating is required".to_string()));
        }
        let rating: f64 = rating
            .parse()
            .map_err(|_| AppError::Validation(format!("rating must be a number, got {rating:?}")))?;

        let review = self.review.trim();
        let out = RatingReview {
            rating,
            review: (!review.is_empty()).then(|| review.to_string()),
        };
        out.validate()?;
        Ok(out)
    }
}

pub fn parse_title(raw: Option<&str>) -> AppResult<String> {
    let title = raw.unwrap_or_default().trim();
    if title.is_empty() {
        return Err(AppError::Validation("title is required".to_string()));
    }
    Ok(title.to_string())
}

pub fn parse_id<T: std::str::FromStr>(raw: Option<&str>) -> AppResult<T> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(AppError::Validation("id is required".to_string()));
    }
    raw.parse().map_err(|_| AppError::Validation(format!("id must be a number, got {raw:?}")))
}
