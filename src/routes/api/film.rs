use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    ApiResponse, ApiResult, Ctx,
    error::AppError,
    record::{CastEntry, assembler},
    session::FilmSession,
};

static FILM_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("valid id pattern"));

/// Fetch request body.
#[derive(Debug, Deserialize, Validate)]
pub struct FetchRequest {
    /// Upstream API key; forwarded as a header, never stored.
    #[validate(length(min = 1, message = "API key must not be empty"))]
    pub api_key: String,
    /// Numeric film identifier.
    #[validate(regex(path = *FILM_ID_RE, message = "film id must be digits only"))]
    pub film_id: String,
}

/// The rendered film card.
#[derive(Debug, Serialize)]
pub struct FilmView {
    pub film_id: u64,
    pub fetched_at: DateTime<Utc>,
    pub fields: Vec<RecordField>,
    pub cast: Vec<CastEntry>,
}

#[derive(Debug, Serialize)]
pub struct RecordField {
    pub label: &'static str,
    pub value: String,
}

impl From<FilmSession> for FilmView {
    fn from(session: FilmSession) -> Self {
        let fields = session
            .record
            .fields()
            .into_iter()
            .map(|(label, value)| RecordField {
                label,
                value: value.to_string(),
            })
            .collect();

        Self {
            film_id: session.film_id,
            fetched_at: session.fetched_at,
            fields,
            cast: session.cast,
        }
    }
}

/// Fetch a film and replace the session pair
/// POST /api/film/fetch
async fn fetch_film(State(ctx): State<Ctx>, Json(req): Json<FetchRequest>) -> ApiResult<FilmView> {
    req.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let film_id: u64 = req
        .film_id
        .parse()
        .map_err(|_| AppError::Validation("film id must be digits only".to_string()))?;

    let assembled = assembler::fetch_film(&ctx.kinopoisk, film_id, &req.api_key)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    let session = ctx.session.replace(assembled);

    Ok(ApiResponse {
        code: 200,
        message: "Film fetched".to_string(),
        data: Some(session.into()),
    })
}

/// Current session film card
/// GET /api/film
async fn current_film(State(ctx): State<Ctx>) -> ApiResult<FilmView> {
    let session = ctx.session.current().ok_or(AppError::NoSession)?;

    Ok(ApiResponse {
        code: 200,
        message: "Current film".to_string(),
        data: Some(session.into()),
    })
}

pub fn mount() -> Router<Ctx> {
    Router::new()
        .route("/film/fetch", post(fetch_film))
        .route("/film", get(current_film))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(api_key: &str, film_id: &str) -> FetchRequest {
        FetchRequest {
            api_key: api_key.to_string(),
            film_id: film_id.to_string(),
        }
    }

    #[test]
    fn film_id_must_be_digits_only() {
        assert!(request("key", "326").validate().is_ok());
        assert!(request("key", "32a6").validate().is_err());
        assert!(request("key", "").validate().is_err());
        assert!(request("key", "-5").validate().is_err());
    }

    #[test]
    fn api_key_must_not_be_empty() {
        assert!(request("", "326").validate().is_err());
    }
}
