pub mod config;
pub mod error;
pub mod export;
pub mod kinopoisk;
pub mod record;
pub mod routes;
pub mod session;

use std::{sync::Arc, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{config::AppConfig, kinopoisk::KinopoiskClient, session::SessionStore};

/// Shared application state handed to every route handler.
#[derive(Clone)]
pub struct Ctx {
    pub config: Arc<AppConfig>,
    pub kinopoisk: KinopoiskClient,
    pub session: SessionStore,
}

impl Ctx {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let kinopoisk = KinopoiskClient::new(
            config.upstream.base_url.clone(),
            Duration::from_secs(config.upstream.timeout_secs),
        );

        Self {
            config: Arc::new(config),
            kinopoisk,
            session: SessionStore::new(),
        }
    }
}

/// Uniform JSON envelope for API responses.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = std::result::Result<ApiResponse<T>, error::AppError>;
