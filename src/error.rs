use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::ApiResponse;

/// Application-level errors surfaced to API callers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("No film has been fetched in this session")]
    NoSession,

    #[error("Export failed: {0}")]
    Export(#[from] crate::export::ExportError),
}

impl AppError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::NoSession => StatusCode::NOT_FOUND,
            Self::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiResponse::<()> {
            code: status.as_u16(),
            message: self.to_string(),
            data: None,
        };

        (status, Json(body)).into_response()
    }
}
