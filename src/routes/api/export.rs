use axum::{
    Router,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;

use crate::{
    Ctx,
    error::AppError,
    export::{self, ExportOutput},
    session::FilmSession,
};

/// Download the XLSX workbook (may substitute CSV on builder failure)
/// GET /api/film/export/workbook
async fn export_workbook(State(ctx): State<Ctx>) -> Result<Response, AppError> {
    let session = current(&ctx)?;
    let output = export::workbook_or_fallback(&session.record, &session.cast)?;
    Ok(download_response(&session, output))
}

/// Download the semicolon-delimited spreadsheet CSV
/// GET /api/film/export/csv
async fn export_spreadsheet_csv(State(ctx): State<Ctx>) -> Result<Response, AppError> {
    let session = current(&ctx)?;
    let output = export::spreadsheet_csv(&session.record, &session.cast)?;
    Ok(download_response(&session, output))
}

/// Download the plain comma-delimited CSV
/// GET /api/film/export/csv-simple
async fn export_plain_csv(State(ctx): State<Ctx>) -> Result<Response, AppError> {
    let session = current(&ctx)?;
    let output = export::plain_csv(&session.record, &session.cast)?;
    Ok(download_response(&session, output))
}

fn current(ctx: &Ctx) -> Result<FilmSession, AppError> {
    ctx.session.current().ok_or(AppError::NoSession)
}

/// Byte-stream response carrying the artifact. `X-Produced-Format`
/// reports which serializer actually ran, since the workbook route may
/// substitute CSV.
fn download_response(session: &FilmSession, output: ExportOutput) -> Response {
    let filename = export::export_filename(session.film_id, output.format, Utc::now());

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(output.format.mime_type()),
    );
    if let Ok(disposition) = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
    {
        headers.insert(header::CONTENT_DISPOSITION, disposition);
    }
    headers.insert(
        "x-produced-format",
        HeaderValue::from_static(output.format.as_str()),
    );

    (StatusCode::OK, headers, output.bytes).into_response()
}

pub fn mount() -> Router<Ctx> {
    Router::new()
        .route("/film/export/workbook", get(export_workbook))
        .route("/film/export/csv", get(export_spreadsheet_csv))
        .route("/film/export/csv-simple", get(export_plain_csv))
}
