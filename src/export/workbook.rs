//! XLSX workbook export built with `rust_xlsxwriter`.

use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};
use tracing::warn;

use crate::export::{
    ExportOutput, ProducedFormat, Result,
    delimited::spreadsheet_csv,
    sanitize::{MAX_CELL_CHARS, MAX_NAME_CHARS, strip_control, truncate_chars},
};
use crate::record::{CastEntry, FilmRecord};

const MAIN_SHEET: &str = "Main Info";
const CAST_SHEET: &str = "Cast & Crew";
const CELL_COLUMN_WIDTH: f64 = 25.0;
const NAME_COLUMN_WIDTH: f64 = 40.0;
const ID_COLUMN_WIDTH: f64 = 15.0;

/// Build the two-sheet workbook, falling back to the spreadsheet CSV when
/// the builder fails. The returned tag reports which format was actually
/// produced.
pub fn workbook_or_fallback(record: &FilmRecord, cast: &[CastEntry]) -> Result<ExportOutput> {
    match build_workbook(record, cast) {
        Ok(bytes) => Ok(ExportOutput {
            format: ProducedFormat::Workbook,
            bytes,
        }),
        Err(e) => {
            warn!("Workbook build failed, falling back to CSV: {e}");
            spreadsheet_csv(record, cast)
        }
    }
}

fn build_workbook(
    record: &FilmRecord,
    cast: &[CastEntry],
) -> std::result::Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xD3D3D3))
        .set_border(FormatBorder::Thin);

    let main = workbook.add_worksheet();
    main.set_name(MAIN_SHEET)?;
    for (col, (label, value)) in record.fields().iter().enumerate() {
        let col = col as u16;
        main.write_string_with_format(0, col, *label, &header_format)?;
        main.write_string(1, col, cell(value, MAX_CELL_CHARS))?;
        main.set_column_width(col, CELL_COLUMN_WIDTH)?;
    }

    let cast_sheet = workbook.add_worksheet();
    cast_sheet.set_name(CAST_SHEET)?;
    cast_sheet.write_string_with_format(0, 0, "Name", &header_format)?;
    cast_sheet.write_string_with_format(0, 1, "ID", &header_format)?;
    cast_sheet.set_column_width(0, NAME_COLUMN_WIDTH)?;
    cast_sheet.set_column_width(1, ID_COLUMN_WIDTH)?;
    for (row, entry) in cast.iter().enumerate() {
        let row = (row + 1) as u32;
        cast_sheet.write_string(row, 0, cell(&entry.name, MAX_NAME_CHARS))?;
        cast_sheet.write_string(row, 1, entry.staff_id.as_deref().unwrap_or_default())?;
    }

    workbook.save_to_buffer()
}

fn cell(value: &str, max_chars: usize) -> String {
    truncate_chars(&strip_control(value), max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PLACEHOLDER;

    fn sample_record() -> FilmRecord {
        FilmRecord {
            title_ru: "Матрица".to_string(),
            title_original: "The Matrix".to_string(),
            year: "1999".to_string(),
            genres: "фантастика".to_string(),
            countries: "США".to_string(),
            rating_imdb: "8.7".to_string(),
            rating_kinopoisk: "8.5".to_string(),
            vote_count: "601 234".to_string(),
            description: "описание\u{0} с мусором\u{feff}".to_string(),
            duration_minutes: "136".to_string(),
            budget: PLACEHOLDER.to_string(),
            box_office_world: PLACEHOLDER.to_string(),
            box_office_russia: PLACEHOLDER.to_string(),
            box_office_usa: PLACEHOLDER.to_string(),
            premiere_russia: PLACEHOLDER.to_string(),
            premiere_world: PLACEHOLDER.to_string(),
        }
    }

    #[test]
    fn workbook_produces_xlsx_bytes() {
        let cast = vec![CastEntry {
            name: "Иван Иванов".to_string(),
            staff_id: Some("55".to_string()),
        }];

        let output = workbook_or_fallback(&sample_record(), &cast).unwrap();

        assert_eq!(output.format, ProducedFormat::Workbook);
        // XLSX is a ZIP container.
        assert_eq!(&output.bytes[..2], b"PK");
        assert!(output.bytes.len() > 500);
    }

    #[test]
    fn cells_are_stripped_and_truncated() {
        assert_eq!(cell("a\u{0}b\u{feff}c", 10), "abc");

        let long = "x".repeat(MAX_CELL_CHARS + 10);
        let cleaned = cell(&long, MAX_CELL_CHARS);
        assert!(cleaned.ends_with("..."));
        assert_eq!(cleaned.chars().count(), MAX_CELL_CHARS + 3);
    }
}
