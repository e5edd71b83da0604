//! Delimited-text exports built with the `csv` crate.

use csv::{QuoteStyle, WriterBuilder};

use crate::export::{
    ExportOutput, ProducedFormat, Result, UTF8_BOM,
    sanitize::{flatten_newlines, strip_control},
};
use crate::record::{CastEntry, FilmRecord};

const MAIN_SECTION: &str = "=== MAIN INFO ===";
const CAST_SECTION: &str = "=== CAST ===";
const CAST_HEADERS: [&str; 2] = ["Name", "ID"];

/// Semicolon-delimited, fully quoted, BOM-prefixed export for spreadsheet
/// applications. Values are stripped of NUL/BOM characters and newlines
/// are flattened to spaces.
pub fn spreadsheet_csv(record: &FilmRecord, cast: &[CastEntry]) -> Result<ExportOutput> {
    let bytes = write_sections(record, cast, b';', QuoteStyle::Always, true)?;
    Ok(ExportOutput {
        format: ProducedFormat::SpreadsheetCsv,
        bytes,
    })
}

/// Comma-delimited, minimally quoted, BOM-prefixed export. Values pass
/// through raw.
pub fn plain_csv(record: &FilmRecord, cast: &[CastEntry]) -> Result<ExportOutput> {
    let bytes = write_sections(record, cast, b',', QuoteStyle::Necessary, false)?;
    Ok(ExportOutput {
        format: ProducedFormat::PlainCsv,
        bytes,
    })
}

fn write_sections(
    record: &FilmRecord,
    cast: &[CastEntry],
    delimiter: u8,
    quote_style: QuoteStyle,
    sanitize: bool,
) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.extend_from_slice(UTF8_BOM);

    buf.extend_from_slice(MAIN_SECTION.as_bytes());
    buf.push(b'\n');
    {
        let mut writer = WriterBuilder::new()
            .delimiter(delimiter)
            .quote_style(quote_style)
            .from_writer(&mut buf);
        let fields = record.fields();
        writer.write_record(fields.iter().map(|(label, _)| *label))?;
        writer.write_record(fields.iter().map(|(_, value)| cell(value, sanitize)))?;
        writer.flush()?;
    }

    buf.push(b'\n');
    buf.extend_from_slice(CAST_SECTION.as_bytes());
    buf.push(b'\n');
    {
        let mut writer = WriterBuilder::new()
            .delimiter(delimiter)
            .quote_style(quote_style)
            .from_writer(&mut buf);
        writer.write_record(CAST_HEADERS)?;
        for entry in cast {
            writer.write_record([
                cell(&entry.name, sanitize),
                entry.staff_id.clone().unwrap_or_default(),
            ])?;
        }
        writer.flush()?;
    }

    Ok(buf)
}

fn cell(value: &str, sanitize: bool) -> String {
    if sanitize {
        flatten_newlines(&strip_control(value))
    } else {
        value.to_string()
    }
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
            genres: "фантастика, боевик".to_string(),
            countries: "США".to_string(),
            rating_imdb: "8.7".to_string(),
            rating_kinopoisk: "8.5".to_string(),
            vote_count: "601 234".to_string(),
            description: "строка один\nстрока два".to_string(),
            duration_minutes: "136".to_string(),
            budget: "63 000 000 $".to_string(),
            box_office_world: "463 517 383 $".to_string(),
            box_office_russia: PLACEHOLDER.to_string(),
            box_office_usa: "171 479 930 $".to_string(),
            premiere_russia: "14.10.1999".to_string(),
            premiere_world: "24.03.1999".to_string(),
        }
    }

    fn sample_cast() -> Vec<CastEntry> {
        vec![
            CastEntry {
                name: "Иван Иванов".to_string(),
                staff_id: Some("55".to_string()),
            },
            CastEntry {
                name: "Безымянный".to_string(),
                staff_id: None,
            },
        ]
    }

    fn split_sections(bytes: &[u8]) -> (String, String) {
        assert_eq!(&bytes[..3], UTF8_BOM);
        let text = std::str::from_utf8(&bytes[3..]).unwrap();
        let (main, cast) = text.split_once("\n\n").unwrap();
        (main.to_string(), cast.to_string())
    }

    fn section_table(section: &str, label: &str) -> String {
        let (header, table) = section.split_once('\n').unwrap();
        assert_eq!(header, label);
        table.to_string()
    }

    #[test]
    fn spreadsheet_csv_round_trips() {
        let record = sample_record();
        let cast = sample_cast();
        let output = spreadsheet_csv(&record, &cast).unwrap();
        assert_eq!(output.format, ProducedFormat::SpreadsheetCsv);

        let (main, cast_section) = split_sections(&output.bytes);

        let table = section_table(&main, "=== MAIN INFO ===");
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(table.as_bytes());
        let headers = reader.headers().unwrap().clone();
        let row = reader.records().next().unwrap().unwrap();

        assert_eq!(headers.get(0), Some("Название (RU)"));
        assert_eq!(row.get(0), Some("Матрица"));
        // Newlines inside values are flattened to spaces.
        assert_eq!(row.get(8), Some("строка один строка два"));
        assert_eq!(row.get(15), Some("24.03.1999"));

        let table = section_table(&cast_section, "=== CAST ===");
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(table.as_bytes());
        let rows: Vec<_> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get(0), Some("Иван Иванов"));
        assert_eq!(rows[0].get(1), Some("55"));
        assert_eq!(rows[1].get(0), Some("Безымянный"));
        assert_eq!(rows[1].get(1), Some(""));
    }

    #[test]
    fn spreadsheet_csv_quotes_every_field() {
        let output = spreadsheet_csv(&sample_record(), &sample_cast()).unwrap();
        let text = String::from_utf8(output.bytes[3..].to_vec()).unwrap();

        assert!(text.contains("\"Матрица\";\"The Matrix\""));
        assert!(text.contains("\"Иван Иванов\";\"55\""));
    }

    #[test]
    fn plain_csv_round_trips_and_preserves_values() {
        let record = sample_record();
        let cast = sample_cast();
        let output = plain_csv(&record, &cast).unwrap();
        assert_eq!(output.format, ProducedFormat::PlainCsv);

        assert_eq!(&output.bytes[..3], UTF8_BOM);
        let text = std::str::from_utf8(&output.bytes[3..]).unwrap();

        // No sanitization: the embedded newline survives inside quotes.
        assert!(text.contains("\"строка один\nстрока два\""));

        let (_, cast_part) = text.split_once("=== CAST ===\n").unwrap();
        let mut reader = csv::ReaderBuilder::new().from_reader(cast_part.as_bytes());
        let rows: Vec<_> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(rows[0].get(0), Some("Иван Иванов"));
        assert_eq!(rows[0].get(1), Some("55"));
        assert_eq!(rows[1].get(1), Some(""));
    }
}
