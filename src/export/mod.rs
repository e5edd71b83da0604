//! Export serializers for the assembled film card.
//!
//! Three independent serializers consume the same (record, cast) pair:
//! an XLSX workbook, a semicolon-delimited CSV for spreadsheet apps, and
//! a plain comma-delimited CSV. None of them mutates its input.

mod delimited;
mod sanitize;
mod workbook;

pub use delimited::{plain_csv, spreadsheet_csv};
pub use workbook::workbook_or_fallback;

use chrono::{DateTime, Utc};

/// Export result type
pub type Result<T> = std::result::Result<T, ExportError>;

/// UTF-8 byte order mark; prefixed to text exports so spreadsheet
/// applications auto-detect the encoding.
pub const UTF8_BOM: &[u8] = "\u{feff}".as_bytes();

/// Errors raised while building an export artifact. Workbook builder
/// errors never surface here; they degrade to the CSV fallback instead.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The format an export actually produced.
///
/// The workbook serializer substitutes the spreadsheet CSV when the
/// builder fails; this tag makes the substitution visible to the caller
/// instead of mislabeling the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProducedFormat {
    Workbook,
    SpreadsheetCsv,
    PlainCsv,
}

impl ProducedFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Workbook => "xlsx",
            Self::SpreadsheetCsv | Self::PlainCsv => "csv",
        }
    }

    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Workbook => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            Self::SpreadsheetCsv | Self::PlainCsv => "text/csv; charset=utf-8",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Workbook => "workbook",
            Self::SpreadsheetCsv => "spreadsheet-csv",
            Self::PlainCsv => "plain-csv",
        }
    }
}

/// A finished export artifact.
#[derive(Debug, Clone)]
pub struct ExportOutput {
    pub format: ProducedFormat,
    pub bytes: Vec<u8>,
}

/// Download filename embedding the film id and a generation timestamp.
/// The extension always matches the format actually produced.
pub fn export_filename(
    film_id: u64,
    format: ProducedFormat,
    generated_at: DateTime<Utc>,
) -> String {
    let stamp = generated_at.format("%Y%m%d_%H%M%S");
    match format {
        ProducedFormat::PlainCsv => format!("film_{film_id}_simple_{stamp}.csv"),
        _ => format!("film_{film_id}_{stamp}.{}", format.extension()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn filenames_embed_id_and_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 15, 4, 5).unwrap();

        assert_eq!(
            export_filename(326, ProducedFormat::Workbook, at),
            "film_326_20240307_150405.xlsx"
        );
        assert_eq!(
            export_filename(326, ProducedFormat::SpreadsheetCsv, at),
            "film_326_20240307_150405.csv"
        );
        assert_eq!(
            export_filename(326, ProducedFormat::PlainCsv, at),
            "film_326_simple_20240307_150405.csv"
        );
    }
}
