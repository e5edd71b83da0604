//! Cell-value cleaning shared by the export serializers.

/// Excel's hard ceiling is 32767 characters per cell; stay under it.
pub const MAX_CELL_CHARS: usize = 32_000;
/// Cap for person names.
pub const MAX_NAME_CHARS: usize = 255;
/// Appended to any truncated value.
pub const TRUNCATION_MARKER: &str = "...";

/// Strip NUL and byte-order-mark characters.
pub fn strip_control(value: &str) -> String {
    value
        .chars()
        .filter(|&ch| ch != '\u{0}' && ch != '\u{feff}')
        .collect()
}

/// Flatten CR/LF to spaces so a value stays on one CSV line.
pub fn flatten_newlines(value: &str) -> String {
    value
        .chars()
        .map(|ch| if ch == '\n' || ch == '\r' { ' ' } else { ch })
        .collect()
}

/// Truncate to `max_chars` characters, marking the cut.
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut truncated: String = value.chars().take(max_chars).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_nul_and_bom() {
        assert_eq!(strip_control("a\u{0}b\u{feff}c"), "abc");
        assert_eq!(strip_control("чистый"), "чистый");
    }

    #[test]
    fn flattens_both_newline_kinds() {
        assert_eq!(flatten_newlines("a\nb\r\nc"), "a b  c");
    }

    #[test]
    fn truncates_with_marker() {
        assert_eq!(truncate_chars("abcdef", 4), "abcd...");
        assert_eq!(truncate_chars("abcd", 4), "abcd");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        // Five Cyrillic characters are ten bytes; the limit is on chars.
        assert_eq!(truncate_chars("актер", 5), "актер");
        assert_eq!(truncate_chars("актеры", 5), "актер...");
    }
}
