//! Display formatters for raw API scalar fields.
//!
//! Every formatter is total: bad input degrades to the placeholder or
//! passes through unchanged, it never produces an error.

use chrono::NaiveDate;

use crate::record::PLACEHOLDER;

/// Re-render "NNNN CUR" money strings with space-grouped digits.
///
/// The first whitespace token must be a non-negative integer (comma group
/// separators allowed); anything else returns the input unchanged. A
/// missing currency token defaults to "USD".
pub fn format_money(value: &str) -> String {
    if value.is_empty() || value == PLACEHOLDER {
        return PLACEHOLDER.to_string();
    }

    let mut parts = value.split_whitespace();
    let Some(first) = parts.next() else {
        return value.to_string();
    };

    let digits = first.replace(',', "");
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return value.to_string();
    }
    let Ok(amount) = digits.parse::<u64>() else {
        return value.to_string();
    };

    let currency = parts
        .next()
        .filter(|token| !token.is_empty())
        .unwrap_or("USD");

    format!("{} {currency}", group_digits(amount))
}

/// Re-render the leading "YYYY-MM-DD" of a date string as "DD.MM.YYYY".
/// Unparseable dates pass through unchanged, never rejected.
pub fn format_date(value: &str) -> String {
    if value.is_empty() || value == PLACEHOLDER {
        return PLACEHOLDER.to_string();
    }

    let head: String = value.chars().take(10).collect();
    match NaiveDate::parse_from_str(&head, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Runtime in minutes; non-positive or missing values collapse to "-".
pub fn format_duration(minutes: Option<i64>) -> String {
    match minutes {
        Some(m) if m > 0 => m.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Vote counts, space-grouped; non-positive or missing collapse to "-".
pub fn format_vote_count(count: Option<i64>) -> String {
    match count {
        Some(c) if c > 0 => group_digits(c as u64),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Group a non-negative integer's digits with spaces, thousands-style.
fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}
